//! # Mapping Tables
//!
//! Constant name → index tables for every supported
//! (device, message type, mode) combination.
//!
//! Each index is a position in the raw `axes` or `buttons` array of the
//! corresponding message. Indices within a table run contiguously from 0.
//!
//! ## Logitech F710 Wireless
//!
//! | Message | Mode | Axes | Buttons |
//! |---------|------|------|---------|
//! | joy | directinput | 6 (D-pad as axes 4/5) | 12 |
//! | joy | xinput | 8 (triggers analog, D-pad as axes 6/7) | 11 |
//! | gamepad | directinput | 4 | 16 (D-pad decoded to buttons 12-15) |
//! | gamepad | xinput | 6 | 15 (D-pad decoded to buttons 11-14) |
//!
//! ## Usage
//!
//! ```
//! use gamepad_mappings::mapping::tables::JOY_F710_XINPUT_AXES;
//!
//! let axes = [0.0_f32, -1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let lt = JOY_F710_XINPUT_AXES.get("LT").unwrap();
//! assert_eq!(axes[lt], 0.5);
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Immutable, ordered association from control name to raw array index.
///
/// Backed by `'static` data, so copies are free and the table can be shared
/// across threads without synchronization.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MappingTable {
    entries: &'static [(&'static str, usize)],
}

impl MappingTable {
    const fn new(entries: &'static [(&'static str, usize)]) -> Self {
        Self { entries }
    }

    /// Number of controls in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the control named `name`, if present.
    ///
    /// Control names are matched exactly (`"DPAD_UP"`, not `"dpad_up"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use gamepad_mappings::mapping::tables::JOY_F710_DIRECTINPUT_BUTTONS;
    ///
    /// assert_eq!(JOY_F710_DIRECTINPUT_BUTTONS.get("A"), Some(1));
    /// assert_eq!(JOY_F710_DIRECTINPUT_BUTTONS.get("LOGITECH"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|&(_, index)| index)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Reverse lookup: the control name stored at `index`.
    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, i)| i == index)
            .map(|&(key, _)| key)
    }

    /// Iterates `(name, index)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> {
        self.entries.iter().copied()
    }

    /// Control names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|&(key, _)| key)
    }

    /// Owned copy keyed by name.
    #[must_use]
    pub fn to_btree_map(&self) -> BTreeMap<&'static str, usize> {
        self.iter().collect()
    }

    /// True if the indices are exactly `0..len` with no gaps or duplicates.
    #[must_use]
    pub fn has_contiguous_indices(&self) -> bool {
        let mut seen = vec![false; self.len()];
        for (_, index) in self.iter() {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Debug for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for MappingTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, index) in self.iter() {
            map.serialize_entry(name, &index)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = (&'static str, usize);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (&'static str, usize)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

// Joy messages

pub const JOY_F710_DIRECTINPUT_AXES: MappingTable = MappingTable::new(&[
    ("LS_HOR", 0),
    ("LS_VERT", 1),
    ("RS_HOR", 2),
    ("RS_VERT", 3),
    ("DPAD_HOR", 4),
    ("DPAD_VERT", 5),
]);

pub const JOY_F710_DIRECTINPUT_BUTTONS: MappingTable = MappingTable::new(&[
    ("X", 0),
    ("A", 1),
    ("B", 2),
    ("Y", 3),
    ("LB", 4),
    ("RB", 5),
    ("LT", 6),
    ("RT", 7),
    ("BACK", 8),
    ("START", 9),
    ("LSB", 10),
    ("RSB", 11),
]);

pub const JOY_F710_XINPUT_AXES: MappingTable = MappingTable::new(&[
    ("LS_HOR", 0),
    ("LS_VERT", 1),
    ("LT", 2),
    ("RS_HOR", 3),
    ("RS_VERT", 4),
    ("RT", 5),
    ("DPAD_HOR", 6),
    ("DPAD_VERT", 7),
]);

pub const JOY_F710_XINPUT_BUTTONS: MappingTable = MappingTable::new(&[
    ("A", 0),
    ("B", 1),
    ("X", 2),
    ("Y", 3),
    ("LB", 4),
    ("RB", 5),
    ("BACK", 6),
    ("START", 7),
    ("LOGITECH", 8),
    ("LSB", 9),
    ("RSB", 10),
]);

// Gamepad messages

pub const GAMEPAD_F710_DIRECTINPUT_AXES: MappingTable = MappingTable::new(&[
    ("LS_HOR", 0),
    ("LS_VERT", 1),
    ("RS_HOR", 2),
    ("RS_VERT", 3),
]);

pub const GAMEPAD_F710_DIRECTINPUT_BUTTONS: MappingTable = MappingTable::new(&[
    ("X", 0),
    ("A", 1),
    ("B", 2),
    ("Y", 3),
    ("LB", 4),
    ("RB", 5),
    ("LT", 6),
    ("RT", 7),
    ("BACK", 8),
    ("START", 9),
    ("LSB", 10),
    ("RSB", 11),
    ("DPAD_LEFT", 12),
    ("DPAD_RIGHT", 13),
    ("DPAD_UP", 14),
    ("DPAD_DOWN", 15),
]);

pub const GAMEPAD_F710_XINPUT_AXES: MappingTable = MappingTable::new(&[
    ("LS_HOR", 0),
    ("LS_VERT", 1),
    ("LT", 2),
    ("RS_HOR", 3),
    ("RS_VERT", 4),
    ("RT", 5),
]);

pub const GAMEPAD_F710_XINPUT_BUTTONS: MappingTable = MappingTable::new(&[
    ("A", 0),
    ("B", 1),
    ("X", 2),
    ("Y", 3),
    ("LB", 4),
    ("RB", 5),
    ("BACK", 6),
    ("START", 7),
    ("LOGITECH", 8),
    ("LSB", 9),
    ("RSB", 10),
    ("DPAD_LEFT", 11),
    ("DPAD_RIGHT", 12),
    ("DPAD_UP", 13),
    ("DPAD_DOWN", 14),
]);
