//! # Mapping Registry
//!
//! Selects the axes and buttons tables for a (device, message type, mode)
//! combination.
//!
//! Two entry points are provided:
//!
//! - [`get_mapping`] takes raw strings, validates them in order (device,
//!   message type, mode) and reports the first invalid argument.
//! - [`mapping_for`] takes already-parsed enums and cannot fail.
//!
//! ## Usage
//!
//! ```
//! use gamepad_mappings::mapping::registry::get_mapping;
//!
//! let (axes, buttons) = get_mapping("logitech_f710_wireless", "joy", Some("xinput"))?;
//!
//! let raw_buttons = [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0];
//! assert_eq!(raw_buttons[buttons.get("B").unwrap()], 1);
//! assert_eq!(axes.len(), 8);
//! # Ok::<(), gamepad_mappings::error::MappingError>(())
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use super::tables::{self, MappingTable};
use super::types::{DeviceType, InputMode, MessageType};
use crate::error::Result;

/// Axes and buttons tables for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MappingPair {
    pub axes: MappingTable,
    pub buttons: MappingTable,
}

impl MappingPair {
    /// Splits the pair into `(axes, buttons)`.
    #[must_use]
    pub const fn into_tuple(self) -> (MappingTable, MappingTable) {
        (self.axes, self.buttons)
    }
}

/// A fully validated lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub device_type: DeviceType,
    pub message_type: MessageType,
    pub mode: InputMode,
}

impl Selection {
    /// Parses and validates raw selection strings.
    ///
    /// # Errors
    ///
    /// - `UnsupportedDeviceType`: `device_type` is not a supported identifier
    /// - `InvalidMessageType`: `message_type` is not "joy" or "gamepad" (any case)
    /// - `InvalidMode`: `mode` is missing or not a mode the device supports
    pub fn parse(device_type: &str, message_type: &str, mode: Option<&str>) -> Result<Self> {
        let device_type: DeviceType = device_type.parse()?;
        let message_type: MessageType = message_type.parse()?;
        let mode = InputMode::parse_for(device_type, mode)?;

        Ok(Self {
            device_type,
            message_type,
            mode,
        })
    }

    #[must_use]
    pub fn mapping(&self) -> MappingPair {
        mapping_for(self.device_type, self.message_type, self.mode)
    }
}

/// Returns the identifiers of every supported device, in a stable order.
///
/// # Examples
///
/// ```
/// use gamepad_mappings::mapping::registry::list_supported_devices;
///
/// assert_eq!(list_supported_devices(), vec!["logitech_f710_wireless"]);
/// ```
#[must_use]
pub fn list_supported_devices() -> Vec<&'static str> {
    DeviceType::ALL.iter().map(|device| device.as_str()).collect()
}

/// True if `device_type` is exactly one of [`list_supported_devices`].
#[must_use]
pub fn is_supported_device(device_type: &str) -> bool {
    device_type.parse::<DeviceType>().is_ok()
}

/// Returns `(axes, buttons)` for the given raw selection.
///
/// `device_type` is compared case-sensitively; `message_type` and `mode`
/// are not. No state is touched, so concurrent callers need no locking.
///
/// # Errors
///
/// See [`Selection::parse`]. Validation stops at the first invalid argument.
pub fn get_mapping(
    device_type: &str,
    message_type: &str,
    mode: Option<&str>,
) -> Result<(MappingTable, MappingTable)> {
    let selection = Selection::parse(device_type, message_type, mode).map_err(|e| {
        warn!("Rejected mapping request: {}", e);
        e
    })?;

    debug!(
        "Resolved mapping for {} ({} / {})",
        selection.device_type.display_name(),
        selection.message_type,
        selection.mode
    );

    Ok(selection.mapping().into_tuple())
}

/// Typed lookup. Total over every enum combination.
#[must_use]
pub const fn mapping_for(device: DeviceType, message: MessageType, mode: InputMode) -> MappingPair {
    let (axes, buttons) = match (device, message, mode) {
        (DeviceType::LogitechF710Wireless, MessageType::Joy, InputMode::DirectInput) => (
            tables::JOY_F710_DIRECTINPUT_AXES,
            tables::JOY_F710_DIRECTINPUT_BUTTONS,
        ),
        (DeviceType::LogitechF710Wireless, MessageType::Joy, InputMode::XInput) => {
            (tables::JOY_F710_XINPUT_AXES, tables::JOY_F710_XINPUT_BUTTONS)
        }
        (DeviceType::LogitechF710Wireless, MessageType::Gamepad, InputMode::DirectInput) => (
            tables::GAMEPAD_F710_DIRECTINPUT_AXES,
            tables::GAMEPAD_F710_DIRECTINPUT_BUTTONS,
        ),
        (DeviceType::LogitechF710Wireless, MessageType::Gamepad, InputMode::XInput) => (
            tables::GAMEPAD_F710_XINPUT_AXES,
            tables::GAMEPAD_F710_XINPUT_BUTTONS,
        ),
    };

    MappingPair { axes, buttons }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingError;

    const F710: &str = "logitech_f710_wireless";

    fn every_raw_selection() -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        for msg in MessageType::ALL {
            for mode in InputMode::ALL {
                out.push((msg.as_str(), mode.as_str()));
            }
        }
        out
    }

    #[test]
    fn test_supported_devices_are_supported() {
        for device in list_supported_devices() {
            assert!(is_supported_device(device), "{device} should be supported");
        }
    }

    #[test]
    fn test_unknown_devices_are_not_supported() {
        for device in ["xbox_360", "", "LOGITECH_F710_WIRELESS", "logitech_f710"] {
            assert!(!is_supported_device(device), "{device:?} should not be supported");
        }
    }

    #[test]
    fn test_case_insensitive_message_type_and_mode() {
        let upper = get_mapping(F710, "JOY", Some("DirectInput")).unwrap();
        let lower = get_mapping(F710, "joy", Some("directinput")).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_missing_mode_is_invalid_mode() {
        let err = get_mapping(F710, "joy", None).unwrap_err();
        assert!(matches!(err, MappingError::InvalidMode { value: None, .. }));
    }

    #[test]
    fn test_unknown_device_is_rejected() {
        let err = get_mapping("unknown_pad", "joy", Some("xinput")).unwrap_err();
        assert!(matches!(err, MappingError::UnsupportedDeviceType { .. }));
        assert!(err.to_string().contains("unknown_pad"));
    }

    #[test]
    fn test_unknown_message_type_is_rejected() {
        let err = get_mapping(F710, "xml", Some("xinput")).unwrap_err();
        assert!(matches!(err, MappingError::InvalidMessageType { .. }));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_device_checked_before_message_type_and_mode() {
        let err = get_mapping("unknown_pad", "xml", None).unwrap_err();
        assert!(matches!(err, MappingError::UnsupportedDeviceType { .. }));

        let err = get_mapping(F710, "xml", None).unwrap_err();
        assert!(matches!(err, MappingError::InvalidMessageType { .. }));
    }

    #[test]
    fn test_gamepad_directinput_sizes() {
        let (axes, buttons) = get_mapping(F710, "gamepad", Some("directinput")).unwrap();
        assert_eq!(buttons.len(), 16);
        assert!(buttons.has_contiguous_indices());
        assert_eq!(axes.len(), 4);
        assert!(axes.has_contiguous_indices());
    }

    #[test]
    fn test_every_selection_is_contiguous() {
        for (msg, mode) in every_raw_selection() {
            let (axes, buttons) = get_mapping(F710, msg, Some(mode)).unwrap();
            assert!(axes.has_contiguous_indices(), "{msg}/{mode} axes");
            assert!(buttons.has_contiguous_indices(), "{msg}/{mode} buttons");
        }
    }

    #[test]
    fn test_exact_indices() {
        let (axes, buttons) = get_mapping(F710, "joy", Some("xinput")).unwrap();
        let axes: Vec<_> = axes.iter().collect();
        assert_eq!(
            axes,
            vec![
                ("LS_HOR", 0),
                ("LS_VERT", 1),
                ("LT", 2),
                ("RS_HOR", 3),
                ("RS_VERT", 4),
                ("RT", 5),
                ("DPAD_HOR", 6),
                ("DPAD_VERT", 7),
            ]
        );
        assert_eq!(buttons.get("LOGITECH"), Some(8));
        assert_eq!(buttons.get("RSB"), Some(10));

        let (_, buttons) = get_mapping(F710, "joy", Some("directinput")).unwrap();
        assert_eq!(buttons.get("X"), Some(0));
        assert_eq!(buttons.get("A"), Some(1));
    }

    #[test]
    fn test_gamepad_tables_superset_of_joy_for_directinput() {
        let (_, joy) = get_mapping(F710, "joy", Some("directinput")).unwrap();
        let (_, gamepad) = get_mapping(F710, "gamepad", Some("directinput")).unwrap();
        assert!(gamepad.len() > joy.len());
        assert!(joy.names().all(|name| gamepad.contains(name)));
    }

    #[test]
    fn test_typed_lookup_matches_string_lookup() {
        for msg in MessageType::ALL {
            for mode in InputMode::ALL {
                let typed = mapping_for(DeviceType::LogitechF710Wireless, msg, mode);
                let raw = get_mapping(F710, msg.as_str(), Some(mode.as_str())).unwrap();
                assert_eq!(typed.into_tuple(), raw, "{msg}/{mode}");
            }
        }
    }

    #[test]
    fn test_selection_parse() {
        let selection = Selection::parse(F710, "Gamepad", Some("XInput")).unwrap();
        assert_eq!(selection.device_type, DeviceType::LogitechF710Wireless);
        assert_eq!(selection.message_type, MessageType::Gamepad);
        assert_eq!(selection.mode, InputMode::XInput);
        assert_eq!(selection.mapping().buttons.len(), 15);
    }

    #[test]
    fn test_concurrent_lookups() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| get_mapping(F710, "gamepad", Some("xinput")).map(|(a, b)| (a.len(), b.len())))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), (6, 15));
        }
    }
}
