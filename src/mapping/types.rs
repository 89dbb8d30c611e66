//! # Selection Types
//!
//! Typed identifiers for the three lookup keys (device, message type, mode)
//! plus the shared [`ButtonState`] enumeration.
//!
//! Raw strings are parsed exactly once, at the boundary. Device identifiers
//! are matched case-sensitively; message types and modes are ASCII
//! case-insensitive.
//!
//! ```
//! use gamepad_mappings::mapping::types::{DeviceType, InputMode, MessageType};
//!
//! let device: DeviceType = "logitech_f710_wireless".parse()?;
//! let msg: MessageType = "JOY".parse()?;
//! let mode = InputMode::parse_for(device, Some("DirectInput"))?;
//! assert_eq!(msg, MessageType::Joy);
//! assert_eq!(mode, InputMode::DirectInput);
//! # Ok::<(), gamepad_mappings::error::MappingError>(())
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::MappingError;

/// Supported gamepad models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Logitech F710 wireless gamepad (DirectInput / XInput switch on the back).
    LogitechF710Wireless,
}

impl DeviceType {
    /// Every supported device, in listing order.
    pub const ALL: [DeviceType; 1] = [DeviceType::LogitechF710Wireless];

    /// Identifier used on the string boundary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeviceType::LogitechF710Wireless => "logitech_f710_wireless",
        }
    }

    /// Human readable name, as used in error messages.
    ///
    /// ```
    /// use gamepad_mappings::mapping::types::DeviceType;
    ///
    /// assert_eq!(DeviceType::LogitechF710Wireless.display_name(), "Logitech F710 Wireless");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            DeviceType::LogitechF710Wireless => "Logitech F710 Wireless",
        }
    }

    /// Input modes the device can be switched into.
    #[must_use]
    pub const fn supported_modes(self) -> &'static [InputMode] {
        match self {
            DeviceType::LogitechF710Wireless => &[InputMode::DirectInput, InputMode::XInput],
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceType::ALL
            .into_iter()
            .find(|device| device.as_str() == s)
            .ok_or_else(|| MappingError::UnsupportedDeviceType {
                value: s.to_string(),
            })
    }
}

/// Downstream message format.
///
/// `Joy` exposes the D-pad as two raw axes; `Gamepad` decodes it into four
/// directional buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Joy,
    Gamepad,
}

impl MessageType {
    pub const ALL: [MessageType; 2] = [MessageType::Joy, MessageType::Gamepad];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageType::Joy => "joy",
            MessageType::Gamepad => "gamepad",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|msg| msg.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MappingError::InvalidMessageType {
                value: s.to_string(),
            })
    }
}

/// Driver mode the gamepad reports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    DirectInput,
    XInput,
}

impl InputMode {
    pub const ALL: [InputMode; 2] = [InputMode::DirectInput, InputMode::XInput];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            InputMode::DirectInput => "directinput",
            InputMode::XInput => "xinput",
        }
    }

    /// Parses an optional mode for `device`.
    ///
    /// A missing mode, an unknown mode, or a mode the device does not support
    /// all yield [`MappingError::InvalidMode`].
    pub fn parse_for(device: DeviceType, mode: Option<&str>) -> Result<Self, MappingError> {
        let invalid = || MappingError::InvalidMode {
            value: mode.map(str::to_string),
            device: device.display_name().to_string(),
        };

        let raw = mode.ok_or_else(invalid)?;
        device
            .supported_modes()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(invalid)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debounced state of a single button.
///
/// Provided for consumers that track button edges; nothing in this crate
/// computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ButtonState {
    Up = 0,
    Pressed = 1,
    Down = 2,
    Released = 3,
}

impl ButtonState {
    pub const ALL: [ButtonState; 4] = [
        ButtonState::Up,
        ButtonState::Pressed,
        ButtonState::Down,
        ButtonState::Released,
    ];

    /// Numeric value of the state.
    ///
    /// ```
    /// use gamepad_mappings::mapping::types::ButtonState;
    ///
    /// assert_eq!(ButtonState::Pressed.value(), 1);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ButtonState::Up => "UP",
            ButtonState::Pressed => "PRESSED",
            ButtonState::Down => "DOWN",
            ButtonState::Released => "RELEASED",
        }
    }
}

impl TryFrom<u8> for ButtonState {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ButtonState::ALL.get(usize::from(value)).copied().ok_or(value)
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
