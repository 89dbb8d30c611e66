//! # Mapping Module
//!
//! Named axis and button indices for supported gamepads.
//!
//! This module handles:
//! - Parsing device, message type and mode identifiers
//! - Holding the constant name → index tables
//! - Selecting the axes/buttons table pair for a validated selection

pub mod registry;
pub mod tables;
pub mod types;

pub use registry::{get_mapping, is_supported_device, list_supported_devices, mapping_for, MappingPair, Selection};
pub use tables::MappingTable;
pub use types::{ButtonState, DeviceType, InputMode, MessageType};
