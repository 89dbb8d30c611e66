//! # Gamepad Mappings Library
//!
//! Axis and button index tables for `joy` and `gamepad` messages.
//!
//! Given a gamepad type, a message type and the gamepad's input mode, this
//! library returns the tables needed to read raw axis and button arrays by
//! control name.

pub mod config;
pub mod error;
pub mod mapping;
