//! # Gamepad Mappings
//!
//! Prints the axis and button index tables for a gamepad selection.
//!
//! The selection comes from a TOML configuration file (or built-in defaults)
//! and may be overridden per field on the command line.
//!
//! # Examples
//!
//! ```bash
//! gamepad-mappings --list
//! gamepad-mappings --message-type gamepad --mode directinput
//! gamepad-mappings config/default.toml --mode XInput
//! ```
//!
//! Expected output (pretty-printed here):
//! ```text
//! {
//!   "device_type": "logitech_f710_wireless",
//!   "message_type": "gamepad",
//!   "mode": "directinput",
//!   "axes": {"LS_HOR": 0, "LS_VERT": 1, "RS_HOR": 2, "RS_VERT": 3},
//!   "buttons": {"X": 0, "A": 1, ...}
//! }
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gamepad_mappings::config::Config;
use gamepad_mappings::mapping::registry::{list_supported_devices, MappingPair, Selection};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file (built-in defaults when omitted)
    config: Option<PathBuf>,

    #[arg(long)]
    /// Gamepad type, e.g. logitech_f710_wireless
    device: Option<String>,

    #[arg(long)]
    /// Message type: joy or gamepad
    message_type: Option<String>,

    #[arg(long)]
    /// Gamepad input mode: directinput or xinput
    mode: Option<String>,

    #[arg(long)]
    /// Print the supported gamepad types and exit
    list: bool,
}

/// JSON document printed for a resolved selection.
#[derive(Debug, Serialize)]
struct MappingReport {
    #[serde(flatten)]
    selection: Selection,
    #[serde(flatten)]
    mapping: MappingPair,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    // RUST_LOG takes precedence over the configured level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!("Gamepad Mappings v{} starting...", env!("CARGO_PKG_VERSION"));

    if args.list {
        for device in list_supported_devices() {
            println!("{}", device);
        }
        return Ok(());
    }

    let selection = resolve_selection(&args, &config)?;
    debug!("Selection: {:?}", selection);

    let report = MappingReport {
        selection,
        mapping: selection.mapping(),
    };
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}

/// Merge command-line overrides onto the configured selection and validate.
fn resolve_selection(args: &Args, config: &Config) -> Result<Selection> {
    let device = args.device.as_deref().unwrap_or(&config.selection.device_type);
    let message_type = args
        .message_type
        .as_deref()
        .unwrap_or(&config.selection.message_type);
    let mode = args.mode.as_deref().or(config.selection.mode.as_deref());

    Selection::parse(device, message_type, mode).context("Invalid gamepad selection")
}
