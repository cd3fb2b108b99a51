//! Configuration for the veld world generator.
//!
//! Settings persist to disk as RON, support CLI overrides via clap, and
//! tolerate missing or unknown fields for forward/backward compatibility.

mod cli;
mod config;
mod error;

use std::path::PathBuf;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, VizConfig, WorldConfig};
pub use error::ConfigError;

/// Platform config directory for veld (`<config_dir>/veld`), if resolvable.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("veld"))
}
