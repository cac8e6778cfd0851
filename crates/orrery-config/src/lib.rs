//! Configuration for the orrery scene.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line. Missing fields fall back to the reference scene defaults.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, MAX_DEPTH, SceneConfig, TextureConfig};
pub use error::ConfigError;
