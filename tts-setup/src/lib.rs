//! Python environment bootstrapper for the TTS inference project.
//!
//! Ensures a uv-managed virtual environment exists and has the project
//! installed in editable mode.

pub mod bootstrap;
pub mod config;
pub mod console;
pub mod error;

pub use bootstrap::{Bootstrapper, EnvState, EnvironmentStatus, Outcome, Step};
pub use config::SetupConfig;
pub use console::Console;
pub use error::{Result, SetupError};
