//! Virtual environment activation state.
//!
//! Activating a venv means pointing `VIRTUAL_ENV` at it, putting its scripts
//! directory first on `PATH`, and dropping `PYTHONHOME`. Here that state is
//! applied to each child process we spawn rather than to this process, and it
//! is never written anywhere.

use super::defaults::{PYTHON_EXECUTABLE, SCRIPTS_DIR};
use crate::error::{Result, SetupError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment changes that make a venv's interpreter resolve first.
#[derive(Debug, Clone)]
pub struct Activation {
    /// Absolute, as exported in `VIRTUAL_ENV`.
    venv_dir: PathBuf,
    /// As configured, for messages.
    display_dir: PathBuf,
    path: OsString,
}

impl Activation {
    /// Build the activation state for `venv_dir`, prepending its scripts
    /// directory to the current `PATH`.
    pub fn from_venv(venv_dir: &Path) -> Result<Self> {
        Self::with_path(venv_dir, std::env::var_os("PATH"))
    }

    /// Same as [`Activation::from_venv`] with an explicit base `PATH`.
    pub fn with_path(venv_dir: &Path, base_path: Option<OsString>) -> Result<Self> {
        let script = activate_script(venv_dir);
        if !script.is_file() {
            return Err(SetupError::ActivationMissing { path: script });
        }

        let display_dir = venv_dir.to_path_buf();
        let venv_dir = std::path::absolute(venv_dir)?;

        let mut dirs = vec![venv_dir.join(SCRIPTS_DIR)];
        if let Some(base) = base_path {
            dirs.extend(std::env::split_paths(&base));
        }
        let path = std::env::join_paths(dirs)
            .map_err(|e| SetupError::Config(format!("Invalid PATH entry: {}", e)))?;

        Ok(Self {
            venv_dir,
            display_dir,
            path,
        })
    }

    /// Apply the activation state to a child command.
    pub fn apply(&self, cmd: &mut Command) {
        cmd.env("VIRTUAL_ENV", &self.venv_dir)
            .env("PATH", &self.path)
            .env_remove("PYTHONHOME");
    }

    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }

    /// `PATH` value with the venv's scripts directory first.
    pub fn path(&self) -> &OsString {
        &self.path
    }

    /// The venv's interpreter.
    pub fn python(&self) -> PathBuf {
        venv_python(&self.venv_dir)
    }

    /// Shell command a user runs to activate the venv by hand.
    pub fn activate_command(&self) -> String {
        activate_command(&self.display_dir)
    }
}

/// Path to the venv's shell activation script.
pub fn activate_script(venv_dir: &Path) -> PathBuf {
    venv_dir.join(SCRIPTS_DIR).join("activate")
}

/// Interpreter inside `venv_dir`.
pub fn venv_python(venv_dir: &Path) -> PathBuf {
    venv_dir.join(SCRIPTS_DIR).join(PYTHON_EXECUTABLE)
}

/// Shell command that activates `venv_dir` in an interactive shell.
pub fn activate_command(venv_dir: &Path) -> String {
    if cfg!(windows) {
        format!("{}", venv_dir.join(SCRIPTS_DIR).join("activate").display())
    } else {
        format!("source {}", activate_script(venv_dir).display())
    }
}
