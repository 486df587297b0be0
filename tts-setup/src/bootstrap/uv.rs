//! `uv` as the dependency manager.

use super::activation::Activation;
use super::defaults::{UV_EXECUTABLE, UV_INSTALL_COMMAND};
use super::manager::DependencyManager;
use super::Step;
use crate::error::{Result, SetupError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct Uv {
    /// PATH to search; `None` uses the process PATH.
    search_path: Option<OsString>,
    executable: Option<PathBuf>,
}

impl Uv {
    pub fn new() -> Self {
        Self {
            search_path: None,
            executable: None,
        }
    }

    /// Look the executable up in `path` instead of the process PATH.
    pub fn with_search_path(path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(path.into()),
            executable: None,
        }
    }

    /// Resolve without failing, for status reports.
    pub fn find(&self) -> Option<PathBuf> {
        match &self.search_path {
            Some(path) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(UV_EXECUTABLE, Some(path), cwd).ok()
            }
            None => which::which(UV_EXECUTABLE).ok(),
        }
    }

    fn executable(&mut self) -> Result<PathBuf> {
        match &self.executable {
            Some(path) => Ok(path.clone()),
            None => self.locate(),
        }
    }

    fn run(step: Step, mut cmd: Command, display: String) -> Result<()> {
        log::debug!("{}: running `{}`", step, display);

        let status = cmd.status().map_err(|source| SetupError::Spawn {
            command: display.clone(),
            source,
        })?;

        if !status.success() {
            return Err(SetupError::CommandFailed {
                step,
                command: display,
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl Default for Uv {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyManager for Uv {
    fn name(&self) -> &str {
        UV_EXECUTABLE
    }

    fn locate(&mut self) -> Result<PathBuf> {
        let path = self.find().ok_or_else(|| SetupError::MissingTool {
            tool: UV_EXECUTABLE.to_string(),
            install_hint: UV_INSTALL_COMMAND.to_string(),
        })?;
        log::debug!("Found {} at {}", UV_EXECUTABLE, path.display());
        self.executable = Some(path.clone());
        Ok(path)
    }

    fn create_venv(&mut self, python_version: &str, venv_dir: &Path) -> Result<()> {
        let uv = self.executable()?;

        let mut cmd = Command::new(&uv);
        cmd.args(["venv", "--python", python_version]).arg(venv_dir);

        let display = format!(
            "{} venv --python {} {}",
            UV_EXECUTABLE,
            python_version,
            venv_dir.display()
        );
        Self::run(Step::EnvCheck, cmd, display)
    }

    fn install_editable(&mut self, project_dir: &Path, activation: &Activation) -> Result<()> {
        let uv = self.executable()?;

        let mut cmd = Command::new(&uv);
        cmd.args(["pip", "install", "-e", "."]).current_dir(project_dir);
        activation.apply(&mut cmd);

        let display = format!("{} pip install -e .", UV_EXECUTABLE);
        Self::run(Step::Install, cmd, display)
    }
}
