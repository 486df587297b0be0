use super::activation::Activation;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// External tool that creates virtual environments and installs packages.
pub trait DependencyManager {
    /// Executable name, for display.
    fn name(&self) -> &str;

    /// Resolve the executable, failing with `SetupError::MissingTool` if it
    /// is not installed.
    fn locate(&mut self) -> Result<PathBuf>;

    /// Create a virtual environment at `venv_dir` pinned to `python_version`.
    fn create_venv(&mut self, python_version: &str, venv_dir: &Path) -> Result<()>;

    /// Install the project at `project_dir` in editable mode into the
    /// activated environment.
    fn install_editable(&mut self, project_dir: &Path, activation: &Activation) -> Result<()>;
}
