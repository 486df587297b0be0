//! Bootstrap module for the project's Python environment.
//!
//! A run is a fixed sequence of steps, each of which must succeed before the
//! next one starts:
//! - make sure the dependency manager (uv) is installed
//! - create the virtual environment, or reuse the one that is already there
//! - activate it for the child processes that follow
//! - install the project in editable mode
//!
//! The first failure aborts the run. Nothing is rolled back, so a venv that
//! was created before a failed install stays on disk for the next run to
//! reuse (or for `tts-setup clean` to remove).

pub mod activation;
pub mod defaults;
pub mod manager;
pub mod uv;

use crate::config::SetupConfig;
use crate::console::Console;
use crate::error::{Result, SetupError};
use activation::Activation;
use manager::DependencyManager;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use uv::Uv;

/// Steps of a bootstrap run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ToolCheck,
    EnvCheck,
    Activate,
    Install,
    Done,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::ToolCheck,
        Step::EnvCheck,
        Step::Activate,
        Step::Install,
        Step::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::ToolCheck => "Tool check",
            Step::EnvCheck => "Environment check",
            Step::Activate => "Activation",
            Step::Install => "Dependency installation",
            Step::Done => "Done",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the environment check found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvState {
    /// The venv did not exist and was created by this run.
    Created,
    /// An existing venv was reused.
    Reused,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub venv_dir: PathBuf,
    pub env_state: EnvState,
    pub steps: Vec<Step>,
}

/// Read-only view of the environment, for `tts-setup info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentStatus {
    /// The dependency manager is not on PATH.
    ToolMissing,
    /// No usable venv yet.
    NeedsEnvironment,
    /// The venv exists and can be activated.
    Ready,
}

/// Runs the bootstrap sequence with a given dependency manager.
pub struct Bootstrapper<M: DependencyManager> {
    config: SetupConfig,
    manager: M,
}

impl<M: DependencyManager> Bootstrapper<M> {
    pub fn new(config: SetupConfig, manager: M) -> Self {
        Self { config, manager }
    }

    /// Run every step, stopping at the first failure.
    pub fn run<W: Write>(&mut self, console: &mut Console<W>) -> Result<Outcome> {
        let mut steps = Vec::with_capacity(Step::ALL.len());
        let venv_dir = self.config.venv_path();

        console.info(&format!(
            "Setting up Python environment with {}...",
            self.manager.name()
        ));

        // Tool check
        if let Err(e) = self.manager.locate() {
            if let SetupError::MissingTool { .. } = e {
                console.error(&e.to_string());
            }
            return Err(e);
        }
        steps.push(Step::ToolCheck);

        // Environment check
        let env_state = if venv_dir.exists() {
            console.warn(&format!(
                "Virtual environment already exists at {}",
                venv_dir.display()
            ));
            EnvState::Reused
        } else {
            console.info(&format!(
                "Creating virtual environment with Python {}...",
                self.config.python_version
            ));
            self.manager.create_venv(&self.config.python_version, &venv_dir)?;
            EnvState::Created
        };
        steps.push(Step::EnvCheck);

        // Activate
        console.info("Activating virtual environment...");
        let activation = Activation::from_venv(&venv_dir)?;
        log::debug!("VIRTUAL_ENV={}", activation.venv_dir().display());
        steps.push(Step::Activate);

        // Install
        console.info("Installing dependencies...");
        if !has_project_manifest(&self.config) {
            log::warn!(
                "No pyproject.toml or setup.py in {}",
                self.config.project_dir.display()
            );
        }
        self.manager.install_editable(&self.config.project_dir, &activation)?;
        steps.push(Step::Install);

        console.success("Environment setup complete!");
        console.plain(&format!(
            "To activate the environment, run: {}",
            activation.activate_command()
        ));
        console.plain(&format!(
            "To run inference: python {}",
            self.config.inference_script
        ));
        steps.push(Step::Done);

        Ok(Outcome {
            venv_dir,
            env_state,
            steps,
        })
    }
}

/// Bootstrap with uv on the process PATH.
pub fn run_with_uv<W: Write>(config: SetupConfig, console: &mut Console<W>) -> Result<Outcome> {
    Bootstrapper::new(config, Uv::new()).run(console)
}

fn has_project_manifest(config: &SetupConfig) -> bool {
    ["pyproject.toml", "setup.py"]
        .iter()
        .any(|name| config.project_dir.join(name).is_file())
}

/// Check the current environment status without changing anything.
pub fn check_status(config: &SetupConfig, uv: &Uv) -> EnvironmentStatus {
    if uv.find().is_none() {
        return EnvironmentStatus::ToolMissing;
    }

    if !activation::activate_script(&config.venv_path()).is_file() {
        return EnvironmentStatus::NeedsEnvironment;
    }

    EnvironmentStatus::Ready
}

/// Remove the virtual environment directory.
///
/// Returns whether anything was removed.
pub fn clean(config: &SetupConfig) -> Result<bool> {
    let venv_dir = config.venv_path();
    if !venv_dir.exists() {
        return Ok(false);
    }

    log::debug!("Removing {}", venv_dir.display());
    std::fs::remove_dir_all(&venv_dir)?;
    Ok(true)
}

/// Get information about the current environment.
pub fn get_info(config: &SetupConfig, uv: &Uv) -> String {
    let venv_dir = config.venv_path();
    let status = check_status(config, uv);

    let mut info = String::new();

    match uv.find() {
        Some(path) => info.push_str(&format!("uv: {}\n", path.display())),
        None => info.push_str("uv: not installed\n"),
    }
    info.push_str(&format!("Python version: {}\n", config.python_version));
    info.push_str(&format!("Venv dir: {}\n", venv_dir.display()));
    info.push_str(&format!("Venv exists: {}\n", venv_dir.exists()));
    info.push_str(&format!(
        "Venv Python: {}\n",
        activation::venv_python(&venv_dir).display()
    ));
    info.push_str(&format!(
        "Inference script present: {}\n",
        config.inference_script_path().is_file()
    ));
    info.push_str(&format!("Status: {:?}\n", status));

    info
}
