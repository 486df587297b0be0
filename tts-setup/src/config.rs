//! tts-setup configuration management.

use crate::bootstrap::defaults::{INFERENCE_SCRIPT, PYTHON_VERSION, VENV_DIR};
use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Interpreter version the venv is created with
    #[serde(default = "default_python_version")]
    pub python_version: String,

    /// Venv location, relative to `project_dir` unless absolute
    #[serde(default = "default_venv_dir")]
    pub venv_dir: PathBuf,

    /// Directory installed with `uv pip install -e .`
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// Inference entry point named in the completion notice
    #[serde(default = "default_inference_script")]
    pub inference_script: String,
}

fn default_python_version() -> String {
    PYTHON_VERSION.to_string()
}

fn default_venv_dir() -> PathBuf {
    PathBuf::from(VENV_DIR)
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_inference_script() -> String {
    INFERENCE_SCRIPT.to_string()
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python_version: default_python_version(),
            venv_dir: default_venv_dir(),
            project_dir: default_project_dir(),
            inference_script: default_inference_script(),
        }
    }
}

impl SetupConfig {
    /// Get the config file path: ~/.config/cli-programs/tts-setup.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SetupError::Config("Could not determine home directory".into()))?;
        Ok(home
            .join(".config")
            .join("cli-programs")
            .join("tts-setup.toml"))
    }

    /// Load config from the default location, returning defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: SetupConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.python_version.trim().is_empty() {
            return Err(SetupError::Config("python_version must not be empty".into()));
        }
        if self.venv_dir.as_os_str().is_empty() {
            return Err(SetupError::Config("venv_dir must not be empty".into()));
        }
        Ok(())
    }

    /// Venv directory as used on the command line.
    pub fn venv_path(&self) -> PathBuf {
        if self.venv_dir.is_absolute() || self.project_dir == Path::new(".") {
            self.venv_dir.clone()
        } else {
            self.project_dir.join(&self.venv_dir)
        }
    }

    pub fn inference_script_path(&self) -> PathBuf {
        self.project_dir.join(&self.inference_script)
    }
}
