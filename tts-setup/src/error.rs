use std::path::PathBuf;
use thiserror::Error;

use crate::bootstrap::Step;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("{tool} is not installed. Please install it first:\n  {install_hint}")]
    MissingTool { tool: String, install_hint: String },

    #[error("{step} failed{}: {command}", code.map(|c| format!(" (exit code {})", c)).unwrap_or_default())]
    CommandFailed {
        step: Step,
        command: String,
        code: Option<i32>,
    },

    #[error("Failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Activation script not found: {}", path.display())]
    ActivationMissing { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SetupError {
    /// Process exit status for this failure.
    ///
    /// A failed sub-command hands its own exit code through; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::CommandFailed { code: Some(code), .. } => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }
}

impl From<toml::de::Error> for SetupError {
    fn from(err: toml::de::Error) -> Self {
        SetupError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SetupError {
    fn from(err: toml::ser::Error) -> Self {
        SetupError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_exits_one() {
        let err = SetupError::MissingTool {
            tool: "uv".to_string(),
            install_hint: "curl -LsSf https://astral.sh/uv/install.sh | sh".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        let msg = err.to_string();
        assert!(msg.contains("uv is not installed"));
        assert!(msg.contains("install.sh"));
    }

    #[test]
    fn test_command_failure_propagates_code() {
        let err = SetupError::CommandFailed {
            step: Step::Install,
            command: "uv pip install -e .".to_string(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("exit code 3"));
    }

    #[test]
    fn test_signal_or_out_of_range_code_falls_back_to_one() {
        let killed = SetupError::CommandFailed {
            step: Step::EnvCheck,
            command: "uv venv".to_string(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);

        let negative = SetupError::CommandFailed {
            step: Step::Install,
            command: "uv pip install -e .".to_string(),
            code: Some(-1),
        };
        assert_eq!(negative.exit_code(), 1);

        let wrapped = SetupError::CommandFailed {
            step: Step::Install,
            command: "uv pip install -e .".to_string(),
            code: Some(256),
        };
        assert_eq!(wrapped.exit_code(), 1);
    }

    #[test]
    fn test_spawn_failure_reports_os_error_once() {
        let err = SetupError::Spawn {
            command: "uv venv --python 3.12 .venv".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 1);

        let os_msg = std::io::Error::from(std::io::ErrorKind::NotFound).to_string();
        let rendered = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(rendered.matches(&os_msg).count(), 1, "rendered: {rendered}");
        assert!(rendered.starts_with("Failed to start `uv venv --python 3.12 .venv`"));
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err = SetupError::from(std::io::Error::other("disk full"));
        assert_eq!(format!("{:#}", anyhow::Error::from(err)), "disk full");
    }

    #[test]
    fn test_config_error_from_toml() {
        let err: SetupError = toml::from_str::<toml::Value>("not = = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, SetupError::Config(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
