//! Pinned versions and default locations for the bootstrapped environment.

/// Interpreter version the virtual environment is created with.
pub const PYTHON_VERSION: &str = "3.12";

/// Virtual environment directory, relative to the project directory.
pub const VENV_DIR: &str = ".venv";

/// Dependency manager executable looked up on PATH.
pub const UV_EXECUTABLE: &str = "uv";

/// Shown when uv cannot be found.
/// From: https://docs.astral.sh/uv/getting-started/installation/
pub const UV_INSTALL_COMMAND: &str = "curl -LsSf https://astral.sh/uv/install.sh | sh";

/// Inference entry point the user runs once setup is done.
pub const INFERENCE_SCRIPT: &str = "tts_infer.py";

/// Directory holding the venv's interpreter and activation script.
#[cfg(not(windows))]
pub const SCRIPTS_DIR: &str = "bin";
#[cfg(windows)]
pub const SCRIPTS_DIR: &str = "Scripts";

#[cfg(not(windows))]
pub const PYTHON_EXECUTABLE: &str = "python";
#[cfg(windows)]
pub const PYTHON_EXECUTABLE: &str = "python.exe";
