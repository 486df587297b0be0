//! Fake uv executable and helpers for driving the tts-setup binary.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Appends its arguments to `$FAKE_UV_LOG`. `venv` lays out a minimal venv at
/// its last argument, `pip` records `VIRTUAL_ENV`. Exit codes are taken from
/// `FAKE_UV_VENV_EXIT` / `FAKE_UV_INSTALL_EXIT`.
const FAKE_UV: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_UV_LOG"
case "$1" in
  venv)
    code="${FAKE_UV_VENV_EXIT:-0}"
    if [ "$code" != "0" ]; then
      echo "error: No interpreter found for Python $3" >&2
      exit "$code"
    fi
    for last in "$@"; do :; done
    mkdir -p "$last/bin"
    : > "$last/bin/activate"
    ;;
  pip)
    echo "VIRTUAL_ENV=$VIRTUAL_ENV" >> "$FAKE_UV_LOG"
    exit "${FAKE_UV_INSTALL_EXIT:-0}"
    ;;
esac
exit 0
"#;

pub struct Sandbox {
    pub root: TempDir,
    pub project: PathBuf,
    pub home: PathBuf,
    pub bin: PathBuf,
    pub log: PathBuf,
}

impl Sandbox {
    /// Project, home and bin directories; bin is empty until `install_uv`.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let project = root.path().join("project");
        let home = root.path().join("home");
        let bin = root.path().join("bin");
        for dir in [&project, &home, &bin] {
            std::fs::create_dir_all(dir).expect("create sandbox dir");
        }
        std::fs::write(
            project.join("pyproject.toml"),
            "[project]\nname = \"tts\"\nversion = \"0.1.0\"\n",
        )
        .expect("write pyproject");
        let log = root.path().join("uv.log");

        Self {
            root,
            project,
            home,
            bin,
            log,
        }
    }

    pub fn install_uv(&self) {
        self.install_uv_script(FAKE_UV);
    }

    /// Executable `uv` whose interpreter does not exist, so it is found on
    /// PATH but cannot be started.
    pub fn install_unstartable_uv(&self) {
        self.install_uv_script("#!/nonexistent/interp\nexit 0\n");
    }

    fn install_uv_script(&self, script: &str) {
        let uv = self.bin.join("uv");
        std::fs::write(&uv, script).expect("write fake uv");
        std::fs::set_permissions(&uv, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake uv");
    }

    pub fn venv(&self) -> PathBuf {
        self.project.join(".venv")
    }

    /// Lines the fake uv logged, in order.
    pub fn uv_calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Build a tts-setup invocation confined to the sandbox.
    pub fn command(&self, with_system_path: bool) -> Command {
        let path = if with_system_path {
            format!("{}:/usr/bin:/bin", self.bin.display())
        } else {
            self.bin.display().to_string()
        };

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tts-setup"));
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env("PATH", path)
            .env("FAKE_UV_LOG", &self.log)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("VIRTUAL_ENV");
        cmd
    }

    pub fn run(&self, cmd: &mut Command) -> Output {
        cmd.output().expect("run tts-setup")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
