use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Isolated environment for running the `gitmux` binary.
///
/// `XDG_CONFIG_HOME`/`HOME` point into a temp dir so a developer's own
/// config never leaks into a test, and `GITMUX_*` variables are cleared.
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Location of the default config file inside this environment.
    pub fn default_config_path(&self) -> PathBuf {
        self.root().join("config").join("gitmux").join("config.toml")
    }

    /// Write `contents` to the default config location.
    pub fn write_default_config(&self, contents: &str) {
        let path = self.default_config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    /// Write `contents` to `name` in the temp dir and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitmux"));
        for (key, _) in std::env::vars_os() {
            if key.to_string_lossy().starts_with("GITMUX_") {
                cmd.env_remove(key);
            }
        }
        cmd.env("XDG_CONFIG_HOME", self.root().join("config"))
            .env("HOME", self.root())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.root());
        cmd
    }

    /// Run with `args`, piping `stdin` in.
    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        self.run_with(self.command(), args, stdin)
    }

    pub fn run_with(&self, mut cmd: Command, args: &[&str], stdin: &str) -> Output {
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if stdin.is_empty() {
            cmd.stdin(Stdio::null());
        } else {
            cmd.stdin(Stdio::piped());
        }
        let mut child = cmd.spawn().expect("failed to spawn gitmux");
        if let Some(mut pipe) = child.stdin.take() {
            // gitmux may exit without reading stdin (e.g. when given a file)
            let _ = pipe.write_all(stdin.as_bytes());
        }
        child.wait_with_output().expect("failed to wait for gitmux")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Minimal config with readable markers instead of tmux styles.
pub const MARKER_CONFIG: &str = r#"
layout = ["branch", " ", "remote-branch", "divergence", " ", "flags"]

[styles]
clear = "<c>"
branch = "<b>"
remote = "<r>"
divergence = "<d>"
clean = "<ok>"
staged = "<s>"
conflict = "<x>"
modified = "<m>"
stashed = "<st>"
untracked = "<u>"
insertions = "<i>"
deletions = "<del>"

[symbols]
branch = "B:"
clean = "CLEAN"
staged = "S"
conflict = "X"
modified = "M"
stashed = "ST"
untracked = "U"
ahead = "+"
behind = "-"
insertions = "I"
deletions = "D"
"#;
