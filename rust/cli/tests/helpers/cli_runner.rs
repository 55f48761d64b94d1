use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_nowstars")),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    /// Runs with a scrubbed `NOWSTARS_*` environment plus `env`.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_in(args, env, None)
    }

    pub fn run_in(&self, args: &[&str], env: &[(&str, &str)], cwd: Option<&Path>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        for key in [
            "NOWSTARS_CONFIG",
            "NOWSTARS_SITE_NAME",
            "NOWSTARS_TABLE_PREFIX",
            "NOWSTARS_TABLE_SIZE",
            "NOWSTARS_CURRENCY",
            "NOWSTARS_TZ_LABEL",
            "RUST_LOG",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run nowstars binary");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
