//! External helper scripts
//!
//! The check and configure scripts are opaque collaborators; this module only
//! spawns them and captures what they print.

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    pub success: bool,
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Command failed: {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScriptOutput {
    /// Message used when the script failed without writing to stderr.
    pub fn failure_message(&self, script: &Path) -> String {
        match self.status {
            Some(code) => format!("Command failed: {} (exit status {code})", script.display()),
            None => format!("Command failed: {} (terminated by signal)", script.display()),
        }
    }
}

#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, script: &Path, args: &[String]) -> Result<ScriptOutput, ScriptError>;
}

/// Runs scripts as child processes on the tokio runtime.
#[derive(Debug, Default)]
pub struct ProcessScriptRunner;

impl ProcessScriptRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScriptRunner for ProcessScriptRunner {
    async fn run(&self, script: &Path, args: &[String]) -> Result<ScriptOutput, ScriptError> {
        let output = Command::new(script)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ScriptError::Spawn {
                path: script.to_path_buf(),
                source,
            })?;

        Ok(ScriptOutput {
            success: output.status.success(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::{fs, os::unix::fs::PermissionsExt};

    use tempfile::TempDir;

    use super::*;

    fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
        path
    }

    #[tokio::test]
    async fn captures_stdout_and_exit_code() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(&dir, "ok.sh", "echo configured");

        let output = ProcessScriptRunner::new()
            .run(&script, &[])
            .await
            .expect("script runs");

        assert!(output.success);
        assert_eq!(output.status, Some(0));
        assert_eq!(output.stdout, "configured\n");
    }

    #[tokio::test]
    async fn passes_argument_without_shell_splitting() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(&dir, "args.sh", r#"printf '%s|%s' "$#" "$1""#);

        let output = ProcessScriptRunner::new()
            .run(&script, &["a b; echo nope".to_string()])
            .await
            .expect("script runs");

        assert_eq!(output.stdout, "1|a b; echo nope");
    }

    #[tokio::test]
    async fn non_zero_exit_keeps_stderr() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(&dir, "fail.sh", "printf 'bad token' >&2\nexit 3");

        let output = ProcessScriptRunner::new()
            .run(&script, &[])
            .await
            .expect("script runs");

        assert!(!output.success);
        assert_eq!(output.status, Some(3));
        assert_eq!(output.stderr, "bad token");
        assert_eq!(
            output.failure_message(&script),
            format!("Command failed: {} (exit status 3)", script.display())
        );
    }

    #[tokio::test]
    async fn missing_script_is_spawn_error() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing.sh");

        let err = ProcessScriptRunner::new()
            .run(&missing, &[])
            .await
            .expect_err("expected spawn error");

        assert!(matches!(err, ScriptError::Spawn { .. }));
        assert!(err.to_string().starts_with("Command failed: "));
    }
}
