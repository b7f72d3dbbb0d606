//! External process invocation.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{CvaError, CvaResult};

/// Runs an external command to completion in a given working directory.
///
/// The single seam between the materialization flow and the outside
/// world; tests substitute a recording implementation.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` inside `cwd`, resolving on exit code 0.
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CvaResult<()>;
}

/// [`CommandRunner`] backed by a real child process.
///
/// Standard streams are inherited so the external tool's own output and
/// progress reach the user live. Failures are not retried.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CvaResult<()> {
        let command_line = render_command(program, args);
        debug!(command = %command_line, cwd = %cwd.display(), "spawning");

        let status = tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| CvaError::CommandSpawn {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CvaError::CommandFailed {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Render a command line for error messages.
fn render_command(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command() {
        assert_eq!(
            render_command("npm", &["install", "tailwindcss"]),
            "npm install tailwindcss"
        );
        assert_eq!(render_command("npm", &[]), "npm");
    }

    #[tokio::test]
    async fn test_nonzero_exit_carries_command_and_code() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProcessRunner
            .run("false", &[], dir.path())
            .await
            .unwrap_err();

        match err {
            CvaError::CommandFailed { command, code } => {
                assert_eq!(command, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_executable_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProcessRunner
            .run("cva-no-such-executable", &[], dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, CvaError::CommandSpawn { .. }));
    }
}
