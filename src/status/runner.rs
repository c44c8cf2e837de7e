//! External command execution.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::error::StatusError;

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Output of a command that exited with status 0.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into [`StatusError::Failed`].
    pub fn into_success(self, program: &str) -> Result<Self, StatusError> {
        if self.success() {
            Ok(self)
        } else {
            Err(StatusError::Failed {
                program: program.to_string(),
                code: self.code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Something that can run an external program and capture its output.
///
/// Providers never spawn processes directly so they can be tested against a
/// canned runner.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// A non-zero exit status is not an error at this level; providers decide
    /// what an exit code means.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, StatusError>;
}

/// Runs commands with `std::process::Command`, stdin closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, StatusError> {
        debug!(program, ?args, "running command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    StatusError::NotFound {
                        program: program.to_string(),
                    }
                } else {
                    StatusError::Spawn {
                        program: program.to_string(),
                        source,
                    }
                }
            })?;

        let stdout = String::from_utf8(output.stdout).map_err(|_| StatusError::InvalidUtf8 {
            program: program.to_string(),
        })?;
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let code = output.status.code();
        trace!(program, ?code, bytes = stdout.len(), "command finished");

        Ok(CommandOutput {
            stdout,
            stderr,
            code,
        })
    }
}
