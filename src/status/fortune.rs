//! Fortune preamble shown above the image.

use super::error::StatusError;
use super::runner::CommandRunner;

/// Produces the preamble by running a fortune-like command.
///
/// Output is used verbatim, trailing newline included, so a multi-line
/// fortune keeps its attribution layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fortune {
    command: String,
    args: Vec<String>,
}

impl Fortune {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    pub fn preamble(&self, runner: &dyn CommandRunner) -> Result<String, StatusError> {
        let output = runner
            .run(&self.command, &self.args)?
            .into_success(&self.command)?;
        Ok(output.stdout)
    }
}

impl Default for Fortune {
    /// Short fortunes only.
    fn default() -> Self {
        Self::new("fortune".to_string(), vec!["-s".to_string()])
    }
}
