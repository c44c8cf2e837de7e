//! Arbitrary command output as a status line.

use crate::status::error::StatusError;
use crate::status::provider::{QueryContext, StatusProvider};

/// Placeholder replaced with the command's trimmed stdout.
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Runs a configured command and substitutes its output into a format string.
pub struct CommandItem {
    command: String,
    args: Vec<String>,
    format: String,
}

impl CommandItem {
    pub fn new(command: String, args: Vec<String>, format: String) -> Self {
        Self {
            command,
            args,
            format,
        }
    }

    fn render(&self, output: &str) -> String {
        self.format.replace(OUTPUT_PLACEHOLDER, output)
    }
}

impl StatusProvider for CommandItem {
    fn name(&self) -> &str {
        &self.command
    }

    fn query(&self, ctx: &QueryContext<'_>) -> Result<String, StatusError> {
        let output = ctx
            .runner
            .run(&self.command, &self.args)?
            .into_success(&self.command)?;
        Ok(self.render(output.stdout.trim()))
    }
}
