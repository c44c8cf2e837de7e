//! Pending package updates.

use tracing::debug;

use crate::status::error::StatusError;
use crate::status::provider::{QueryContext, StatusProvider};

/// `checkupdates` exits with 2 when there is nothing to update.
const NO_UPDATES_EXIT_CODE: i32 = 2;

/// Counts pending updates reported one per line by a command such as
/// pacman's `checkupdates`.
///
/// `checkupdates` can take several seconds; keep `status.parallel` on if
/// other items are slow too.
pub struct Updates {
    command: String,
    args: Vec<String>,
}

impl Updates {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    /// Number of pending updates in the command's stdout.
    pub fn count(stdout: &str) -> usize {
        stdout.lines().filter(|line| !line.trim().is_empty()).count()
    }
}

impl Default for Updates {
    fn default() -> Self {
        Self::new("checkupdates".to_string(), Vec::new())
    }
}

impl StatusProvider for Updates {
    fn name(&self) -> &str {
        &self.command
    }

    fn query(&self, ctx: &QueryContext<'_>) -> Result<String, StatusError> {
        let output = ctx.runner.run(&self.command, &self.args)?;

        let count = if output.code == Some(NO_UPDATES_EXIT_CODE) {
            0
        } else {
            Self::count(&output.into_success(&self.command)?.stdout)
        };
        debug!(command = %self.command, count, "pending updates");

        Ok(format!(
            "{} updates available",
            ctx.palette.bold(&count.to_string())
        ))
    }
}
