//! Kernel and host information via `uname`.

use crate::status::error::StatusError;
use crate::status::provider::{QueryContext, StatusProvider};

/// Reports `uname` output, e.g. `Linux tardis 6.9.1-arch1-1`.
pub struct Uname {
    args: Vec<String>,
}

impl Uname {
    /// Create with explicit `uname` flags.
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl Default for Uname {
    /// Kernel name, hostname and kernel release.
    fn default() -> Self {
        Self::new(vec!["-snr".to_string()])
    }
}

impl StatusProvider for Uname {
    fn name(&self) -> &str {
        "uname"
    }

    fn query(&self, ctx: &QueryContext<'_>) -> Result<String, StatusError> {
        let output = ctx.runner.run("uname", &self.args)?.into_success("uname")?;
        Ok(output.stdout.trim_end().to_string())
    }
}
