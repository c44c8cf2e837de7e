//! Status lines shown beside the image.
//!
//! A [`Status`] holds an ordered list of [`StatusProvider`]s and runs them
//! through a [`CommandRunner`]. The fortune preamble comes from the same
//! runner via [`Fortune`].
//!
//! # Module Structure
//!
//! - [`provider`] - the `StatusProvider` trait and query context
//! - [`providers`] - built-in providers (uname, pending updates, any command)
//! - [`runner`] - process execution behind the `CommandRunner` trait
//! - [`fortune`] - the preamble source

mod error;
mod fortune;
mod provider;
pub mod providers;
mod runner;

pub use error::StatusError;
pub use fortune::Fortune;
pub use provider::{QueryContext, StatusProvider};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::theme::Palette;

/// What to do when a status provider fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop and report the first failure
    #[default]
    Abort,
    /// Log a warning and leave the line out
    Skip,
}

/// Gathers status lines from providers.
pub struct Status {
    providers: Vec<Box<dyn StatusProvider>>,
    runner: Box<dyn CommandRunner>,
    on_error: OnError,
    parallel: bool,
}

impl Status {
    /// Create with the system runner, aborting on errors, running in parallel.
    pub fn new(providers: Vec<Box<dyn StatusProvider>>) -> Self {
        Self::with_runner(providers, Box::new(SystemRunner::new()))
    }

    /// Create with a specific runner (for testing).
    pub fn with_runner(
        providers: Vec<Box<dyn StatusProvider>>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            providers,
            runner,
            on_error: OnError::default(),
            parallel: true,
        }
    }

    pub fn on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Get a reference to the providers list.
    pub fn providers(&self) -> &[Box<dyn StatusProvider>] {
        &self.providers
    }

    /// The runner used for queries.
    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }

    /// Query every provider, returning lines in provider order.
    pub fn gather(&self, palette: &Palette) -> Result<Vec<String>, StatusError> {
        let ctx = QueryContext::new(self.runner.as_ref(), palette);
        let query = |provider: &Box<dyn StatusProvider>| {
            let result = provider.query(&ctx);
            debug!(provider = provider.name(), ok = result.is_ok(), "status queried");
            result
        };

        let results: Vec<Result<String, StatusError>> = if self.parallel {
            self.providers.par_iter().map(query).collect()
        } else {
            self.providers.iter().map(query).collect()
        };

        let mut lines = Vec::with_capacity(results.len());
        for (provider, result) in self.providers.iter().zip(results) {
            match result {
                Ok(line) => lines.push(line),
                Err(e) if self.on_error == OnError::Skip => {
                    warn!(provider = provider.name(), error = %e, "skipping status line");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(lines)
    }
}
