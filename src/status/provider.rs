//! StatusProvider trait and query context.

use super::error::StatusError;
use super::runner::CommandRunner;
use crate::theme::Palette;

/// What a provider needs to answer a query.
#[derive(Clone, Copy)]
pub struct QueryContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub palette: &'a Palette,
}

impl<'a> QueryContext<'a> {
    pub fn new(runner: &'a dyn CommandRunner, palette: &'a Palette) -> Self {
        Self { runner, palette }
    }
}

/// A source of one status line shown beside the image.
///
/// Each implementation wraps a specific query (kernel info, pending updates,
/// an arbitrary command) and knows how to turn its output into a message.
pub trait StatusProvider: Send + Sync {
    /// Short name for logs and error messages.
    fn name(&self) -> &str;

    /// Run the query and format the resulting line.
    fn query(&self, ctx: &QueryContext<'_>) -> Result<String, StatusError>;
}
