//! Built-in status providers.

mod command;
mod uname;
mod updates;

pub use command::CommandItem;
pub use uname::Uname;
pub use updates::Updates;

use super::provider::StatusProvider;
use crate::config::StatusItem;

/// Build providers for the configured status items, in order.
pub fn from_config(items: &[StatusItem]) -> Vec<Box<dyn StatusProvider>> {
    items
        .iter()
        .map(|item| -> Box<dyn StatusProvider> {
            match item {
                StatusItem::Uname { args } => Box::new(Uname::new(args.clone())),
                StatusItem::Updates { command, args } => {
                    Box::new(Updates::new(command.clone(), args.clone()))
                }
                StatusItem::Command {
                    command,
                    args,
                    format,
                } => Box::new(CommandItem::new(
                    command.clone(),
                    args.clone(),
                    format.clone(),
                )),
            }
        })
        .collect()
}
