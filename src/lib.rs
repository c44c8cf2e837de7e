//! motd - message of the day generator
//!
//! Prints a fortune, an ASCII image and a few status lines (kernel, pending
//! updates, any command you like) as one colorized block.

pub mod cli;
pub mod compose;
pub mod config;
pub mod image;
pub mod status;
pub mod theme;

pub use compose::{compose, Lines};
pub use config::Config;
pub use status::{Fortune, Status};
pub use theme::Palette;
