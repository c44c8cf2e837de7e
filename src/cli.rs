//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string including the git SHA for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("MOTD_BUILD_DATE"),
    ")"
);

/// Version string for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("MOTD_BUILD_DATE"),
    ")"
);

/// Print a message of the day: a fortune, an ASCII image and status lines.
#[derive(Parser, Debug)]
#[command(name = "motd", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, env = "MOTD_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub show: ShowArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for the configured output.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowArgs {
    /// ASCII image file to draw
    #[arg(short, long, value_name = "PATH", conflicts_with = "no_image")]
    pub image: Option<PathBuf>,

    /// Print messages without an image
    #[arg(long)]
    pub no_image: bool,

    /// Image color: a name, #rrggbb, a 0-255 index, or none
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Skip the fortune above the image
    #[arg(long)]
    pub no_fortune: bool,
}

impl ShowArgs {
    /// Combine top-level flags with those given after `show`.
    ///
    /// Values given after `show` win; switches are on if set in either place.
    pub fn merge(&self, other: &ShowArgs) -> ShowArgs {
        ShowArgs {
            image: other.image.clone().or_else(|| self.image.clone()),
            no_image: self.no_image || other.no_image,
            color: other.color.clone().or_else(|| self.color.clone()),
            no_color: self.no_color || other.no_color,
            no_fortune: self.no_fortune || other.no_fortune,
        }
    }

    /// Whether any flag was given.
    pub fn is_set(&self) -> bool {
        *self != ShowArgs::default()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the message of the day (default)
    Show(ShowArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Write the default configuration if none exists
    Init,
    /// Add missing fields to an existing configuration file
    Migrate {
        /// Apply changes without asking
        #[arg(short, long)]
        yes: bool,
    },
}
