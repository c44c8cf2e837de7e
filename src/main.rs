//! motd binary entry point

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use motd::cli::{Cli, Commands, ShowArgs};
use motd::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => commands::show::handle(&config_path(cli.config)?, &cli.show),
        Some(Commands::Show(args)) => {
            commands::show::handle(&config_path(cli.config)?, &cli.show.merge(&args))
        }
        Some(Commands::Config(cmd)) => {
            reject_show_flags(&cli.show);
            commands::config::handle(cmd, &config_path(cli.config)?)
        }
        Some(Commands::Completions { shell }) => {
            reject_show_flags(&cli.show);
            commands::completions::handle(shell)
        }
    }
}

/// Exit with a usage error if display flags were given to another command.
fn reject_show_flags(args: &ShowArgs) {
    if args.is_set() {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--image, --no-image, --color, --no-color and --no-fortune only apply to `show`",
            )
            .exit();
    }
}

/// The `--config` path, or the default location.
fn config_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => Config::config_path(),
    }
}

/// Initialize logging on stderr so it never mixes with the motd itself.
///
/// `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("motd={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
