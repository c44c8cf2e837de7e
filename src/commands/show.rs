//! Printing the message of the day

use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use motd::cli::ShowArgs;
use motd::status::{providers, OnError, Status};
use motd::theme::color_enabled;
use motd::{compose, image, Config, Fortune, Palette};

/// Gather everything, compose and print.
pub fn handle(config_path: &Path, args: &ShowArgs) -> Result<()> {
    let config = Config::load_from(config_path)?;

    let palette = Palette::resolve(
        args.color.as_deref(),
        &config.image.color,
        color_enabled(args.no_color),
    )?;

    let image_path = match &args.image {
        Some(path) => Some(path.as_path()),
        None if config.image.enabled && !args.no_image => Some(config.image.path.as_path()),
        None => None,
    };
    let image = image_path.map(image::load).transpose()?;

    let status = Status::new(providers::from_config(&config.status.items))
        .on_error(config.status.on_error)
        .parallel(config.status.parallel);

    let preamble = if config.fortune.enabled && !args.no_fortune {
        let fortune = Fortune::new(config.fortune.command.clone(), config.fortune.args.clone());
        match fortune.preamble(status.runner()) {
            Ok(text) => text,
            Err(e) if config.status.on_error == OnError::Skip => {
                warn!(error = %e, "skipping fortune");
                String::new()
            }
            Err(e) => return Err(e).context("Failed to get fortune"),
        }
    } else {
        String::new()
    };

    let messages = status.gather(&palette).context("Failed to gather status lines")?;
    info!(messages = messages.len(), "status gathered");

    let color_tag = palette.color_tag();
    let lines = compose(&preamble, image.as_deref(), &messages, color_tag.as_deref())
        .with_reset(palette.reset());
    if lines.dropped() > 0 {
        warn!(
            dropped = lines.dropped(),
            "more status lines than image rows; the first ones are not shown"
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
