//! Color handling for motd output
//!
//! Resolves the configured image color into the escape sequences the
//! composer splices into its output, and decides whether color is wanted at
//! all. Color names are parsed with ratatui's `Color` parser, so anything it
//! accepts works: `blue`, `light-blue`, `dark gray`, `#ff8700`, `208`.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use ratatui::style::Color;

use crate::compose::RESET;

/// ANSI bold sequence
const ANSI_BOLD: &str = "\x1b[1m";

/// Parse a color name.
///
/// Returns `None` for an empty string or `none`, which disables the image
/// color while keeping other styling.
pub fn parse_color(name: &str) -> Result<Option<Color>> {
    let name = name.trim();
    if name.is_empty() || name.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Color::from_str(name)
        .map(Some)
        .map_err(|_| anyhow!("Unknown color '{}'", name))
}

/// Convert a ratatui Color to an ANSI foreground escape code.
pub fn color_to_ansi(color: Color) -> String {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => RESET,
        Color::Indexed(n) => return format!("\x1b[38;5;{}m", n),
        Color::Rgb(r, g, b) => return format!("\x1b[38;2;{};{};{}m", r, g, b),
    };
    code.to_string()
}

/// Whether colored output should be produced.
///
/// Disabled by the `--no-color` flag, a non-empty `NO_COLOR` environment
/// variable, or stdout not being a terminal.
pub fn color_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Styling applied to one motd run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color the image is drawn in
    pub color: Option<Color>,
    /// When false, no escape sequences are produced at all
    pub enabled: bool,
}

impl Palette {
    pub fn new(color: Option<Color>, enabled: bool) -> Self {
        Self { color, enabled }
    }

    /// Palette that never emits escape sequences.
    pub fn plain() -> Self {
        Self {
            color: None,
            enabled: false,
        }
    }

    /// Build from an optional `--color` flag, the configured color name and
    /// whether color output is enabled. The flag wins over the config.
    pub fn resolve(flag_color: Option<&str>, config_color: &str, enabled: bool) -> Result<Self> {
        let name = flag_color.unwrap_or(config_color);
        Ok(Self::new(parse_color(name)?, enabled))
    }

    /// The color tag handed to the composer.
    pub fn color_tag(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.color.map(color_to_ansi)
    }

    /// The reset marker handed to the composer.
    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    /// Format text in `color` (followed by a full reset).
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color_to_ansi(color), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text in bold (followed by a full reset).
    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", ANSI_BOLD, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Some(Color::Blue), true)
    }
}
