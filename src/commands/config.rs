//! Config subcommands handler

use anyhow::Result;
use ratatui::style::Color;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use motd::cli::ConfigCommand;
use motd::config::migrate_config;
use motd::theme::color_enabled;
use motd::{Config, Palette};

/// Dispatch a `config` subcommand.
pub fn handle(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show => handle_show(config_path),
        ConfigCommand::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
        ConfigCommand::Edit => handle_edit(config_path),
        ConfigCommand::Init => handle_init(config_path),
        ConfigCommand::Migrate { yes } => handle_migrate(config_path, yes),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Write the default configuration unless a file already exists.
fn handle_init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!(
            "Config already exists at {} (use `motd config migrate` to add new fields)",
            config_path.display()
        );
        return Ok(());
    }

    Config::default().save_to(config_path)?;
    println!("Created {}", config_path.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
fn handle_edit(config_path: &Path) -> Result<()> {
    // Ensure config exists
    if !config_path.exists() {
        Config::default().save_to(config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        anyhow::bail!("Editor '{}' exited with {}", editor, status);
    }

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and prompts for confirmation unless `yes`.
fn handle_migrate(config_path: &Path, yes: bool) -> Result<()> {
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("Config is already up to date.");
        return Ok(());
    }

    let palette = Palette::new(None, color_enabled(false));

    if file_exists {
        if result.sections_added.is_empty() {
            println!("Found {} missing field(s):", result.added_fields.len());
        } else {
            println!(
                "Found {} missing field(s) in {} new section(s):",
                result.added_fields.len(),
                result.sections_added.len()
            );
        }
    } else {
        println!("Config file does not exist. Will create with default settings.");
    }
    println!();
    print_diff_preview(&result.content, &result.added_fields, !file_exists, &palette);
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&question)? {
        println!("No changes made.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(config_path, &result.content)?;
    println!("Config updated successfully.");

    Ok(())
}

/// Print a diff-style preview of the config changes.
///
/// Shows lines that contain added fields with a `+` prefix (green when
/// colored). For new files, shows all content as additions.
fn print_diff_preview(
    new_content: &str,
    added_fields: &[String],
    is_new_file: bool,
    palette: &Palette,
) {
    let mut current_section = String::new();
    let mut pending_section_header: Option<String> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed.trim_matches(&['[', ']'][..]).to_string();
            let is_added_section = added_fields
                .iter()
                .any(|f| f.starts_with(&format!("{}.", current_section)));
            pending_section_header = (is_new_file || is_added_section).then(|| line.to_string());
            continue;
        }

        let is_added = match trimmed.find('=') {
            Some(eq_pos) => {
                let key = trimmed[..eq_pos].trim();
                added_fields.contains(&format!("{}.{}", current_section, key))
            }
            None => false,
        };

        if (is_new_file && !trimmed.is_empty()) || is_added {
            if let Some(header) = pending_section_header.take() {
                println!("{}", palette.paint(Color::Green, &format!("+ {}", header)));
            }
            println!("{}", palette.paint(Color::Green, &format!("+ {}", line)));
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: use --yes to apply changes automatically");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
