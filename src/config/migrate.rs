//! Adding missing fields to an existing config file.
//!
//! Uses `toml_edit` so comments, ordering and formatting of the user's file
//! survive. Array-of-tables entries such as `[[status.items]]` belong to the
//! user and are never merged key by key.

use anyhow::{Context, Result};
use toml_edit::DocumentMut;

use super::Config;

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// The migrated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that were missing entirely
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty() || !self.sections_added.is_empty()
    }
}

/// Add every field of the default config that `content` lacks.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content
        .parse()
        .context("Failed to parse existing config as TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Failed to parse default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, default_item.clone());
            sections_added.push(section.to_string());
            added_fields.extend(
                default_table
                    .iter()
                    .filter(|(_, value)| value.is_value())
                    .map(|(key, _)| format!("{}.{}", section, key)),
            );
            continue;
        }

        // A section of the wrong type is left for serde to complain about
        let Some(table) = doc
            .get_mut(section)
            .and_then(|item| item.as_table_like_mut())
        else {
            continue;
        };

        for (key, value) in default_table.iter() {
            if !value.is_value() || table.contains_key(key) {
                continue;
            }
            table.insert(key, value.clone());
            added_fields.push(format!("{}.{}", section, key));
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
