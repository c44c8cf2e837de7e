//! ASCII image loading.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Split image text into rows, right-trimming each one.
pub fn parse(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim_end().to_string()).collect()
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~` (and `~user` forms) are returned unchanged,
/// as is everything when no home directory can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Load an image file as right-trimmed rows.
pub fn load(path: &Path) -> Result<Vec<String>, ImageError> {
    let path = expand_home(path);
    debug!(path = %path.display(), "loading image");

    let text = std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ImageError::NotFound { path: path.clone() }
        } else {
            ImageError::Read {
                path: path.clone(),
                source,
            }
        }
    })?;

    let rows = parse(&text);
    debug!(rows = rows.len(), "image loaded");
    Ok(rows)
}
