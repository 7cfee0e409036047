//! Saving the finished annotation layer.

use crate::draw::{CommandLog, RasterSurface};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default output filename template (chrono format specifiers, no extension).
pub const DEFAULT_FILENAME_TEMPLATE: &str = "videoink_%Y-%m-%d_%H%M%S";

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<()> {
    if directory.as_os_str().is_empty() || directory.exists() {
        return Ok(());
    }
    log::info!("Creating output directory: {}", directory.display());
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create directory {}", directory.display()))
}

/// Writes the surface to `path` as a PNG with a transparent background.
///
/// Missing parent directories are created.
pub fn save_png(surface: &RasterSurface, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    surface
        .write_png(&mut writer)
        .with_context(|| format!("Failed to encode PNG to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);
    log::info!("Annotation layer saved: {}", path.display());

    Ok(path.to_path_buf())
}

/// Serializes the command log as pretty-printed JSON.
pub fn log_to_json(log: &CommandLog) -> Result<String> {
    serde_json::to_string_pretty(log).context("Failed to serialize command log")
}
