//! Base image decoding, composite persistence and output naming

use crate::io::configuration::{DOWNLOADS_DIR_NAME, OUTPUT_TAG, TIMESTAMP_FORMAT};
use crate::io::error::{Result, StudioError};
use chrono::{DateTime, Local};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Decode an image file into three 8-bit color channels
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| StudioError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save `img` to `output_path`, creating the parent directory first
///
/// The encoder is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension has no encoder or the image cannot be written
pub fn save_rgb(img: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StudioError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| StudioError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Sortable export timestamp, `YYYYMMDDHHMMSS`
pub fn timestamp(now: &DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// File name for an export of `base_path` taken at `now`
///
/// `<stem>-PixStudio-<timestamp><.ext>`; the extension is omitted when the base
/// file has none.
pub fn output_file_name(base_path: &Path, now: &DateTime<Local>) -> String {
    let stem = base_path.file_stem().unwrap_or_default();
    let extension = base_path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    format!(
        "{}{OUTPUT_TAG}{}{extension}",
        stem.to_string_lossy(),
        timestamp(now)
    )
}

/// Platform downloads directory
///
/// Falls back to `~/Downloads`, then to the current directory.
pub fn default_output_dir() -> PathBuf {
    dirs_next::download_dir()
        .or_else(|| dirs_next::home_dir().map(|home| home.join(DOWNLOADS_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from("."))
}
