//! Base image held read-only for previews and exports

use crate::io::error::Result;
use crate::io::image::load_rgb;
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Canonical base pixels plus the file they came from
///
/// The original is never written to; previews and exports each work on
/// their own copy. Cloning a canvas shares the pixels.
#[derive(Clone, Debug)]
pub struct Canvas {
    path: PathBuf,
    original: Arc<RgbImage>,
}

impl Canvas {
    /// Decode the base image at `path`, dropping any alpha channel
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let original = load_rgb(path)?;
        Ok(Self::from_image(path, original))
    }

    /// Wrap already decoded pixels; `path` is used for output naming
    pub fn from_image(path: impl Into<PathBuf>, original: RgbImage) -> Self {
        Self {
            path: path.into(),
            original: Arc::new(original),
        }
    }

    /// File the base image was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only original pixels
    pub fn original(&self) -> &RgbImage {
        &self.original
    }

    /// Shared handle to the original pixels
    pub fn shared(&self) -> Arc<RgbImage> {
        Arc::clone(&self.original)
    }

    /// Fresh mutable copy of the original
    pub fn working_copy(&self) -> RgbImage {
        self.original.as_ref().clone()
    }

    /// (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.original.dimensions()
    }
}
