//! Pattern decoding into color pixels and an opacity mask

use crate::io::configuration::OPAQUE;
use crate::io::error::{Result, StudioError, computation_error};
use image::{DynamicImage, GrayImage, Luma, RgbImage};
use ndarray::{Array3, ArrayView2, ArrayView3, Axis, Slice};
use std::path::{Path, PathBuf};

/// Decoded pattern tile: three-channel color plus a same-sized mask
///
/// Assets are not cached; every compositing pass decodes them again.
#[derive(Clone, Debug)]
pub struct PatternAsset {
    path: PathBuf,
    color: RgbImage,
    mask: GrayImage,
}

impl PatternAsset {
    /// Decode the pattern stored at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or decoded
    /// - The decoded layout cannot be split into color and mask
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| StudioError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_dynamic(path, img)
    }

    /// Build an asset from an already decoded image
    ///
    /// Gray+alpha images are widened to four channels first, so their alpha
    /// becomes the mask. Deeper samples are reduced to 8 bits.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel buffer does not match its dimensions
    pub fn from_dynamic(path: impl Into<PathBuf>, img: DynamicImage) -> Result<Self> {
        let (width, height) = (img.width(), img.height());
        let (channels, data) = match img {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            other @ DynamicImage::ImageLuma16(_) => (1, other.to_luma8().into_raw()),
            other @ (DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLumaA16(_)) => {
                (4, other.to_rgba8().into_raw())
            }
            other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
            other => (3, other.to_rgb8().into_raw()),
        };
        Self::from_raw(path, width, height, channels, data)
    }

    /// Build an asset from interleaved 8-bit samples
    ///
    /// One channel is replicated into gray color with an opaque mask, three
    /// channels get an opaque mask, four channels are split into color and a
    /// mask taken from the last channel.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `channels` is not 1, 3 or 4
    /// - `data` does not hold `width * height * channels` samples
    pub fn from_raw(
        path: impl Into<PathBuf>,
        width: u32,
        height: u32,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        let path = path.into();
        if !matches!(channels, 1 | 3 | 4) {
            return Err(StudioError::UnsupportedPixelFormat { path, channels });
        }

        let pixels = Array3::from_shape_vec((height as usize, width as usize, channels), data)
            .map_err(|e| computation_error("pattern decode", &e))?;

        let (color, mask) = match channels {
            1 => {
                let gray = pixels.index_axis(Axis(2), 0);
                let rgb = gray
                    .insert_axis(Axis(2))
                    .broadcast((height as usize, width as usize, 3))
                    .ok_or_else(|| computation_error("pattern decode", &"gray broadcast failed"))?
                    .to_owned();
                (rgb_from_view(rgb.view())?, opaque_mask(width, height))
            }
            3 => (rgb_from_view(pixels.view())?, opaque_mask(width, height)),
            _ => (
                rgb_from_view(pixels.slice_axis(Axis(2), Slice::from(..3)))?,
                gray_from_view(pixels.index_axis(Axis(2), 3))?,
            ),
        };

        Ok(Self { path, color, mask })
    }

    /// File the asset was decoded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Native (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.color.dimensions()
    }

    /// Color pixels
    pub const fn color(&self) -> &RgbImage {
        &self.color
    }

    /// Opacity mask, same dimensions as the color pixels
    pub const fn mask(&self) -> &GrayImage {
        &self.mask
    }
}

// Built over the pattern's own (width, height), never transposed
fn opaque_mask(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([OPAQUE]))
}

fn rgb_from_view(view: ArrayView3<'_, u8>) -> Result<RgbImage> {
    let (height, width, _) = view.dim();
    RgbImage::from_raw(width as u32, height as u32, view.iter().copied().collect())
        .ok_or_else(|| computation_error("pattern decode", &"color buffer size mismatch"))
}

fn gray_from_view(view: ArrayView2<'_, u8>) -> Result<GrayImage> {
    let (height, width) = view.dim();
    GrayImage::from_raw(width as u32, height as u32, view.iter().copied().collect())
        .ok_or_else(|| computation_error("pattern decode", &"mask buffer size mismatch"))
}
