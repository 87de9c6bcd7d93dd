//! Mask-based pattern blending for a single region

use crate::compose::fit::{PasteRect, contain_fit};
use crate::io::configuration::RESIZE_FILTER;
use crate::io::error::{Result, StudioError, computation_error};
use crate::patterns::PatternAsset;
use crate::regions::Region;
use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};
use ndarray::{ArrayView2, ArrayView3, ArrayViewMut3, Axis, Zip};

/// Blended sub-image ready to be written back at `origin`
#[derive(Clone, Debug)]
pub struct BlendedPatch {
    /// Top-left canvas position of the patch
    pub origin: (u32, u32),
    /// Blended pixels
    pub pixels: RgbImage,
}

/// Fits a pattern into a region and blends it over the base pixels
///
/// The mask is binary: any nonzero mask sample shows the pattern pixel
/// unchanged, zero keeps the base pixel. There is no partial translucency.
#[derive(Clone, Copy, Debug)]
pub struct AlphaCompositor {
    filter: FilterType,
}

impl Default for AlphaCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaCompositor {
    /// Create a compositor using the default resize filter
    pub const fn new() -> Self {
        Self::with_filter(RESIZE_FILTER)
    }

    /// Create a compositor resizing patterns with `filter`
    pub const fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Blend `asset` into `region` of `base` without modifying `base`
    ///
    /// Returns `Ok(None)` when the region or the fitted pattern has zero area.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The centered paste rectangle leaves the canvas
    /// - The resized buffers disagree on their dimensions
    pub fn blend(
        &self,
        base: &RgbImage,
        region: &Region,
        asset: &PatternAsset,
    ) -> Result<Option<BlendedPatch>> {
        let rect = region.rect();
        let Some(size) = contain_fit(asset.dimensions(), (rect.width, rect.height)) else {
            return Ok(None);
        };

        let paste = PasteRect::centered(&rect, size);
        if !paste.fits_within(base.dimensions()) {
            return Err(StudioError::OutOfBoundsRegion {
                region_id: region.id(),
                paste: paste.as_tuple(),
                canvas: base.dimensions(),
            });
        }
        let (x, y) = (paste.x as u32, paste.y as u32);

        let color = self.resize_color(asset.color(), size);
        let mask = self.resize_mask(asset.mask(), size);
        let mut pixels = imageops::crop_imm(base, x, y, size.0, size.1).to_image();

        apply_binary_mask(&mut pixels, &color, &mask)?;

        Ok(Some(BlendedPatch {
            origin: (x, y),
            pixels,
        }))
    }

    fn resize_color(&self, color: &RgbImage, size: (u32, u32)) -> RgbImage {
        if color.dimensions() == size {
            color.clone()
        } else {
            imageops::resize(color, size.0, size.1, self.filter)
        }
    }

    fn resize_mask(&self, mask: &GrayImage, size: (u32, u32)) -> GrayImage {
        if mask.dimensions() == size {
            mask.clone()
        } else {
            imageops::resize(mask, size.0, size.1, self.filter)
        }
    }
}

/// Overwrite `target` with `pattern` wherever `mask` is nonzero
///
/// # Errors
///
/// Returns an error if the three buffers do not share the same dimensions
pub fn apply_binary_mask(target: &mut RgbImage, pattern: &RgbImage, mask: &GrayImage) -> Result<()> {
    if target.dimensions() != pattern.dimensions() || target.dimensions() != mask.dimensions() {
        return Err(computation_error(
            "blend",
            &format!(
                "target {:?}, pattern {:?}, mask {:?}",
                target.dimensions(),
                pattern.dimensions(),
                mask.dimensions()
            ),
        ));
    }

    let (width, height) = target.dimensions();
    let shape = (height as usize, width as usize);
    let shape_error = |e| computation_error("blend", &e);

    let mut target = ArrayViewMut3::from_shape((shape.0, shape.1, 3), &mut **target)
        .map_err(shape_error)?;
    let pattern = ArrayView3::from_shape((shape.0, shape.1, 3), pattern.as_raw().as_slice())
        .map_err(shape_error)?;
    let mask = ArrayView2::from_shape(shape, mask.as_raw().as_slice()).map_err(shape_error)?;

    Zip::from(target.lanes_mut(Axis(2)))
        .and(pattern.lanes(Axis(2)))
        .and(&mask)
        .for_each(|mut dst, src, &opacity| {
            if opacity != 0 {
                dst.assign(&src);
            }
        });

    Ok(())
}
