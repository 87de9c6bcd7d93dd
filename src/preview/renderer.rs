//! Placeholder overlay drawn over a clean copy of the base image

use crate::io::configuration::{LABEL_FONT_SIZE, LABEL_OFFSET, PLACEHOLDER_COLOR, PLACEHOLDER_STROKE};
use crate::preview::label::{draw_label, system_font};
use crate::preview::raster::{Pen, draw_line, draw_rect_outline};
use crate::regions::{Region, RegionChange, RegionObserver};
use ab_glyph::FontArc;
use image::RgbImage;
use std::sync::Arc;

/// Redraws every region as an annotated placeholder after each store change
///
/// The base pixels are shared read-only; each redraw starts from a fresh copy
/// so the original never carries overlay marks. Labels are skipped when no
/// font is available.
#[derive(Debug)]
pub struct PreviewRenderer {
    base: Option<Arc<RgbImage>>,
    frame: Option<RgbImage>,
    pen: Pen,
    font: Option<FontArc>,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer {
    /// Create a renderer with no base image and the default placeholder pen
    pub fn new() -> Self {
        Self::with_pen(Pen::new(PLACEHOLDER_COLOR, PLACEHOLDER_STROKE))
    }

    /// Create a renderer drawing with `pen` and labelling with the system font
    pub fn with_pen(pen: Pen) -> Self {
        Self {
            base: None,
            frame: None,
            pen,
            font: system_font(),
        }
    }

    /// Replace the label font; `None` draws placeholders without labels
    #[must_use]
    pub fn with_font(mut self, font: Option<FontArc>) -> Self {
        self.font = font;
        self
    }

    /// Whether region labels are drawn
    pub const fn draws_labels(&self) -> bool {
        self.font.is_some()
    }

    /// Replace the base image and redraw `regions` over it
    pub fn set_base(&mut self, base: Arc<RgbImage>, regions: &[Region]) {
        self.base = Some(base);
        self.redraw(regions);
    }

    /// Forget the base image and the current frame
    pub fn clear_base(&mut self) {
        self.base = None;
        self.frame = None;
    }

    /// Most recent annotated frame, if a base image is set
    pub const fn frame(&self) -> Option<&RgbImage> {
        self.frame.as_ref()
    }

    /// Draw `regions` on a fresh copy of the base without storing the result
    pub fn render(&self, regions: &[Region]) -> Option<RgbImage> {
        let mut frame = self.base.as_deref()?.clone();
        for region in regions {
            self.draw_placeholder(&mut frame, region);
        }
        Some(frame)
    }

    fn redraw(&mut self, regions: &[Region]) {
        self.frame = self.render(regions);
    }

    // Outline, both diagonals, and the 1-based label above the top-left corner
    fn draw_placeholder(&self, frame: &mut RgbImage, region: &Region) {
        let rect = region.rect();
        let left = i64::from(rect.x);
        let top = i64::from(rect.y);
        let right = left + i64::from(rect.width);
        let bottom = top + i64::from(rect.height);

        draw_rect_outline(frame, (left, top), (right, bottom), self.pen);
        draw_line(frame, (right, top), (left, bottom), self.pen);
        draw_line(frame, (left, top), (right, bottom), self.pen);

        if let Some(font) = &self.font {
            draw_label(
                frame,
                font,
                &region.label().to_string(),
                (left, top - i64::from(LABEL_OFFSET)),
                LABEL_FONT_SIZE,
                self.pen.color,
            );
        }
    }
}

impl RegionObserver for PreviewRenderer {
    fn regions_changed(&mut self, change: RegionChange, regions: &[Region]) {
        log::trace!("preview redraw after {change:?} ({} regions)", regions.len());
        self.redraw(regions);
    }
}
