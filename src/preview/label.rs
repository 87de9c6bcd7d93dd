//! Region labels rasterized from a system font

use crate::io::configuration::LABEL_FONT_FAMILIES;
use crate::preview::raster::blend_pixel_clipped;
use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use image::{Rgb, RgbImage};
use std::sync::LazyLock;

static SYSTEM_FONT: LazyLock<Option<FontArc>> = LazyLock::new(|| {
    let font = load_system_font(&LABEL_FONT_FAMILIES);
    if font.is_none() {
        log::warn!("no system font found, region labels will not be drawn");
    }
    font
});

/// Font used for labels by default, loaded once per process
pub fn system_font() -> Option<FontArc> {
    SYSTEM_FONT.clone()
}

/// Load the best match for `families`, falling back to any sans-serif face
pub fn load_system_font(families: &[&str]) -> Option<FontArc> {
    let mut names: Vec<FamilyName> = families
        .iter()
        .map(|family| FamilyName::Title((*family).to_string()))
        .collect();
    names.push(FamilyName::SansSerif);

    let handle = SystemSource::new()
        .select_best_match(&names, &Properties::new())
        .ok()?;
    let font_data = handle.load().ok()?;
    log::debug!("label font: {}", font_data.full_name());
    let bytes = font_data.copy_font_data()?;
    FontArc::try_from_vec((*bytes).clone()).ok()
}

/// Horizontal advance of `text` at `size` pixels, kerning included
pub fn text_width(font: &FontArc, text: &str, size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0;
    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        previous = Some(id);
    }
    width
}

/// Draw `text` with its baseline starting at `baseline`
///
/// Glyph coverage is blended over the frame; anything outside it is clipped.
pub fn draw_label(
    frame: &mut RgbImage,
    font: &FontArc,
    text: &str,
    baseline: (i64, i64),
    size: f32,
    color: Rgb<u8>,
) {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut caret = point(baseline.0 as f32, baseline.1 as f32);
    let mut previous: Option<GlyphId> = None;

    for c in text.chars() {
        let mut glyph = scaled.scaled_glyph(c);
        if let Some(prev) = previous {
            caret.x += scaled.kern(prev, glyph.id);
        }
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        previous = Some(glyph.id);

        let Some(outlined) = scaled.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);
        outlined.draw(|x, y, coverage| {
            blend_pixel_clipped(
                frame,
                left + i64::from(x),
                top + i64::from(y),
                color,
                coverage,
            );
        });
    }
}
