//! Tests for font-rendered region labels

#[cfg(test)]
mod tests {
    use crate::fixtures::solid_rgb;
    use image::{Rgb, RgbImage};
    use pixstudio::io::configuration::LABEL_FONT_SIZE;
    use pixstudio::preview::label::{draw_label, load_system_font, system_font, text_width};

    const WHITE: [u8; 3] = [255, 255, 255];
    const INK: Rgb<u8> = Rgb([0, 0, 255]);

    fn ink_rows(frame: &RgbImage) -> Vec<u32> {
        let mut rows: Vec<u32> = frame
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 != WHITE)
            .map(|(_, y, _)| y)
            .collect();
        rows.dedup();
        rows
    }

    // Tests the shared font is loaded once and agrees with a direct lookup
    // Verified by loading a different face on every call
    #[test]
    fn test_system_font_is_stable() {
        let first = system_font();
        let second = system_font();
        assert_eq!(first.is_some(), second.is_some());
        assert_eq!(first.is_some(), load_system_font(&[]).is_some());
    }

    // Tests labels sit above their baseline and start near the caret
    // Verified by treating the baseline as the top edge
    #[test]
    fn test_label_above_baseline() {
        let Some(font) = system_font() else {
            return;
        };
        let mut frame = solid_rgb(60, 40, WHITE);
        draw_label(&mut frame, &font, "12", (10, 30), LABEL_FONT_SIZE, INK);

        let rows = ink_rows(&frame);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|&y| y <= 31), "{rows:?}");
        assert!(rows.iter().any(|&y| y < 25), "{rows:?}");
        // Nothing left of the caret beyond the glyph's side bearing
        assert!((0..40).all(|y| frame.get_pixel(5, y).0 == WHITE));
        // Coverage blends toward the pen color, never past it
        assert!(frame.pixels().any(|p| p.0[0] < 128 && p.0[2] == 255));
        assert!(frame.pixels().all(|p| p.0[0] == p.0[1] && p.0[2] == 255));
    }

    // Tests longer labels advance further than shorter ones
    // Verified by ignoring the advance between glyphs
    #[test]
    fn test_text_width_grows() {
        let Some(font) = system_font() else {
            return;
        };
        let one = text_width(&font, "1", LABEL_FONT_SIZE);
        let many = text_width(&font, "111", LABEL_FONT_SIZE);

        assert!(one > 0.0);
        assert!(many > 2.0 * one);
        assert!(text_width(&font, "", LABEL_FONT_SIZE).abs() < f32::EPSILON);
    }

    // Tests labels hanging off any frame edge are clipped
    // Verified by panicking on negative coordinates
    #[test]
    fn test_label_clipped() {
        let Some(font) = system_font() else {
            return;
        };
        let mut frame = solid_rgb(6, 6, WHITE);
        draw_label(&mut frame, &font, "88", (-4, 3), LABEL_FONT_SIZE, INK);
        draw_label(&mut frame, &font, "9", (1_000_000, -1_000_000), LABEL_FONT_SIZE, INK);

        assert_eq!(frame.dimensions(), (6, 6));
        assert!(!ink_rows(&frame).is_empty());
    }
}
