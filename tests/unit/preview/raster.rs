//! Tests for clipped pen drawing

#[cfg(test)]
mod tests {
    use crate::fixtures::solid_rgb;
    use image::{Rgb, RgbImage};
    use std::time::{Duration, Instant};
    use pixstudio::preview::raster::{
        Pen, blend_pixel_clipped, draw_line, draw_rect_outline, put_pixel_clipped,
    };

    const WHITE: [u8; 3] = [255, 255, 255];
    const INK: [u8; 3] = [0, 0, 255];

    fn inked(frame: &RgbImage) -> Vec<(u32, u32)> {
        frame
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == INK)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    // Tests pens are at least one pixel wide
    // Verified by allowing zero-width pens
    #[test]
    fn test_pen_minimum_width() {
        assert_eq!(Pen::new(INK, 0).width, 1);
        assert_eq!(Pen::new(INK, 3).width, 3);
        assert_eq!(Pen::new(INK, 3).color, Rgb(INK));
    }

    // Tests off-frame pixels are ignored
    // Verified by wrapping negative coordinates
    #[test]
    fn test_put_pixel_clipped() {
        let mut frame = solid_rgb(2, 2, WHITE);
        put_pixel_clipped(&mut frame, -1, 0, Rgb(INK));
        put_pixel_clipped(&mut frame, 2, 1, Rgb(INK));
        put_pixel_clipped(&mut frame, 1, 1, Rgb(INK));

        assert_eq!(inked(&frame), vec![(1, 1)]);
    }

    // Tests lines include both endpoints in either direction
    // Verified by stopping one step short of the end point
    #[test]
    fn test_draw_line_endpoints() {
        let pen = Pen::new(INK, 1);

        let mut forward = solid_rgb(6, 3, WHITE);
        draw_line(&mut forward, (1, 1), (4, 1), pen);
        assert_eq!(inked(&forward), vec![(1, 1), (2, 1), (3, 1), (4, 1)]);

        let mut backward = solid_rgb(6, 3, WHITE);
        draw_line(&mut backward, (4, 1), (1, 1), pen);
        assert_eq!(inked(&backward), inked(&forward));
    }

    // Tests a 45 degree line touches exactly the diagonal
    // Verified by stepping only along x
    #[test]
    fn test_draw_line_diagonal() {
        let mut frame = solid_rgb(4, 4, WHITE);
        draw_line(&mut frame, (0, 0), (3, 3), Pen::new(INK, 1));
        assert_eq!(inked(&frame), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    // Tests a wide pen stamps a square biased toward the top-left
    // Verified by centering even widths on the bottom-right
    #[test]
    fn test_wide_pen_footprint() {
        let mut frame = solid_rgb(4, 4, WHITE);
        draw_line(&mut frame, (2, 2), (2, 2), Pen::new(INK, 2));
        assert_eq!(inked(&frame), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    // Tests the outline covers the border and leaves the inside blank
    // Verified by filling the rectangle
    #[test]
    fn test_draw_rect_outline() {
        let mut frame = solid_rgb(6, 5, WHITE);
        draw_rect_outline(&mut frame, (1, 1), (4, 3), Pen::new(INK, 1));

        let inked_pixels = inked(&frame);
        assert_eq!(inked_pixels.len(), 10);
        assert!(inked_pixels.contains(&(1, 1)));
        assert!(inked_pixels.contains(&(4, 3)));
        assert!(!inked_pixels.contains(&(2, 2)));
        assert!(!inked_pixels.contains(&(5, 4)));
    }

    // Tests coverage blends between the frame and the pen color
    // Verified by writing the pen color at any nonzero coverage
    #[test]
    fn test_blend_pixel_clipped() {
        let mut frame = solid_rgb(3, 1, WHITE);
        blend_pixel_clipped(&mut frame, 0, 0, Rgb(INK), 1.0);
        blend_pixel_clipped(&mut frame, 1, 0, Rgb(INK), 0.5);
        blend_pixel_clipped(&mut frame, 2, 0, Rgb(INK), 0.0);
        blend_pixel_clipped(&mut frame, -1, 0, Rgb(INK), 1.0);
        blend_pixel_clipped(&mut frame, 0, 5, Rgb(INK), 1.0);

        assert_eq!(frame.get_pixel(0, 0).0, INK);
        assert_eq!(frame.get_pixel(1, 0).0, [128, 128, 255]);
        assert_eq!(frame.get_pixel(2, 0).0, WHITE);
    }

    // Tests a line with endpoints billions of pixels away only inks the visible span
    // Verified by walking the whole segment point by point
    #[test]
    fn test_draw_line_far_endpoints() {
        let mut frame = solid_rgb(5, 5, WHITE);
        let started = Instant::now();
        draw_line(&mut frame, (-4_000_000_000, 2), (4_000_000_000, 2), Pen::new(INK, 1));
        draw_line(&mut frame, (0, 0), (0, i64::from(u32::MAX)), Pen::new(INK, 1));
        assert!(started.elapsed() < Duration::from_secs(5));

        let inked_pixels = inked(&frame);
        assert_eq!(inked_pixels.len(), 9);
        assert!((0..5).all(|x| inked_pixels.contains(&(x, 2))));
        assert!((0..5).all(|y| inked_pixels.contains(&(0, y))));
    }

    // Tests clipping keeps the pixels a short line would draw near the frame edge
    // Verified by truncating clipped endpoints instead of rounding them
    #[test]
    fn test_clipped_line_matches_short_line() {
        let pen = Pen::new(INK, 2);

        let mut short = solid_rgb(8, 8, WHITE);
        draw_line(&mut short, (-3, 5), (12, 5), pen);

        let mut long = solid_rgb(8, 8, WHITE);
        draw_line(&mut long, (-3_000_000, 5), (12_000_000, 5), pen);

        assert_eq!(inked(&long), inked(&short));
        assert!(inked(&long).contains(&(0, 4)));
        assert!(inked(&long).contains(&(7, 5)));
    }

    // Tests segments entirely outside the frame draw nothing
    // Verified by stamping the clipped endpoints anyway
    #[test]
    fn test_line_outside_frame() {
        let mut frame = solid_rgb(4, 4, WHITE);
        draw_line(&mut frame, (10, -50), (60, 20), Pen::new(INK, 2));
        draw_line(&mut frame, (-9, -9), (-9, 9), Pen::new(INK, 2));

        assert!(inked(&frame).is_empty());
    }
}
