//! Tests for fitting, bounds checking and binary mask blending of one region

#[cfg(test)]
mod tests {
    use crate::fixtures::{region, solid_rgb};
    use image::{DynamicImage, GrayImage, Luma, RgbImage};
    use pixstudio::compose::AlphaCompositor;
    use pixstudio::compose::blend::apply_binary_mask;
    use pixstudio::patterns::PatternAsset;
    use pixstudio::regions::Rect;
    use pixstudio::{FailureKind, StudioError};

    fn rgba_pattern(width: u32, height: u32, color: [u8; 3], alpha: &[u8]) -> PatternAsset {
        let data = alpha
            .iter()
            .flat_map(|&a| [color[0], color[1], color[2], a])
            .collect();
        PatternAsset::from_raw("pattern.png", width, height, 4, data).unwrap()
    }

    // Tests zero alpha keeps the base while any nonzero alpha shows the pattern
    // Verified by scaling the pattern pixel by alpha / 255
    #[test]
    fn test_binary_alpha_blend() {
        let base = solid_rgb(3, 1, [200, 200, 200]);
        let asset = rgba_pattern(3, 1, [10, 20, 30], &[0, 10, 255]);

        let patch = AlphaCompositor::new()
            .blend(&base, &region(Rect::new(0, 0, 3, 1)), &asset)
            .unwrap()
            .unwrap();

        assert_eq!(patch.origin, (0, 0));
        assert_eq!(
            patch.pixels.as_raw(),
            &vec![200, 200, 200, 10, 20, 30, 10, 20, 30]
        );
    }

    // Tests the paste lands centered with the fitted size
    // Verified by pasting at the region's top-left corner
    #[test]
    fn test_wide_pattern_centered_in_square_region() {
        let base = solid_rgb(200, 200, [255, 255, 255]);
        let asset = PatternAsset::from_dynamic(
            "wide.png",
            DynamicImage::ImageRgb8(solid_rgb(200, 100, [255, 0, 0])),
        )
        .unwrap();

        let patch = AlphaCompositor::new()
            .blend(&base, &region(Rect::new(100, 100, 50, 50)), &asset)
            .unwrap()
            .unwrap();

        assert_eq!(patch.origin, (100, 113));
        assert_eq!(patch.pixels.dimensions(), (50, 25));
        assert!(patch.pixels.pixels().all(|p| p.0 == [255, 0, 0]));
    }

    // Tests a grayscale pattern is pasted fully opaque
    // Verified by building the gray mask transposed and failing the size check
    #[test]
    fn test_grayscale_pattern_is_opaque() {
        let base = solid_rgb(64, 32, [0, 0, 0]);
        let gray = GrayImage::from_fn(64, 32, |x, _| Luma([x as u8 + 100]));
        let asset = PatternAsset::from_dynamic("gray.png", DynamicImage::ImageLuma8(gray)).unwrap();

        let patch = AlphaCompositor::new()
            .blend(&base, &region(Rect::new(0, 0, 64, 32)), &asset)
            .unwrap()
            .unwrap();

        assert_eq!(patch.origin, (0, 0));
        assert_eq!(patch.pixels.get_pixel(0, 0).0, [100, 100, 100]);
        assert_eq!(patch.pixels.get_pixel(63, 31).0, [163, 163, 163]);
    }

    // Tests a paste leaving the canvas fails instead of clamping
    // Verified by clamping the origin into the canvas
    #[test]
    fn test_out_of_bounds_region() {
        let base = solid_rgb(10, 10, [0, 0, 0]);
        let asset = rgba_pattern(6, 6, [1, 1, 1], &[255; 36]);

        let err = AlphaCompositor::new()
            .blend(&base, &region(Rect::new(8, 8, 6, 6)), &asset)
            .unwrap_err();

        assert!(matches!(
            err,
            StudioError::OutOfBoundsRegion {
                region_id: 0,
                paste: (8, 8, 6, 6),
                canvas: (10, 10),
            }
        ));
        assert_eq!(err.kind(), FailureKind::OutOfBoundsRegion);
        assert_eq!(
            err.to_string(),
            "Region 1 pastes at (8, 8) size 6x6, outside the 10x10 canvas"
        );
    }

    // Tests zero-area regions produce no patch
    // Verified by dividing by the zero region height
    #[test]
    fn test_zero_area_region_is_skipped() {
        let base = solid_rgb(10, 10, [0, 0, 0]);
        let asset = rgba_pattern(2, 2, [1, 1, 1], &[255; 4]);

        let blended = AlphaCompositor::new()
            .blend(&base, &region(Rect::new(1, 1, 5, 0)), &asset)
            .unwrap();
        assert!(blended.is_none());
    }

    // Tests only masked pixels change and the patch stays inside the region
    // Verified by copying the full pattern regardless of mask
    #[test]
    fn test_transparent_border_keeps_base() {
        let base = solid_rgb(4, 4, [9, 9, 9]);
        let alpha: Vec<u8> = (0..16)
            .map(|i| if i == 5 || i == 10 { 255 } else { 0 })
            .collect();
        let asset = rgba_pattern(4, 4, [50, 60, 70], &alpha);

        let patch = AlphaCompositor::new()
            .blend(&base, &region(Rect::new(0, 0, 4, 4)), &asset)
            .unwrap()
            .unwrap();

        for (x, y, pixel) in patch.pixels.enumerate_pixels() {
            let expected = if (x, y) == (1, 1) || (x, y) == (2, 2) {
                [50, 60, 70]
            } else {
                [9, 9, 9]
            };
            assert_eq!(pixel.0, expected, "pixel ({x}, {y})");
        }
    }

    // Tests the mask helper refuses buffers of different sizes
    // Verified by indexing the smaller buffer out of range
    #[test]
    fn test_apply_binary_mask_dimension_mismatch() {
        let mut target = solid_rgb(2, 2, [0, 0, 0]);
        let pattern = RgbImage::new(2, 2);
        let mask = GrayImage::new(3, 2);

        let err = apply_binary_mask(&mut target, &pattern, &mask).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Internal);
        assert!(target.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
