//! Tests for opening the base image and handing out copies of it

#[cfg(test)]
mod tests {
    use crate::fixtures::{solid_rgb, write_rgba};
    use image::{Rgba, RgbaImage};
    use pixstudio::FailureKind;
    use pixstudio::canvas::Canvas;
    use std::sync::Arc;

    // Tests opening drops the alpha channel and remembers the path
    // Verified by keeping the decoded RGBA buffer
    #[test]
    fn test_open_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_rgba(
            dir.path(),
            "base.png",
            &RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 0])),
        );

        let canvas = Canvas::open(&path).unwrap();
        assert_eq!(canvas.path(), path.as_path());
        assert_eq!(canvas.dimensions(), (3, 2));
        assert_eq!(canvas.original().get_pixel(2, 1).0, [10, 20, 30]);
    }

    // Tests a missing base image is reported as an I/O failure
    // Verified by substituting a blank canvas
    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Canvas::open(dir.path().join("absent.png")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Io);
    }

    // Tests working copies are detached from the original
    // Verified by handing out the shared buffer mutably
    #[test]
    fn test_working_copy_is_independent() {
        let canvas = Canvas::from_image("base.png", solid_rgb(2, 2, [1, 1, 1]));

        let mut copy = canvas.working_copy();
        copy.put_pixel(0, 0, image::Rgb([9, 9, 9]));

        assert_eq!(canvas.original().get_pixel(0, 0).0, [1, 1, 1]);
    }

    // Tests clones and shared handles point at the same pixels
    // Verified by deep-copying the original on clone
    #[test]
    fn test_shared_pixels() {
        let canvas = Canvas::from_image("base.png", solid_rgb(2, 2, [1, 1, 1]));
        let clone = canvas.clone();

        assert!(Arc::ptr_eq(&canvas.shared(), &clone.shared()));
    }
}
