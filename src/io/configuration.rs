//! Compositing constants and runtime configuration defaults

use image::imageops::FilterType;

// Output naming: <stem><OUTPUT_TAG><timestamp><.ext>
/// Tag inserted between the base file stem and the export timestamp
pub const OUTPUT_TAG: &str = "-PixStudio-";
/// Sortable `chrono` format for export timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
/// Folder under the home directory used when the platform has no downloads directory
pub const DOWNLOADS_DIR_NAME: &str = "Downloads";

/// Pattern file extensions picked up when scanning a directory
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Filter used to resize patterns and their masks
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Mask value marking a fully opaque pattern pixel
pub const OPAQUE: u8 = 255;

// Placeholder overlay appearance
/// Pen color for region outlines, diagonals and labels
pub const PLACEHOLDER_COLOR: [u8; 3] = [0, 0, 255];
/// Pen width in pixels
pub const PLACEHOLDER_STROKE: u32 = 2;
/// Gap between a region's top edge and the baseline of its label
pub const LABEL_OFFSET: u32 = 5;
/// Label text height in pixels
pub const LABEL_FONT_SIZE: f32 = 16.0;
/// System font families tried for labels before the generic sans-serif
pub const LABEL_FONT_FAMILIES: [&str; 3] = ["DejaVu Sans", "Liberation Sans", "Arial"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
