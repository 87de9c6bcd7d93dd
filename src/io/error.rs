//! Error types for compositing, preview and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all studio operations
#[derive(Debug)]
pub enum StudioError {
    /// Failed to load a base or pattern image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the composite to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Compositing was requested with no pattern registered
    EmptyLibrary,

    /// Compositing was requested before a base image was opened
    NoBaseImage,

    /// Pattern pixel layout has a channel count the compositor cannot split
    UnsupportedPixelFormat {
        /// Pattern the pixels came from
        path: PathBuf,
        /// Channel count after normalization
        channels: usize,
    },

    /// Computed paste rectangle leaves the canvas
    ///
    /// The rectangle is never clamped; the whole operation fails instead.
    OutOfBoundsRegion {
        /// Id of the offending region
        region_id: usize,
        /// Paste rectangle as (x, y, width, height)
        paste: (i64, i64, u32, u32),
        /// Canvas dimensions as (width, height)
        canvas: (u32, u32),
    },

    /// Host supplied input failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Pixel buffer computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

/// Coarse failure classes a host translates into user-facing notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No patterns registered
    EmptyLibrary,
    /// Pattern channel layout not supported
    UnsupportedPixelFormat,
    /// Paste rectangle outside the canvas
    OutOfBoundsRegion,
    /// Decode, encode or filesystem failure
    Io,
    /// Missing or malformed input from the host
    InvalidInput,
    /// Internal inconsistency
    Internal,
}

impl StudioError {
    /// Failure class of this error
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::EmptyLibrary => FailureKind::EmptyLibrary,
            Self::UnsupportedPixelFormat { .. } => FailureKind::UnsupportedPixelFormat,
            Self::OutOfBoundsRegion { .. } => FailureKind::OutOfBoundsRegion,
            Self::ImageLoad { .. } | Self::ImageExport { .. } | Self::FileSystem { .. } => {
                FailureKind::Io
            }
            Self::NoBaseImage | Self::InvalidParameter { .. } => FailureKind::InvalidInput,
            Self::Computation { .. } => FailureKind::Internal,
        }
    }
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyLibrary => write!(f, "No pattern images available"),
            Self::NoBaseImage => write!(f, "No base image has been opened"),
            Self::UnsupportedPixelFormat { path, channels } => {
                write!(
                    f,
                    "Unsupported pixel format in '{}': {channels} channels",
                    path.display()
                )
            }
            Self::OutOfBoundsRegion {
                region_id,
                paste,
                canvas,
            } => {
                write!(
                    f,
                    "Region {} pastes at ({}, {}) size {}x{}, outside the {}x{} canvas",
                    region_id + 1,
                    paste.0,
                    paste.1,
                    paste.2,
                    paste.3,
                    canvas.0,
                    canvas.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for StudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for studio results
pub type Result<T> = std::result::Result<T, StudioError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StudioError {
    StudioError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> StudioError {
    StudioError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
