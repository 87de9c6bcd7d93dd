//! Pattern compositing engine: fill marked regions of a base image with randomly
//! chosen pattern tiles
//!
//! Regions are kept in an ordered store whose changes redraw an annotated
//! preview. Exporting fits a random pattern into every region with an
//! aspect-preserving contain fit, blends it through a binary opacity mask, and
//! saves the composite next to the user's downloads.

#![forbid(unsafe_code)]

/// Base image held read-only
pub mod canvas;
/// Contain fit, blending and export
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Pattern decoding and the pattern library
pub mod patterns;
/// Placeholder overlay rendering
pub mod preview;
/// Region geometry and storage
pub mod regions;
/// Editing session facade
pub mod studio;

pub use io::error::{FailureKind, Result, StudioError};
pub use studio::Studio;
