//! Interactive placeholder overlay
//!
//! This module contains:
//! - Clipped line and rectangle drawing
//! - Region labels drawn with a system font
//! - The renderer observing the region store

/// Font-rendered region labels
pub mod label;
/// Pen drawing primitives
pub mod raster;
/// Region overlay renderer
pub mod renderer;

pub use renderer::PreviewRenderer;
