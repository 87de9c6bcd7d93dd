//! Pattern compositing: contain fit, binary-mask blending and export

/// Single-region blending
pub mod blend;
/// Whole-canvas compositing and persistence
pub mod export;
/// Contain-fit sizing and paste placement
pub mod fit;

pub use blend::{AlphaCompositor, BlendedPatch};
pub use export::{CompositeResult, ExportPipeline, Placement};
pub use fit::{PasteRect, contain_fit};
