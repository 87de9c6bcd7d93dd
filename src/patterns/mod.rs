//! Pattern tiles: decoding and the candidate library

/// Pattern decoding into color and mask
pub mod asset;
/// Pattern file registry and random selection
pub mod library;

pub use asset::PatternAsset;
pub use library::PatternLibrary;
