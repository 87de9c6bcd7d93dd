//! Input/output operations, configuration and error handling

/// Command-line host
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding, saving and output naming
pub mod image;
/// Progress display
pub mod progress;
