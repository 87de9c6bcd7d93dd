//! Region geometry and the ordered region store
//!
//! This module contains:
//! - Rectangle and per-field edit types
//! - The region store and its observer interface

/// Rectangle, region and field types
pub mod region;
/// Region store and change notification
pub mod store;

pub use region::{Rect, Region, RegionField};
pub use store::{RegionChange, RegionObserver, RegionStore};
