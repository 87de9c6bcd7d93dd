//! Ordered region collection with change notification

use crate::regions::region::{Rect, Region, RegionField};

/// Mutation applied to a [`RegionStore`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionChange {
    /// A region was appended with the given id
    Added(usize),
    /// One field of an existing region was replaced
    Updated {
        /// Region that changed
        id: usize,
        /// Field that was replaced
        field: RegionField,
    },
    /// Every region was dropped
    Cleared,
}

/// Receives every successful store mutation together with the full region list
pub trait RegionObserver {
    /// Called after the store has applied `change`
    fn regions_changed(&mut self, change: RegionChange, regions: &[Region]);
}

impl RegionObserver for () {
    fn regions_changed(&mut self, _change: RegionChange, _regions: &[Region]) {}
}

/// Regions in creation order; ids equal positions and are never reused
#[derive(Debug, Default)]
pub struct RegionStore<O = ()> {
    regions: Vec<Region>,
    observer: O,
}

impl RegionStore {
    /// Create an empty store without an observer
    pub const fn new() -> Self {
        Self {
            regions: Vec::new(),
            observer: (),
        }
    }
}

impl<O: RegionObserver> RegionStore<O> {
    /// Create an empty store notifying `observer` on every change
    pub const fn with_observer(observer: O) -> Self {
        Self {
            regions: Vec::new(),
            observer,
        }
    }

    /// Append a region, returning its id
    ///
    /// Zero-area rectangles are rejected with `None` and leave the store untouched.
    pub fn add_region(&mut self, rect: Rect) -> Option<usize> {
        if rect.is_empty() {
            return None;
        }

        let id = self.regions.len();
        self.regions.push(Region::new(id, rect));
        self.observer
            .regions_changed(RegionChange::Added(id), &self.regions);
        Some(id)
    }

    /// Replace one field of region `id`
    ///
    /// Unknown ids are ignored and `false` is returned. Any value is accepted,
    /// including zero sizes.
    pub fn update_field(&mut self, id: usize, field: RegionField, value: u32) -> bool {
        let Some(region) = self.regions.get_mut(id) else {
            return false;
        };

        region.set_field(field, value);
        self.observer
            .regions_changed(RegionChange::Updated { id, field }, &self.regions);
        true
    }

    /// Snapshot in creation order
    pub fn list(&self) -> &[Region] {
        &self.regions
    }

    /// Region with the given id
    pub fn get(&self, id: usize) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Number of regions created since the last clear
    pub const fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when no region exists
    pub const fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Drop every region
    pub fn clear(&mut self) {
        self.regions.clear();
        self.observer
            .regions_changed(RegionChange::Cleared, &self.regions);
    }

    /// Observer receiving change notifications
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer
    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
