//! Aspect-preserving contain fit and centered paste placement

use crate::regions::Rect;

/// Scale `pattern` (width, height) to fit inside `region` (width, height)
///
/// Uses a single ratio `max(ph / rh, pw / rw)`, so the axis that decides the
/// ratio matches the region exactly and the other one is truncated. Returns
/// `None` when either box has zero area or the fitted size collapses to zero.
pub fn contain_fit(pattern: (u32, u32), region: (u32, u32)) -> Option<(u32, u32)> {
    let (pw, ph) = (u64::from(pattern.0), u64::from(pattern.1));
    let (rw, rh) = (u64::from(region.0), u64::from(region.1));
    if pw == 0 || ph == 0 || rw == 0 || rh == 0 {
        return None;
    }

    // ph / rh >= pw / rw, cross-multiplied to stay exact
    let (width, height) = if ph * rw >= pw * rh {
        (pw * rh / ph, rh)
    } else {
        (rw, ph * rw / pw)
    };

    if width == 0 || height == 0 {
        return None;
    }
    Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
}

/// Destination rectangle of a fitted pattern on the canvas
///
/// Coordinates are signed because a region edited past the canvas edge can
/// produce a negative origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasteRect {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl PasteRect {
    /// Center `size` on the center of `region`
    pub fn centered(region: &Rect, size: (u32, u32)) -> Self {
        let (cx, cy) = region.center();
        Self {
            x: cx - i64::from(size.0 / 2),
            y: cy - i64::from(size.1 / 2),
            width: size.0,
            height: size.1,
        }
    }

    /// Center point, rounded toward the top-left
    pub fn center(&self) -> (i64, i64) {
        (
            self.x + i64::from(self.width / 2),
            self.y + i64::from(self.height / 2),
        )
    }

    /// True when the whole rectangle lies on a canvas of `canvas` (width, height)
    pub fn fits_within(&self, canvas: (u32, u32)) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + i64::from(self.width) <= i64::from(canvas.0)
            && self.y + i64::from(self.height) <= i64::from(canvas.1)
    }

    /// Tuple form used in error reports
    pub const fn as_tuple(&self) -> (i64, i64, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}
