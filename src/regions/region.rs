//! Region geometry and per-field edits

use crate::io::error::{StudioError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Axis-aligned rectangle in canvas pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when either side has zero length
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Center point, rounded toward the top-left
    pub fn center(&self) -> (i64, i64) {
        (
            i64::from(self.x) + i64::from(self.width / 2),
            i64::from(self.y) + i64::from(self.height / 2),
        )
    }

    /// Copy of this rectangle with one field replaced
    #[must_use]
    pub const fn with_field(self, field: RegionField, value: u32) -> Self {
        match field {
            RegionField::X => Self { x: value, ..self },
            RegionField::Y => Self { y: value, ..self },
            RegionField::Width => Self {
                width: value,
                ..self
            },
            RegionField::Height => Self {
                height: value,
                ..self
            },
        }
    }
}

/// Parses `x,y,width,height`
impl FromStr for Rect {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid_parameter("region", &s, &e))?;

        match parts.as_slice() {
            &[x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(invalid_parameter(
                "region",
                &s,
                &"expected four comma-separated values x,y,width,height",
            )),
        }
    }
}

/// Geometry field a region control can edit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionField {
    /// Left edge
    X,
    /// Top edge
    Y,
    /// Horizontal extent
    Width,
    /// Vertical extent
    Height,
}

impl FromStr for RegionField {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "width" | "w" => Ok(Self::Width),
            "height" | "h" => Ok(Self::Height),
            _ => Err(invalid_parameter(
                "field",
                &s,
                &"expected one of x, y, width, height",
            )),
        }
    }
}

impl fmt::Display for RegionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
        };
        f.write_str(name)
    }
}

/// User-defined placeholder slated to receive a pattern
///
/// The id is the insertion index and never changes; only the geometry is
/// mutable, and only through [`crate::regions::RegionStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    id: usize,
    rect: Rect,
}

impl Region {
    pub(crate) const fn new(id: usize, rect: Rect) -> Self {
        Self { id, rect }
    }

    /// Creation-order index
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Label shown in the preview overlay
    pub const fn label(&self) -> usize {
        self.id + 1
    }

    /// Current geometry
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) const fn set_field(&mut self, field: RegionField, value: u32) {
        self.rect = self.rect.with_field(field, value);
    }
}
