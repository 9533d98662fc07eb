//=========================================================================
// Geometry
//=========================================================================
//
// Scroll-axis primitives shared by the controller, scenes and host.
//
// All coordinates are absolute document pixels. The controller reads one
// axis only: vertical → top/height, horizontal → left/width.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Axis ================================================================

/// Scroll direction a controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Maps the `vertical` flag used by controller options onto an axis.
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }
}

//=== Point ===============================================================

/// Absolute position of an element or container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub top: f64,
    pub left: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { top: 0.0, left: 0.0 };

    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Coordinate on the given axis.
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    /// Builds a point that is `value` along `axis` and zero on the other.
    pub fn on_axis(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Vertical => Self::new(value, 0.0),
            Axis::Horizontal => Self::new(0.0, value),
        }
    }

    /// Shifts the coordinate on `axis` by `-delta`, leaving the other one.
    pub fn minus_along(self, axis: Axis, delta: f64) -> Self {
        match axis {
            Axis::Vertical => Self::new(self.top - delta, self.left),
            Axis::Horizontal => Self::new(self.top, self.left - delta),
        }
    }

    pub fn is_origin(self) -> bool {
        self.top == 0.0 && self.left == 0.0
    }
}

//=== Size ================================================================

/// Width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent on the given axis (height when vertical).
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
