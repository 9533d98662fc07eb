//=========================================================================
// Host Style Types
//=========================================================================
//
// Box-model values the core reads from and writes to pinned elements.
//
// The host maps these onto whatever styling mechanism it owns (CSS,
// retained-mode widgets, a headless model).
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== PositionMode ========================================================

/// Positioning scheme of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionMode {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

//=== Edges ===============================================================

/// Per-side lengths (border, padding, margin).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn uniform(value: f64) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

//=== Insets ==============================================================

/// `top/right/bottom/left` offsets; `None` stands for `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

//=== ComputedStyle =======================================================

/// Resolved box-model snapshot of an element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComputedStyle {
    pub position: PositionMode,
    pub insets: Insets,
    pub display: String,
    pub width: f64,
    pub height: f64,
    pub border: Edges,
    pub padding: Edges,
    pub margin: Edges,
}

impl ComputedStyle {
    /// Outer width including border, padding and margin.
    pub fn outer_width(&self) -> f64 {
        self.width + self.border.horizontal() + self.padding.horizontal() + self.margin.horizontal()
    }

    /// Outer height including border, padding and margin.
    pub fn outer_height(&self) -> f64 {
        self.height + self.border.vertical() + self.padding.vertical() + self.margin.vertical()
    }
}

//=== Placement ===========================================================

/// Position written to a pinned element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub mode: PositionMode,
    pub top: f64,
    pub left: f64,
}

impl Placement {
    pub fn absolute(top: f64, left: f64) -> Self {
        Self { mode: PositionMode::Absolute, top, left }
    }

    pub fn fixed(top: f64, left: f64) -> Self {
        Self { mode: PositionMode::Fixed, top, left }
    }
}

//=== SpacerStyle =========================================================

/// Style of the layout placeholder wrapped around a pinned element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacerStyle {
    pub class: String,
    pub position: PositionMode,
    pub insets: Insets,
    /// Display copied from the pinned element; `None` keeps the host default.
    pub display: Option<String>,
    pub width: f64,
    pub height: f64,
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_size_sums_the_box_model() {
        let style = ComputedStyle {
            width: 200.0,
            height: 100.0,
            border: Edges::uniform(1.0),
            padding: Edges { top: 5.0, right: 10.0, bottom: 5.0, left: 10.0 },
            margin: Edges { top: 0.0, right: 4.0, bottom: 20.0, left: 4.0 },
            ..ComputedStyle::default()
        };

        assert_eq!(style.outer_width(), 200.0 + 2.0 + 20.0 + 8.0);
        assert_eq!(style.outer_height(), 100.0 + 2.0 + 10.0 + 20.0);
    }

    #[test]
    fn placement_constructors() {
        assert_eq!(Placement::absolute(3.0, 4.0).mode, PositionMode::Absolute);
        assert_eq!(Placement::fixed(3.0, 4.0).mode, PositionMode::Fixed);
    }
}
