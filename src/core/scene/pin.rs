//=========================================================================
// Pin
//=========================================================================
//
// Keeps an element glued to the viewport while its scene is DURING.
//
// Layout:
//   spacer (relative, sized to the element's outer box [+ duration])
//     └─ pinned element (absolute at 0,0 │ fixed │ absolute at end)
//
// Placement per state:
//   BEFORE                   → absolute (0, 0)
//   AFTER, duration > 0      → absolute, parked at `duration` on the axis
//   DURING / AFTER, dur == 0 → fixed at spacer offset − start point
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::state::SceneState;
use crate::core::error::ConfigError;
use crate::core::{Axis, Point, Size};
use crate::platform::{ComputedStyle, PinElement, Placement, PositionMode, Spacer, SpacerStyle};

//=== PinSettings =========================================================

/// Options accepted by `Scene::set_pin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PinSettings {
    /// Grow the spacer by the scene duration so following content is
    /// pushed down for exactly the pinned run.
    pub push_followers: bool,

    /// Class name given to the spacer.
    pub spacer_class: String,
}

impl Default for PinSettings {
    fn default() -> Self {
        Self {
            push_followers: true,
            spacer_class: "scrollmagic-pin-spacer".to_string(),
        }
    }
}

impl PinSettings {
    pub fn with_push_followers(mut self, push_followers: bool) -> Self {
        self.push_followers = push_followers;
        self
    }

    pub fn with_spacer_class(mut self, class: impl Into<String>) -> Self {
        self.spacer_class = class.into();
        self
    }
}

//=== Release =============================================================

/// How a pin is detached from its scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Release {
    /// Restore the original inline style and remove the spacer.
    Restore,

    /// Leave the spacer and park the element `at` along `axis`.
    Freeze { axis: Axis, at: f64 },
}

//=== Pin =================================================================

/// A pinned element together with its spacer.
pub struct Pin {
    element: Box<dyn PinElement>,
    spacer: Box<dyn Spacer>,
    original_style: String,
    push_followers: bool,
    start_size: Size,
}

impl Pin {
    /// Wraps `element` in a spacer and switches it to absolute positioning.
    pub(crate) fn attach(
        mut element: Box<dyn PinElement>,
        settings: &PinSettings,
    ) -> Result<Self, ConfigError> {
        if !element.is_attached() {
            return Err(ConfigError::DetachedPinElement);
        }

        let style = spacer_style(&element.computed_style(), &settings.spacer_class);
        let start_size = Size::new(style.width, style.height);
        let original_style = element.inline_style().unwrap_or_default();

        let spacer = element.wrap(style);
        element.set_placement(Placement::absolute(0.0, 0.0));

        Ok(Self {
            element,
            spacer,
            original_style,
            push_followers: settings.push_followers,
            start_size,
        })
    }

    /// Size of the spacer before any duration was added.
    pub fn start_size(&self) -> Size {
        self.start_size
    }

    pub fn pushes_followers(&self) -> bool {
        self.push_followers
    }

    //--- Scene Hooks ------------------------------------------------------

    /// Writes the placement matching the scene's current state.
    pub(crate) fn sync_position(
        &mut self,
        state: SceneState,
        duration: f64,
        axis: Axis,
        start_point: f64,
    ) {
        let target = placement(state, duration, axis, start_point, self.spacer.offset());
        self.element.set_placement(target);
    }

    /// Resizes the spacer to `start size + duration` when pushing followers.
    pub(crate) fn resize_spacer(&mut self, axis: Axis, duration: f64) {
        if self.push_followers {
            self.spacer.set_extent(axis, self.start_size.along(axis) + duration);
        }
    }

    /// Detaches the pin from the scene.
    pub(crate) fn release(mut self, release: Release) {
        match release {
            Release::Restore => {
                self.spacer.remove();
                self.element.set_inline_style(&self.original_style);
            }
            Release::Freeze { axis, at } => {
                let parked = Point::on_axis(axis, at);
                self.element.set_placement(Placement::absolute(parked.top, parked.left));
            }
        }
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pin")
            .field("push_followers", &self.push_followers)
            .field("start_size", &self.start_size)
            .finish_non_exhaustive()
    }
}

//=== Layout Helpers ======================================================

/// Spacer style that reserves the pinned element's place in the flow.
///
/// Absolutely positioned elements take no space, so their spacer is 0×0.
pub(crate) fn spacer_style(computed: &ComputedStyle, class: &str) -> SpacerStyle {
    let (display, width, height) = if computed.position == PositionMode::Absolute {
        (None, 0.0, 0.0)
    } else {
        (Some(computed.display.clone()), computed.outer_width(), computed.outer_height())
    };

    SpacerStyle {
        class: class.to_string(),
        position: PositionMode::Relative,
        insets: computed.insets,
        display,
        width,
        height,
    }
}

/// Placement of the pinned element for a scene state.
pub(crate) fn placement(
    state: SceneState,
    duration: f64,
    axis: Axis,
    start_point: f64,
    spacer_offset: Point,
) -> Placement {
    match state {
        SceneState::Before => Placement::absolute(0.0, 0.0),
        SceneState::After if duration > 0.0 => {
            let parked = Point::on_axis(axis, duration);
            Placement::absolute(parked.top, parked.left)
        }
        // AFTER with duration 0 never unpins.
        SceneState::During | SceneState::After => {
            let fixed = spacer_offset.minus_along(axis, start_point);
            Placement::fixed(fixed.top, fixed.left)
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Edges, Insets};

    #[test]
    fn before_sits_at_spacer_origin() {
        let p = placement(SceneState::Before, 300.0, Axis::Vertical, 750.0, Point::new(1000.0, 20.0));
        assert_eq!(p, Placement::absolute(0.0, 0.0));
    }

    #[test]
    fn after_parks_at_end_of_run() {
        let vertical = placement(SceneState::After, 300.0, Axis::Vertical, 750.0, Point::ORIGIN);
        assert_eq!(vertical, Placement::absolute(300.0, 0.0));

        let horizontal = placement(SceneState::After, 300.0, Axis::Horizontal, 750.0, Point::ORIGIN);
        assert_eq!(horizontal, Placement::absolute(0.0, 300.0));
    }

    #[test]
    fn during_is_fixed_relative_to_start_point() {
        let p = placement(SceneState::During, 300.0, Axis::Vertical, 750.0, Point::new(1000.0, 20.0));
        assert_eq!(p, Placement::fixed(250.0, 20.0));

        let p = placement(SceneState::During, 300.0, Axis::Horizontal, 100.0, Point::new(40.0, 600.0));
        assert_eq!(p, Placement::fixed(40.0, 500.0));
    }

    #[test]
    fn after_with_zero_duration_stays_fixed() {
        let p = placement(SceneState::After, 0.0, Axis::Vertical, -400.0, Point::new(100.0, 0.0));
        assert_eq!(p, Placement::fixed(500.0, 0.0));
    }

    #[test]
    fn spacer_matches_outer_box_of_flowing_element() {
        let computed = ComputedStyle {
            position: PositionMode::Static,
            insets: Insets { top: Some(4.0), ..Insets::default() },
            display: "block".into(),
            width: 100.0,
            height: 50.0,
            border: Edges::uniform(1.0),
            padding: Edges::uniform(2.0),
            margin: Edges::uniform(3.0),
        };

        let style = spacer_style(&computed, "pin-spacer");

        assert_eq!(style.class, "pin-spacer");
        assert_eq!(style.position, PositionMode::Relative);
        assert_eq!(style.insets.top, Some(4.0));
        assert_eq!(style.display.as_deref(), Some("block"));
        assert_eq!(style.width, 112.0);
        assert_eq!(style.height, 62.0);
    }

    #[test]
    fn spacer_of_absolute_element_is_empty() {
        let computed = ComputedStyle {
            position: PositionMode::Absolute,
            width: 100.0,
            height: 50.0,
            ..ComputedStyle::default()
        };

        let style = spacer_style(&computed, "pin-spacer");

        assert_eq!((style.width, style.height), (0.0, 0.0));
        assert_eq!(style.display, None);
    }

    #[test]
    fn default_settings_push_followers() {
        let settings = PinSettings::default();
        assert!(settings.push_followers);

        let parsed: PinSettings = serde_json::from_str(r#"{"pushFollowers": false}"#).unwrap();
        assert!(!parsed.push_followers);
        assert_eq!(parsed.spacer_class, settings.spacer_class);
    }
}
