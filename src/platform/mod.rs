//=========================================================================
// Platform Bridge
//
// Contract between the scroll core and the host that owns the actual
// rendering surface (browser DOM, native widget tree, headless model).
//
// Architecture:
// ```text
//  Host:                              Core:
//  ┌──────────────────────────┐      ┌────────────────────────┐
//  │  scroll / resize events  │      │  Controller            │
//  │   ↓                      │      │   ├─ EventCollector    │
//  │  ScrollNotifier ─────────┼──────┼─► │  (dirty flag)      │
//  │                          │      │   ↓                    │
//  │  frame source ───────────┼──────┼─► on_frame()           │
//  │                          │      │   ↓                    │
//  │  ScrollContainer   ◄─────┼──────┼── measure metrics      │
//  │  Positioned        ◄─────┼──────┼── trigger offsets      │
//  │  PinElement/Spacer ◄─────┼──────┼── pin placement        │
//  │  Tween             ◄─────┼──────┼── play / seek          │
//  └──────────────────────────┘      └────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Events only mark dirty**: scroll/resize notifications carry no
//   data and travel over a channel; all measuring happens on the frame.
// - **Narrow traits**: each host concern is a separate trait so a host
//   implements only what it uses (a scene without a pin never needs a
//   `PinElement`).
// - **Tween capabilities are declared**: `Tween::kind` states which seek
//   operations the handle supports instead of the core probing for them.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event_collector;
pub mod frame_loop;
pub mod headless;
pub mod style;

//=== Internal Imports ====================================================

use crate::core::{Axis, Point};

//=== Public API ==========================================================

pub use event_collector::{ContainerEvent, EventCollector, ScrollNotifier};
pub use frame_loop::{FrameListener, FrameLoop, TickControl};
pub use style::{ComputedStyle, Edges, Insets, Placement, PositionMode, SpacerStyle};

//=== Positioned ==========================================================

/// Anything with an absolute document position (scene triggers).
pub trait Positioned {
    /// Absolute offset of the element's border box.
    fn offset(&self) -> Point;
}

//=== ScrollContainer =====================================================

/// The scrollable viewport a controller observes.
pub trait ScrollContainer {
    /// Current scroll offset on `axis` (scrollTop / scrollLeft).
    fn scroll_position(&self, axis: Axis) -> f64;

    /// Visible extent on `axis` (height / width).
    fn viewport_size(&self, axis: Axis) -> f64;

    /// Absolute offset of the container.
    ///
    /// The root viewport reports the origin; a nested scrolling element
    /// reports its page position.
    fn offset(&self) -> Point;

    /// Registers the notifier for scroll and resize events.
    ///
    /// Called exactly once, when the controller is constructed.
    fn subscribe(&self, notifier: ScrollNotifier);
}

//=== PinElement ==========================================================

/// An element that can be pinned to the viewport.
pub trait PinElement {
    /// Returns false if the element is not part of the document.
    fn is_attached(&self) -> bool {
        true
    }

    /// Resolved box-model values used to size the spacer.
    fn computed_style(&self) -> ComputedStyle;

    /// Inline style currently set on the element, if any.
    fn inline_style(&self) -> Option<String>;

    /// Replaces the element's inline style (used to restore the original).
    fn set_inline_style(&mut self, style: &str);

    /// Writes position mode and top/left coordinates.
    fn set_placement(&mut self, placement: Placement);

    /// Wraps the element in a new spacer and returns a handle to it.
    fn wrap(&mut self, spacer: SpacerStyle) -> Box<dyn Spacer>;
}

//=== Spacer ==============================================================

/// Layout placeholder wrapped around a pinned element.
pub trait Spacer {
    /// Absolute offset of the spacer.
    fn offset(&self) -> Point;

    /// Sets the spacer's extent on `axis` (height when vertical).
    fn set_extent(&mut self, axis: Axis, extent: f64);

    /// Moves the pinned element back in front of the spacer and removes it.
    fn remove(self: Box<Self>);
}

//=== Tween ===============================================================

/// Seek capabilities of an animation handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TweenKind {
    /// Single tween; only plain time-proportional seeking.
    #[default]
    Basic,

    /// Tween with repeats; supports seeking over total progress.
    Repeating,

    /// Multi-step timeline; supports total seeking and interpolated
    /// catch-up to a target.
    Timeline,
}

impl TweenKind {
    pub fn supports_total_seek(self) -> bool {
        matches!(self, Self::Repeating | Self::Timeline)
    }

    pub fn supports_interpolated_seek(self) -> bool {
        self == Self::Timeline
    }
}

/// External animation handle driven by a scene.
///
/// Progress values are normalized to `[0, 1]` over the handle's length.
pub trait Tween {
    /// Declared seek capabilities.
    fn kind(&self) -> TweenKind {
        TweenKind::Basic
    }

    /// Plays forward from the current position.
    fn play(&mut self);

    /// Plays backward from the current position.
    fn reverse(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// True if the handle loops forever.
    fn repeats_infinitely(&self) -> bool {
        false
    }

    /// Jumps to `progress` of a single iteration and pauses.
    fn seek(&mut self, progress: f64);

    /// Jumps to `progress` of the total length including repeats.
    ///
    /// Only called when `kind()` supports total seeking.
    fn seek_total(&mut self, progress: f64) {
        self.seek(progress);
    }

    /// Animates from the current position to `progress`.
    ///
    /// Only called when `kind()` supports interpolated seeking.
    fn tween_to(&mut self, progress: f64) {
        self.seek(progress);
    }

    /// Releases the handle; it is not used again.
    fn kill(&mut self) {}
}
