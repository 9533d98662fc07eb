//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use scroll_magic::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Controller
pub use crate::core::controller::{Controller, ControllerBuilder, ControllerOptions, SceneId};

// Scenes
pub use crate::core::scene::{
    EventKind, ListenerId, PinSettings, Scene, SceneEvent, SceneOption, SceneOptions, SceneState,
};
pub use crate::core::{Axis, LogLevel, Point, Trigger, TriggerPosition};

// Host contract
pub use crate::platform::{
    FrameListener, FrameLoop, PinElement, Positioned, ScrollContainer, ScrollNotifier, Spacer,
    TickControl, Tween, TweenKind,
};
