//=========================================================================
// Scroll Core
//
// Host-independent scroll logic: progress mapping, the scene state
// machine, tween synchronization, pinning and the controller registry.
//
// Responsibilities:
// - Resolve triggers and map scroll positions to scene progress
// - Drive each scene's tween and pin from its state
// - Schedule recomputation from container events on frame ticks
//
// Notes:
// The core never touches a real document. Every measurement and style
// write goes through the traits in `crate::platform`, and everything
// runs on the host's thread; only container notifications may arrive
// from elsewhere, over a channel.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod controller;
pub mod error;
pub mod geometry;
pub mod log_level;
pub mod scene;
pub mod trigger;

//=== Public API ==========================================================

pub use controller::{ContainerMetrics, Controller, ControllerBuilder, ControllerOptions, SceneId};
pub use error::{ConfigError, OptionError};
pub use geometry::{Axis, Point, Size};
pub use log_level::LogLevel;
pub use scene::{
    EventKind, ListenerId, Pin, PinSettings, Scene, SceneEvent, SceneOption, SceneOptions, SceneState,
};
pub use trigger::{Trigger, TriggerPosition};
