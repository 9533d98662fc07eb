//=========================================================================
// Scroll Magic Library Root
//
// Scroll-driven scenes for any host that can report a scroll position.
//
// Responsibilities:
// - Expose the `Controller` / `Scene` pair as the main entry point
// - Expose the platform traits a host implements (`ScrollContainer`,
//   `Positioned`, `PinElement`, `Spacer`, `Tween`)
// - Ship a headless host for tests and server-side evaluation
//
// Typical usage:
// ```
// use scroll_magic::prelude::*;
// use scroll_magic::platform::headless::HeadlessViewport;
//
// let viewport = HeadlessViewport::new(1024.0, 768.0);
// let mut controller = Controller::new(viewport.clone());
// let id = controller.add_scene(1000.0, SceneOptions::default().with_duration(300.0));
//
// viewport.scroll_to(400.0);
// controller.on_frame();
//
// assert_eq!(controller.scene(id).map(Scene::state), Some(SceneState::During));
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the host-independent logic.
//
pub mod core;

// `platform` defines the host contract plus the frame loop, the event
// collector and the headless host.
//
pub mod platform;

pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{Controller, ControllerBuilder, Scene, SceneOptions};
