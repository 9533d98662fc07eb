//=========================================================================
// Scene
//=========================================================================
//
// One scroll-animated region.
//
// Architecture:
//   Scene
//     ├─ trigger + options   (validated by setters, Change events)
//     ├─ state / progress    (state machine, Update/Start/End events)
//     ├─ tween: Option<Box<dyn Tween>>
//     ├─ pin:   Option<Pin>
//     └─ link:  Option<SceneLink>   (back-reference while attached)
//
// Flow:
//   set_progress() → transition() → sync tween → sync pin → events
//
//=========================================================================

//=== Module Declarations =================================================

mod events;
mod options;
mod pin;
mod state;
mod tween;

//=== External Dependencies ===============================================

use std::fmt;

use log::Level;

//=== Internal Dependencies ===============================================

use crate::core::controller::{SceneId, SceneLink};
use crate::core::error::ConfigError;
use crate::core::log_level::gated;
use crate::core::{LogLevel, Trigger, TriggerPosition};
use crate::platform::{PinElement, Tween};
use pin::Release;
use state::transition;
use tween::{sync_tween, TweenSync};

//=== Public API ==========================================================

pub use events::{Callback, EventKind, ListenerId, Listeners, SceneEvent, SceneOption};
pub use options::SceneOptions;
pub use pin::{Pin, PinSettings};
pub use state::SceneState;

//=== Scene ===============================================================

/// A scroll-driven scene.
///
/// Scenes are created standalone and handed to a
/// [`Controller`](crate::core::Controller), which then owns them and feeds
/// them progress on every pass. All setters return `&mut Self` and never
/// fail: rejected values are replaced by defaults and logged.
///
/// ```
/// use scroll_magic::prelude::*;
///
/// let mut scene = Scene::new(400.0, SceneOptions::default().with_duration(200.0));
/// scene.set_offset(50.0).set_reverse(false);
///
/// scene.set_progress(0.5);
/// assert_eq!(scene.state(), SceneState::During);
/// ```
pub struct Scene {
    trigger: Trigger,
    options: SceneOptions,

    //--- Progress ---------------------------------------------------------
    state: SceneState,
    /// State as of the last Update; boundary events compare against it.
    reported_state: SceneState,
    progress: f64,
    start_point: f64,

    //--- Attached Resources -----------------------------------------------
    link: Option<SceneLink>,
    tween: Option<Box<dyn Tween>>,
    pin: Option<Pin>,

    listeners: Listeners,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates a detached scene in the BEFORE state.
    pub fn new(trigger: impl Into<Trigger>, options: SceneOptions) -> Self {
        let mut scene = Self {
            trigger: trigger.into(),
            options,
            state: SceneState::Before,
            reported_state: SceneState::Before,
            progress: 0.0,
            start_point: 0.0,
            link: None,
            tween: None,
            pin: None,
            listeners: Listeners::new(),
        };
        scene.check_options();
        scene
    }

    //--- Trigger ----------------------------------------------------------

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn set_trigger(&mut self, trigger: impl Into<Trigger>) -> &mut Self {
        self.trigger = trigger.into();
        self.changed(SceneOption::Trigger);
        self
    }

    /// Numeric trigger offset on the controller's axis.
    ///
    /// Element triggers resolve to 0 until the scene joins a controller.
    pub fn trigger_offset(&self) -> f64 {
        self.trigger.resolve(self.link.as_ref().map(|link| link.axis))
    }

    //--- Options ----------------------------------------------------------

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn duration(&self) -> f64 {
        self.options.duration
    }

    pub fn set_duration(&mut self, duration: f64) -> &mut Self {
        self.options.duration = duration;
        self.check_options();

        if let Some(axis) = self.link.as_ref().map(|link| link.axis) {
            // A shrunk run must be re-evaluated, or the pin stays parked at the old end.
            if self.state == SceneState::After {
                self.state = SceneState::During;
            }
            if let Some(pin) = self.pin.as_mut() {
                pin.resize_spacer(axis, self.options.duration);
            }
        }

        self.changed(SceneOption::Duration);
        self
    }

    pub fn offset(&self) -> f64 {
        self.options.offset
    }

    pub fn set_offset(&mut self, offset: f64) -> &mut Self {
        self.options.offset = offset;
        self.check_options();
        self.changed(SceneOption::Offset);
        self
    }

    pub fn trigger_position(&self) -> &TriggerPosition {
        &self.options.trigger_position
    }

    /// Resolved viewport fraction of the trigger position.
    ///
    /// A callback returning a value outside `[0, 1]` is logged and treated
    /// as `OnCenter`.
    pub fn trigger_fraction(&self) -> f64 {
        match self.options.trigger_position.checked_fraction() {
            Ok(fraction) => fraction,
            Err(rejected) => {
                gated!(self.options.log_level, Level::Warn, "{}, using onCenter", rejected);
                0.5
            }
        }
    }

    pub fn set_trigger_position(&mut self, position: impl Into<TriggerPosition>) -> &mut Self {
        self.options.trigger_position = position.into();
        self.check_options();
        self.changed(SceneOption::TriggerPosition);
        self
    }

    pub fn reverse(&self) -> bool {
        self.options.reverse
    }

    pub fn set_reverse(&mut self, reverse: bool) -> &mut Self {
        self.options.reverse = reverse;
        self.changed(SceneOption::Reverse);
        self
    }

    pub fn smooth_tweening(&self) -> bool {
        self.options.smooth_tweening
    }

    pub fn set_smooth_tweening(&mut self, smooth: bool) -> &mut Self {
        self.options.smooth_tweening = smooth;
        self.check_options();
        self.changed(SceneOption::SmoothTweening);
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.options.log_level
    }

    pub fn set_log_level(&mut self, level: LogLevel) -> &mut Self {
        self.options.log_level = level;
        self
    }

    //--- Progress ---------------------------------------------------------

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Scroll position at which progress is 0, as of the last pass.
    pub fn start_point(&self) -> f64 {
        self.start_point
    }

    pub(crate) fn set_start_point(&mut self, start_point: f64) {
        self.start_point = start_point;
    }

    /// Feeds a raw progress value through the state machine.
    ///
    /// Values outside `[0, 1]` are clamped by the transition rules. When no
    /// rule matches (already BEFORE, already AFTER, latched AFTER, same
    /// value) nothing changes and no event fires.
    pub fn set_progress(&mut self, value: f64) -> &mut Self {
        if let Some(next) = transition(self.state, self.progress, value, self.options.reverse) {
            self.state = next.state;
            self.progress = next.progress;

            self.update_tween();
            self.update_pin();

            self.listeners.emit(&SceneEvent::Update { progress: self.progress, state: self.state });
            let previous = std::mem::replace(&mut self.reported_state, self.state);
            self.emit_boundaries(previous);
        }

        gated!(
            self.options.log_level,
            Level::Debug,
            "progress: {}, state: {}, reverse: {}",
            self.progress,
            self.state,
            self.options.reverse
        );
        self
    }

    //--- Tween ------------------------------------------------------------

    /// Attaches an animation handle, replacing (and killing) any previous one.
    ///
    /// The handle is paused; it moves with the next progress change.
    pub fn set_tween(&mut self, mut tween: Box<dyn Tween>) -> &mut Self {
        if self.tween.is_some() {
            self.remove_tween(false);
        }
        tween.pause();
        self.tween = Some(tween);
        self.check_options();
        self
    }

    /// Detaches the animation handle.
    ///
    /// With `reset` the handle is first returned to its start.
    pub fn remove_tween(&mut self, reset: bool) -> &mut Self {
        if let Some(mut tween) = self.tween.take() {
            if reset {
                let sync = TweenSync {
                    state: SceneState::Before,
                    duration: self.options.duration,
                    target: 0.0,
                    smooth: false,
                };
                sync_tween(tween.as_mut(), sync);
            }
            tween.kill();
        }
        self
    }

    pub fn has_tween(&self) -> bool {
        self.tween.is_some()
    }

    //--- Pin --------------------------------------------------------------

    /// Pins `element` for the duration of the scene.
    ///
    /// A detached element is rejected (logged) and any existing pin stays.
    pub fn set_pin(&mut self, element: Box<dyn PinElement>, settings: PinSettings) -> &mut Self {
        if !element.is_attached() {
            gated!(self.options.log_level, Level::Error, "{}", ConfigError::DetachedPinElement);
            return self;
        }

        if self.pin.is_some() {
            self.remove_pin(false);
        }

        match Pin::attach(element, &settings) {
            Ok(pin) => {
                self.pin = Some(pin);
                self.resize_pin_spacer();
            }
            Err(err) => gated!(self.options.log_level, Level::Error, "{}", err),
        }
        self
    }

    /// Releases the pinned element.
    ///
    /// With `reset` (or when detached) the element gets its original style
    /// back and the spacer is removed. Otherwise it is frozen at its
    /// current offset within the pinned run.
    pub fn remove_pin(&mut self, reset: bool) -> &mut Self {
        if let Some(pin) = self.pin.take() {
            let release = match self.link.as_ref() {
                Some(link) if !reset => Release::Freeze {
                    axis: link.axis,
                    at: self.options.duration * self.progress,
                },
                _ => Release::Restore,
            };
            pin.release(release);
        }
        self
    }

    pub fn pin(&self) -> Option<&Pin> {
        self.pin.as_ref()
    }

    //--- Controller -------------------------------------------------------

    /// Id within the owning controller, if attached.
    pub fn id(&self) -> Option<SceneId> {
        self.link.as_ref().map(|link| link.id)
    }

    pub fn is_attached(&self) -> bool {
        self.link.is_some()
    }

    /// Asks the owning controller to remove this scene.
    ///
    /// The removal is applied once the current edit or frame finishes.
    pub fn remove(&mut self, reset: bool) {
        if let Some(link) = self.link.as_ref() {
            link.request_removal(reset);
        }
    }

    pub(crate) fn attach(&mut self, link: SceneLink, allow_reverse: bool) {
        if !allow_reverse {
            self.set_reverse(false);
        }
        self.link = Some(link);
        self.resize_pin_spacer();
    }

    pub(crate) fn detach(&mut self, reset: bool) {
        self.remove_tween(reset);
        self.remove_pin(reset);
        self.link = None;
    }

    //--- Events -----------------------------------------------------------

    pub fn on_start(&mut self, callback: impl FnMut(&SceneEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(EventKind::Start, Box::new(callback))
    }

    pub fn on_change(&mut self, callback: impl FnMut(&SceneEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(EventKind::Change, Box::new(callback))
    }

    pub fn on_update(&mut self, callback: impl FnMut(&SceneEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(EventKind::Update, Box::new(callback))
    }

    pub fn on_end(&mut self, callback: impl FnMut(&SceneEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(EventKind::End, Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    //--- Internal Helpers -------------------------------------------------

    fn check_options(&mut self) {
        for rejected in self.options.sanitize() {
            gated!(self.options.log_level, Level::Error, "{}", rejected);
        }

        let smooth_unsupported = self
            .tween
            .as_ref()
            .is_some_and(|tween| !tween.kind().supports_interpolated_seek());
        if self.options.smooth_tweening && smooth_unsupported {
            gated!(
                self.options.log_level,
                Level::Warn,
                "Scene option \"smoothTweening = true\" only works with timeline tweens"
            );
        }
    }

    fn changed(&mut self, what: SceneOption) {
        self.listeners.emit(&SceneEvent::Change { what });
        if let Some(link) = self.link.as_ref() {
            link.changed(what);
        }
    }

    fn update_tween(&mut self) -> bool {
        let sync = TweenSync {
            state: self.state,
            duration: self.options.duration,
            target: self.progress,
            smooth: self.options.smooth_tweening,
        };
        match self.tween.as_mut() {
            Some(tween) => sync_tween(tween.as_mut(), sync),
            None => false,
        }
    }

    fn update_pin(&mut self) {
        if let (Some(pin), Some(link)) = (self.pin.as_mut(), self.link.as_ref()) {
            pin.sync_position(self.state, self.options.duration, link.axis, self.start_point);
        }
    }

    fn resize_pin_spacer(&mut self) {
        if let (Some(pin), Some(link)) = (self.pin.as_mut(), self.link.as_ref()) {
            pin.resize_spacer(link.axis, self.options.duration);
        }
    }

    /// Fires Start/End when the start or end point was crossed, in the
    /// order the scroll position crossed them.
    fn emit_boundaries(&mut self, previous: SceneState) {
        let crossed_start = (previous == SceneState::Before) != (self.state == SceneState::Before);
        let crossed_end = (previous == SceneState::After) != (self.state == SceneState::After);

        let start = SceneEvent::Start { progress: self.progress, state: self.state };
        let end = SceneEvent::End { progress: self.progress, state: self.state };
        let forward = previous == SceneState::Before || self.state == SceneState::After;

        let ordered = if forward {
            [(crossed_start, start), (crossed_end, end)]
        } else {
            [(crossed_end, end), (crossed_start, start)]
        };
        for (crossed, event) in ordered {
            if crossed {
                self.listeners.emit(&event);
            }
        }
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("trigger", &self.trigger)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("start_point", &self.start_point)
            .field("id", &self.id())
            .field("tween", &self.tween.is_some())
            .field("pin", &self.pin)
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
