//=========================================================================
// Controller
//=========================================================================
//
// Owns one scroll container and the scenes that react to it.
//
// Architecture:
// ```text
//   ControllerBuilder ──build()──> Controller ──on_frame()──> [pass]
//        │                            │
//        ├─ with_container()          ├─ scenes: Vec<(SceneId, Scene)>
//        ├─ with_vertical()           ├─ EventCollector  (dirty flag)
//        ├─ with_reverse()            └─ signal channel  (scene → controller)
//        └─ with_log_level()
// ```
//
// Frame:
//   1. apply scene signals (option changes, removal requests)
//   2. drain container events; any event marks the controller dirty
//   3. if dirty: measure container, update every scene in insertion
//      order, clear dirty
//
//=========================================================================

//=== Module Declarations =================================================

mod metrics;
mod signals;

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::Level;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::error::ConfigError;
use crate::core::log_level::gated;
use crate::core::scene::{Scene, SceneOptions};
use crate::core::{Axis, LogLevel, Trigger};
use crate::platform::{EventCollector, FrameListener, ScrollContainer, TickControl};

//=== Public API ==========================================================

pub use metrics::ContainerMetrics;
pub use signals::SceneId;
pub(crate) use signals::{SceneLink, SceneSignal};

//=== ControllerOptions ===================================================

/// Serializable controller settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerOptions {
    /// Scroll axis: true reads top/height, false reads left/width.
    pub vertical: bool,

    /// Default for scenes added later; false forces `reverse = false` on
    /// every added scene.
    pub reverse: bool,

    #[serde(rename = "loglevel")]
    pub log_level: LogLevel,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            vertical: true,
            reverse: true,
            log_level: LogLevel::Warnings,
        }
    }
}

//=== ControllerBuilder ===================================================

/// Builder for a [`Controller`].
///
/// # Default Values
///
/// - **vertical**: true
/// - **reverse**: true
/// - **log level**: warnings
///
/// # Examples
///
/// ```
/// use scroll_magic::prelude::*;
/// use scroll_magic::platform::headless::HeadlessViewport;
///
/// let viewport = HeadlessViewport::new(1024.0, 768.0);
/// let controller = Controller::builder()
///     .with_container(viewport.clone())
///     .with_vertical(true)
///     .with_reverse(false)
///     .build();
///
/// assert!(controller.is_functional());
/// ```
#[derive(Default)]
pub struct ControllerBuilder {
    container: Option<Box<dyn ScrollContainer>>,
    options: ControllerOptions,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, container: impl ScrollContainer + 'static) -> Self {
        self.container = Some(Box::new(container));
        self
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.options.vertical = vertical;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.options.reverse = reverse;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.options.log_level = level;
        self
    }

    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the controller.
    ///
    /// Without a container the error is logged and the controller is
    /// non-functional: scenes can be added but are never updated.
    pub fn build(self) -> Controller {
        Controller::from_parts(self.container, self.options)
    }

    /// Builds the controller, failing if no container was supplied.
    pub fn try_build(self) -> Result<Controller, ConfigError> {
        Controller::try_new(self.container, self.options)
    }
}

//=== Controller ==========================================================

/// Scene registry and tick scheduler for one scroll container.
pub struct Controller {
    container: Option<Box<dyn ScrollContainer>>,
    options: ControllerOptions,
    axis: Axis,
    metrics: ContainerMetrics,

    //--- Registry ---------------------------------------------------------
    scenes: Vec<(SceneId, Scene)>,
    next_id: u64,

    //--- Scheduling -------------------------------------------------------
    events: EventCollector,
    signal_tx: Sender<SceneSignal>,
    signal_rx: Receiver<SceneSignal>,
    dirty: bool,
}

impl Controller {
    //--- Construction -----------------------------------------------------

    /// Creates a vertical controller with default options.
    pub fn new(container: impl ScrollContainer + 'static) -> Self {
        Self::builder().with_container(container).build()
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    /// Creates a controller, failing if `container` is `None`.
    pub fn try_new(
        container: Option<Box<dyn ScrollContainer>>,
        options: ControllerOptions,
    ) -> Result<Self, ConfigError> {
        if container.is_none() {
            return Err(ConfigError::MissingScrollContainer);
        }
        Ok(Self::from_parts(container, options))
    }

    fn from_parts(container: Option<Box<dyn ScrollContainer>>, options: ControllerOptions) -> Self {
        let (signal_tx, signal_rx) = unbounded();
        let mut controller = Self {
            container,
            options,
            axis: Axis::from_vertical(options.vertical),
            metrics: ContainerMetrics::default(),
            scenes: Vec::new(),
            next_id: 0,
            events: EventCollector::new(),
            signal_tx,
            signal_rx,
            dirty: false,
        };

        let Some(container) = controller.container.as_ref() else {
            gated!(options.log_level, Level::Error, "{}", ConfigError::MissingScrollContainer);
            return controller;
        };

        container.subscribe(controller.events.notifier());
        controller.update_container();
        gated!(
            options.log_level,
            Level::Debug,
            "controller ready: axis={:?}, scroll={}, viewport={}",
            controller.axis,
            controller.metrics.scroll_point,
            controller.metrics.viewport_size
        );

        controller
    }

    //--- Accessors --------------------------------------------------------

    pub fn vertical(&self) -> bool {
        self.options.vertical
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn reverse(&self) -> bool {
        self.options.reverse
    }

    pub fn log_level(&self) -> LogLevel {
        self.options.log_level
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// False when constructed without a scroll container.
    pub fn is_functional(&self) -> bool {
        self.container.is_some()
    }

    pub fn metrics(&self) -> ContainerMetrics {
        self.metrics
    }

    pub fn scroll_point(&self) -> f64 {
        self.metrics.scroll_point
    }

    pub fn viewport_size(&self) -> f64 {
        self.metrics.viewport_size
    }

    pub fn container_inner_offset(&self) -> f64 {
        self.metrics.inner_offset
    }

    /// True if a container event arrived and no pass has run since.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Ids of all registered scenes, in update order.
    pub fn scene_ids(&self) -> impl Iterator<Item = SceneId> + '_ {
        self.scenes.iter().map(|(id, _)| *id)
    }

    //--- Registry ---------------------------------------------------------

    /// Takes ownership of `scene`.
    ///
    /// The scene is evaluated on the next frame, against fresh container
    /// metrics.
    pub fn add(&mut self, mut scene: Scene) -> SceneId {
        let id = SceneId(self.next_id);
        self.next_id += 1;

        scene.attach(
            SceneLink::new(id, self.axis, self.signal_tx.clone()),
            self.options.reverse,
        );
        self.scenes.push((id, scene));
        gated!(self.options.log_level, Level::Debug, "added {} ({} total)", id, self.scenes.len());

        self.dirty = true;
        id
    }

    /// Creates a scene and adds it.
    pub fn add_scene(&mut self, trigger: impl Into<Trigger>, options: SceneOptions) -> SceneId {
        self.add(Scene::new(trigger, options))
    }

    /// Adds several scenes in order.
    pub fn add_all(&mut self, scenes: impl IntoIterator<Item = Scene>) -> Vec<SceneId> {
        scenes.into_iter().map(|scene| self.add(scene)).collect()
    }

    /// Detaches a scene and hands it back.
    ///
    /// Its tween and pin are released first; with `reset` both are returned
    /// to their initial state.
    pub fn remove(&mut self, id: SceneId, reset: bool) -> Option<Scene> {
        let Some(index) = self.index_of(id) else {
            gated!(self.options.log_level, Level::Warn, "cannot remove {}: not registered", id);
            return None;
        };

        let (_, mut scene) = self.scenes.remove(index);
        scene.detach(reset);
        gated!(self.options.log_level, Level::Debug, "removed {} ({} left)", id, self.scenes.len());
        Some(scene)
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|(sid, _)| *sid == id).map(|(_, scene)| scene)
    }

    /// Runs `edit` on a scene, then applies whatever it changed.
    ///
    /// Option changes recompute the scene with the current metrics; a
    /// `Scene::remove` call inside `edit` removes it once `edit` returns.
    pub fn edit_scene<R>(&mut self, id: SceneId, edit: impl FnOnce(&mut Scene) -> R) -> Option<R> {
        let index = self.index_of(id)?;
        let result = edit(&mut self.scenes[index].1);
        self.process_signals();
        Some(result)
    }

    //--- Updates ----------------------------------------------------------

    /// Recomputes every scene.
    ///
    /// With `immediate` the container is measured and scenes are updated
    /// now; otherwise the work is deferred to the next frame.
    pub fn update_scenes(&mut self, immediate: bool) {
        if immediate {
            self.update_container();
            self.update_all();
        } else {
            self.dirty = true;
        }
    }

    /// Recomputes one scene with the current metrics.
    pub fn update_scene(&mut self, id: SceneId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.update_scene_at(index);
                true
            }
            None => false,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn index_of(&self, id: SceneId) -> Option<usize> {
        self.scenes.iter().position(|(sid, _)| *sid == id)
    }

    fn update_container(&mut self) {
        if let Some(container) = self.container.as_ref() {
            self.metrics = ContainerMetrics::measure(container.as_ref(), self.axis);
        }
    }

    fn update_all(&mut self) {
        for index in 0..self.scenes.len() {
            self.update_scene_at(index);
        }
    }

    fn update_scene_at(&mut self, index: usize) {
        if !self.is_functional() {
            return;
        }

        let metrics = self.metrics;
        let log_level = self.options.log_level;
        let (id, scene) = &mut self.scenes[index];

        let start = metrics.start_point(scene.trigger_offset(), scene.offset(), scene.trigger_fraction());
        let progress = metrics.progress_for(start, scene.duration());
        gated!(
            log_level,
            Level::Debug,
            "updating {}: start={}, end={}, raw progress={}",
            id,
            start,
            start + scene.duration(),
            progress
        );

        scene.set_start_point(start);
        scene.set_progress(progress);
    }

    /// Applies queued scene signals; each changed scene is recomputed once.
    fn process_signals(&mut self) {
        let pending: Vec<SceneSignal> = self.signal_rx.try_iter().collect();
        let mut recomputed: Vec<SceneId> = Vec::new();

        for signal in pending {
            match signal {
                SceneSignal::Changed { id, what } => {
                    if recomputed.contains(&id) {
                        continue;
                    }
                    recomputed.push(id);
                    gated!(self.options.log_level, Level::Debug, "{} changed {}", id, what);
                    self.update_scene(id);
                }
                SceneSignal::Remove { id, reset } => {
                    self.remove(id, reset);
                }
            }
        }
    }
}

//=== Frame Hook ==========================================================

impl FrameListener for Controller {
    fn on_frame(&mut self) -> TickControl {
        if !self.is_functional() {
            return TickControl::Exit;
        }

        self.process_signals();
        if self.events.collect_frame() {
            self.dirty = true;
        }

        if self.dirty {
            self.update_container();
            self.update_all();
            self.dirty = false;
        }

        TickControl::Continue
    }
}

//=========================================================================
// Tests
//=========================================================================
