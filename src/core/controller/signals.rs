//=========================================================================
// Scene Signals
//=========================================================================
//
// Scene → controller back-channel.
//
// A scene never owns its controller. While attached it holds a
// `SceneLink`: its id, the controller's axis, and a sender for signals
// the controller drains after each edit and at the start of each frame.
//
//   Scene::set_duration() ──► SceneSignal::Changed ──► recompute scene
//   Scene::remove()       ──► SceneSignal::Remove  ──► Controller::remove
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use crossbeam_channel::Sender;

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneOption;
use crate::core::Axis;

//=== SceneId =============================================================

/// Identifier of a scene within its controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub(crate) u64);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene #{}", self.0)
    }
}

//=== SceneSignal =========================================================

/// Requests a scene posts to its controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SceneSignal {
    /// An option changed outside of a scroll pass.
    Changed { id: SceneId, what: SceneOption },

    /// The scene asked to be removed from its controller.
    Remove { id: SceneId, reset: bool },
}

//=== SceneLink ===========================================================

/// Back-reference from an attached scene to its controller.
#[derive(Debug, Clone)]
pub(crate) struct SceneLink {
    pub id: SceneId,
    pub axis: Axis,
    signals: Sender<SceneSignal>,
}

impl SceneLink {
    pub fn new(id: SceneId, axis: Axis, signals: Sender<SceneSignal>) -> Self {
        Self { id, axis, signals }
    }

    pub fn changed(&self, what: SceneOption) {
        self.post(SceneSignal::Changed { id: self.id, what });
    }

    pub fn request_removal(&self, reset: bool) {
        self.post(SceneSignal::Remove { id: self.id, reset });
    }

    fn post(&self, signal: SceneSignal) {
        // The controller owns the receiver; a closed channel means it is gone.
        let _ = self.signals.send(signal);
    }
}
