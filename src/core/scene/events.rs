//=========================================================================
// Scene Events
//=========================================================================
//
// Typed listener registry for the four scene event kinds.
//
// Architecture:
//   subscribe(kind, callback) → ListenerId
//   emit(event) → every callback registered for event.kind(), in
//                 registration order
//   unsubscribe(id)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::state::SceneState;

//=== SceneOption =========================================================

/// Option whose change triggered a `Change` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneOption {
    Trigger,
    Duration,
    Offset,
    TriggerPosition,
    Reverse,
    SmoothTweening,
}

impl SceneOption {
    pub fn name(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Duration => "duration",
            Self::Offset => "offset",
            Self::TriggerPosition => "triggerPosition",
            Self::Reverse => "reverse",
            Self::SmoothTweening => "smoothTweening",
        }
    }
}

impl fmt::Display for SceneOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== EventKind / SceneEvent ==============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    Change,
    Update,
    End,
}

/// Payload delivered to scene listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// The scroll position crossed the scene's start point.
    Start { progress: f64, state: SceneState },

    /// An option was changed through a setter.
    Change { what: SceneOption },

    /// Progress changed.
    Update { progress: f64, state: SceneState },

    /// The scroll position crossed the scene's end point.
    End { progress: f64, state: SceneState },
}

impl SceneEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start { .. } => EventKind::Start,
            Self::Change { .. } => EventKind::Change,
            Self::Update { .. } => EventKind::Update,
            Self::End { .. } => EventKind::End,
        }
    }
}

//=== Listeners ===========================================================

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type Callback = Box<dyn FnMut(&SceneEvent)>;

struct Entry {
    id: ListenerId,
    kind: EventKind,
    callback: Callback,
}

/// Ordered callback registry keyed by event kind.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, kind, callback });
        id
    }

    /// Removes a listener; returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Invokes every listener of the event's kind.
    pub fn emit(&mut self, event: &SceneEvent) {
        let kind = event.kind();
        for entry in self.entries.iter_mut().filter(|entry| entry.kind == kind) {
            (entry.callback)(event);
        }
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("count", &self.entries.len()).finish()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&'static str) -> Callback) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |tag: &'static str| -> Callback {
            let sink = Rc::clone(&sink);
            Box::new(move |event: &SceneEvent| sink.borrow_mut().push(format!("{tag}:{:?}", event.kind())))
        };
        (log, make)
    }

    #[test]
    fn emit_only_reaches_matching_kind() {
        let (log, make) = recorder();
        let mut listeners = Listeners::new();
        listeners.subscribe(EventKind::Update, make("a"));
        listeners.subscribe(EventKind::Change, make("b"));

        listeners.emit(&SceneEvent::Update { progress: 0.5, state: SceneState::During });

        assert_eq!(*log.borrow(), vec!["a:Update".to_string()]);
    }

    #[test]
    fn emit_preserves_registration_order() {
        let (log, make) = recorder();
        let mut listeners = Listeners::new();
        listeners.subscribe(EventKind::Change, make("first"));
        listeners.subscribe(EventKind::Change, make("second"));

        listeners.emit(&SceneEvent::Change { what: SceneOption::Duration });

        assert_eq!(*log.borrow(), vec!["first:Change".to_string(), "second:Change".to_string()]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let (log, make) = recorder();
        let mut listeners = Listeners::new();
        let first = listeners.subscribe(EventKind::End, make("first"));
        listeners.subscribe(EventKind::End, make("second"));

        assert!(listeners.unsubscribe(first));
        assert!(!listeners.unsubscribe(first));
        assert_eq!(listeners.count(EventKind::End), 1);

        listeners.emit(&SceneEvent::End { progress: 1.0, state: SceneState::After });
        assert_eq!(*log.borrow(), vec!["second:End".to_string()]);
    }

    #[test]
    fn option_names_match_configuration_keys() {
        assert_eq!(SceneOption::TriggerPosition.to_string(), "triggerPosition");
        assert_eq!(SceneOption::SmoothTweening.name(), "smoothTweening");
    }
}
