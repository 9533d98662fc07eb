//=========================================================================
// Scene State Machine
//=========================================================================
//
// Three-state lifecycle driven by raw progress values.
//
//   BEFORE ──(0 < v < 1)──► DURING ──(v >= 1)──► AFTER
//     ▲                        │                   │
//     └────────(v <= 0)────────┴───── reverse ─────┘
//
// Rules are checked in order; the first match wins. No match leaves both
// state and progress untouched, which is what latches AFTER when reverse
// is off.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};

//=== SceneState ==========================================================

/// Where the scroll position is relative to a scene's active range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SceneState {
    #[default]
    Before,
    During,
    After,
}

impl fmt::Display for SceneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Before => "BEFORE",
            Self::During => "DURING",
            Self::After => "AFTER",
        })
    }
}

//=== Transition ==========================================================

/// Result of a successful state machine step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Transition {
    pub state: SceneState,
    pub progress: f64,
}

/// Applies a raw progress `value` to the current `state`/`progress`.
///
/// Returns `None` when no rule matches.
pub(crate) fn transition(
    state: SceneState,
    progress: f64,
    value: f64,
    reverse: bool,
) -> Option<Transition> {
    let may_leave_after = state != SceneState::After || reverse;

    if value <= 0.0 && state != SceneState::Before && may_leave_after {
        Some(Transition { state: SceneState::Before, progress: 0.0 })
    } else if value >= 1.0 && state != SceneState::After {
        Some(Transition { state: SceneState::After, progress: 1.0 })
    } else if value > 0.0
        && value < 1.0
        && may_leave_after
        && !(state == SceneState::During && value == progress)
    {
        Some(Transition { state: SceneState::During, progress: value })
    } else {
        None
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use SceneState::*;

    fn step(state: SceneState, progress: f64, value: f64, reverse: bool) -> Option<(SceneState, f64)> {
        transition(state, progress, value, reverse).map(|t| (t.state, t.progress))
    }

    #[test]
    fn before_to_during_to_after() {
        assert_eq!(step(Before, 0.0, 0.3, true), Some((During, 0.3)));
        assert_eq!(step(During, 0.3, 1.7, true), Some((After, 1.0)));
    }

    #[test]
    fn values_below_zero_clamp_to_before() {
        assert_eq!(step(During, 0.4, -2.0, true), Some((Before, 0.0)));
    }

    #[test]
    fn staying_before_is_a_no_op() {
        assert_eq!(step(Before, 0.0, -1.0, true), None);
        assert_eq!(step(Before, 0.0, 0.0, false), None);
    }

    #[test]
    fn staying_after_is_a_no_op() {
        assert_eq!(step(After, 1.0, 3.0, true), None);
    }

    #[test]
    fn repeated_in_range_value_is_idempotent() {
        assert_eq!(step(Before, 0.0, 0.5, true), Some((During, 0.5)));
        assert_eq!(step(During, 0.5, 0.5, true), None);
        assert_eq!(step(During, 0.5, 0.6, true), Some((During, 0.6)));
    }

    #[test]
    fn after_is_latched_without_reverse() {
        assert_eq!(step(After, 1.0, 0.5, false), None);
        assert_eq!(step(After, 1.0, -1.0, false), None);
    }

    #[test]
    fn after_can_reverse_when_allowed() {
        assert_eq!(step(After, 1.0, 0.5, true), Some((During, 0.5)));
        assert_eq!(step(After, 1.0, 0.0, true), Some((Before, 0.0)));
    }

    #[test]
    fn during_may_still_rewind_without_reverse() {
        // Only AFTER latches; a scene still inside its window follows the scroll.
        assert_eq!(step(During, 0.6, 0.2, false), Some((During, 0.2)));
        assert_eq!(step(During, 0.6, 0.0, false), Some((Before, 0.0)));
    }

    #[test]
    fn nan_matches_no_rule() {
        assert_eq!(step(During, 0.5, f64::NAN, true), None);
    }

    #[test]
    fn display_uses_upper_case_names() {
        assert_eq!(During.to_string(), "DURING");
        assert_eq!(serde_json::to_string(&After).unwrap(), "\"AFTER\"");
    }
}
