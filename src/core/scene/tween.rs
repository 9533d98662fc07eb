//=========================================================================
// Tween Synchronization
//=========================================================================
//
// Maps a scene's state/progress onto an external animation handle.
//
//   repeats forever   → play while DURING (or AFTER with duration 0),
//                       pause otherwise
//   duration == 0     → play forward on AFTER, reverse otherwise
//   duration > 0      → seek: interpolated (timeline + smooth)
//                             → total progress + pause (repeating)
//                             → plain seek (basic)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::state::SceneState;
use crate::platform::Tween;

//=== TweenSync ===========================================================

/// Scene values the synchronization depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TweenSync {
    pub state: SceneState,
    pub duration: f64,
    pub target: f64,
    pub smooth: bool,
}

/// Drives `tween` to match the scene; returns true if the handle was told
/// to do anything.
pub(crate) fn sync_tween(tween: &mut dyn Tween, sync: TweenSync) -> bool {
    if tween.repeats_infinitely() {
        return sync_looping(tween, sync);
    }

    if sync.duration == 0.0 {
        if sync.state == SceneState::After {
            tween.play();
        } else {
            tween.reverse();
        }
        return true;
    }

    let kind = tween.kind();
    if sync.smooth && kind.supports_interpolated_seek() {
        tween.tween_to(sync.target);
    } else if kind.supports_total_seek() {
        tween.seek_total(sync.target);
        tween.pause();
    } else {
        tween.seek(sync.target);
    }
    true
}

fn sync_looping(tween: &mut dyn Tween, sync: TweenSync) -> bool {
    let running = sync.state == SceneState::During
        || (sync.state == SceneState::After && sync.duration == 0.0);

    if running && tween.is_paused() {
        tween.play();
        true
    } else if !running && !tween.is_paused() {
        tween.pause();
        true
    } else {
        false
    }
}

//=========================================================================
// Tests
//=========================================================================
