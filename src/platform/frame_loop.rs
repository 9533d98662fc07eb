//=========================================================================
// Frame Loop
//=========================================================================
//
// Fixed-rate frame source for hosts without an animation-frame callback.
//
// Each frame:
//  1. Calls `FrameListener::on_frame()`
//  2. Sleeps for the remainder of the frame budget
//  3. Stops on `TickControl::Exit` or when the frame limit is reached
//
// Runs on the calling thread; controllers are not `Send`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== FrameListener =======================================================

/// Receives one callback per rendered frame.
pub trait FrameListener {
    fn on_frame(&mut self) -> TickControl;
}

//=== FrameLoop ===========================================================

/// Drives a [`FrameListener`] at a fixed frame rate.
#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    frame_duration: Duration,
    max_frames: Option<u64>,
}

impl FrameLoop {
    /// Creates a loop ticking `fps` times per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn new(fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / fps),
            max_frames: None,
        }
    }

    /// Stops the loop after `frames` callbacks.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Runs until the listener exits or the frame limit is hit.
    ///
    /// Returns the number of frames delivered.
    pub fn run(&self, listener: &mut dyn FrameListener) -> u64 {
        debug!("Frame loop starting ({:?} per frame)", self.frame_duration);
        let mut frames = 0;

        loop {
            if self.max_frames.is_some_and(|max| frames >= max) {
                break;
            }

            let frame_start = Instant::now();
            frames += 1;

            if listener.on_frame() == TickControl::Exit {
                info!("Frame listener requested exit after {} frames", frames);
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_duration {
                thread::sleep(self.frame_duration - elapsed);
            }
        }

        frames
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        frames: u32,
        exit_after: u32,
    }

    impl FrameListener for Counter {
        fn on_frame(&mut self) -> TickControl {
            self.frames += 1;
            if self.frames >= self.exit_after {
                TickControl::Exit
            } else {
                TickControl::Continue
            }
        }
    }

    #[test]
    fn stops_when_listener_exits() {
        let mut counter = Counter { frames: 0, exit_after: 3 };
        let frames = FrameLoop::new(1000.0).run(&mut counter);

        assert_eq!(frames, 3);
        assert_eq!(counter.frames, 3);
    }

    #[test]
    fn stops_at_frame_limit() {
        let mut counter = Counter { frames: 0, exit_after: u32::MAX };
        let frames = FrameLoop::new(1000.0).with_max_frames(5).run(&mut counter);

        assert_eq!(frames, 5);
        assert_eq!(counter.frames, 5);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn rejects_zero_fps() {
        FrameLoop::new(0.0);
    }
}
