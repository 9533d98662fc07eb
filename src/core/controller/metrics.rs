//=========================================================================
// Container Metrics
//=========================================================================
//
// Measurements taken from the scroll container once per dirty pass, and
// the mapping from those measurements to a scene's progress.
//
//   start    = trigger − offset − inner offset − viewport × fraction
//   end      = start + duration
//   progress = (scroll − start) / duration        (duration > 0)
//            = scroll > start ? 1 : 0             (duration == 0)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::Axis;
use crate::platform::ScrollContainer;

//=== ContainerMetrics ====================================================

/// Snapshot of the scroll container on the controller's axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerMetrics {
    pub scroll_point: f64,
    pub viewport_size: f64,

    /// Offset of a nested container's content relative to the page; 0 for
    /// the root viewport.
    pub inner_offset: f64,
}

impl ContainerMetrics {
    pub fn measure(container: &dyn ScrollContainer, axis: Axis) -> Self {
        let scroll_point = container.scroll_position(axis);
        let viewport_size = container.viewport_size(axis);

        let container_offset = container.offset();
        let inner_offset = if container_offset.is_origin() {
            0.0
        } else {
            container_offset.along(axis) - scroll_point
        };

        Self { scroll_point, viewport_size, inner_offset }
    }

    /// Scroll position at which a scene's progress is 0.
    pub fn start_point(&self, trigger_offset: f64, offset: f64, trigger_fraction: f64) -> f64 {
        trigger_offset - offset - self.inner_offset - self.viewport_size * trigger_fraction
    }

    /// Raw (unclamped) progress of a scene starting at `start`.
    pub fn progress_for(&self, start: f64, duration: f64) -> f64 {
        if duration > 0.0 {
            (self.scroll_point - start) / duration
        } else if self.scroll_point > start {
            1.0
        } else {
            0.0
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use crate::platform::headless::HeadlessViewport;

    fn metrics(scroll_point: f64, viewport_size: f64) -> ContainerMetrics {
        ContainerMetrics { scroll_point, viewport_size, inner_offset: 0.0 }
    }

    #[test]
    fn instant_scene_past_its_start_is_complete() {
        let m = metrics(150.0, 500.0);
        let start = m.start_point(100.0, 0.0, 1.0);

        assert_eq!(start, -400.0);
        assert_eq!(m.progress_for(start, 0.0), 1.0);
    }

    #[test]
    fn centered_scene_maps_proportionally() {
        let m = metrics(830.0, 400.0);
        let start = m.start_point(1000.0, 50.0, 0.5);

        assert_eq!(start, 750.0);
        assert_eq!(m.progress_for(start, 200.0), 0.4);
    }

    #[test]
    fn instant_scene_at_its_start_is_not_triggered() {
        let m = metrics(300.0, 0.0);
        assert_eq!(m.progress_for(300.0, 0.0), 0.0);
    }

    #[test]
    fn progress_is_monotone_in_scroll_position() {
        let mut last = f64::NEG_INFINITY;
        for scroll in (700..=1000).step_by(25) {
            let p = metrics(scroll as f64, 400.0).progress_for(750.0, 200.0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn root_viewport_has_no_inner_offset() {
        let viewport = HeadlessViewport::new(800.0, 600.0);
        viewport.scroll_to(120.0);

        let m = ContainerMetrics::measure(&viewport, Axis::Vertical);

        assert_eq!(m, ContainerMetrics { scroll_point: 120.0, viewport_size: 600.0, inner_offset: 0.0 });
    }

    #[test]
    fn nested_container_reports_inner_offset() {
        let viewport = HeadlessViewport::new(400.0, 300.0).with_offset(Point::new(200.0, 0.0));
        viewport.scroll_to(50.0);

        let m = ContainerMetrics::measure(&viewport, Axis::Vertical);

        assert_eq!(m.inner_offset, 150.0);
    }

    #[test]
    fn horizontal_axis_reads_width_and_left() {
        let viewport = HeadlessViewport::new(400.0, 300.0).with_offset(Point::new(0.0, 100.0));
        viewport.scroll_to(40.0);

        let m = ContainerMetrics::measure(&viewport, Axis::Horizontal);

        assert_eq!(m.viewport_size, 400.0);
        assert_eq!(m.inner_offset, 60.0);
    }
}
