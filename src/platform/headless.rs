//=========================================================================
// Headless Host
//=========================================================================
//
// In-memory implementation of the platform traits.
//
// Every handle is a cheap clone over shared state, so a caller can give
// one clone to the controller or scene and keep another to drive and
// inspect it:
//
//   HeadlessViewport  → ScrollContainer (scroll_to / resize notify)
//   HeadlessElement   → Positioned + PinElement (records placements)
//   HeadlessSpacer    → Spacer (lives inside its element's state)
//   RecordingTween    → Tween (records every call)
//
// Nothing is laid out: offsets are whatever the caller sets.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use super::{
    ComputedStyle, PinElement, Placement, Positioned, ScrollContainer, ScrollNotifier, Spacer,
    SpacerStyle, Tween, TweenKind,
};
use crate::core::{Axis, Point, Size};

//=== HeadlessViewport ====================================================

#[derive(Debug)]
struct ViewportState {
    scroll: f64,
    size: Size,
    offset: Point,
    notifiers: Vec<ScrollNotifier>,
}

/// Scrollable viewport with a single scroll position shared by both axes.
#[derive(Debug, Clone)]
pub struct HeadlessViewport {
    state: Rc<RefCell<ViewportState>>,
}

impl HeadlessViewport {
    /// Root viewport (offset at the origin) of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewportState {
                scroll: 0.0,
                size: Size::new(width, height),
                offset: Point::ORIGIN,
                notifiers: Vec::new(),
            })),
        }
    }

    /// Places the viewport on the page, making it a nested container.
    pub fn with_offset(self, offset: Point) -> Self {
        self.state.borrow_mut().offset = offset;
        self
    }

    /// Scrolls and notifies subscribers.
    pub fn scroll_to(&self, position: f64) {
        self.scroll_silently(position);
        for notifier in &self.state.borrow().notifiers {
            notifier.scrolled();
        }
    }

    /// Scrolls without notifying anyone.
    pub fn scroll_silently(&self, position: f64) {
        self.state.borrow_mut().scroll = position;
    }

    /// Resizes and notifies subscribers.
    pub fn resize(&self, width: f64, height: f64) {
        self.state.borrow_mut().size = Size::new(width, height);
        for notifier in &self.state.borrow().notifiers {
            notifier.resized();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().notifiers.len()
    }
}

impl ScrollContainer for HeadlessViewport {
    fn scroll_position(&self, _axis: Axis) -> f64 {
        self.state.borrow().scroll
    }

    fn viewport_size(&self, axis: Axis) -> f64 {
        self.state.borrow().size.along(axis)
    }

    fn offset(&self) -> Point {
        self.state.borrow().offset
    }

    fn subscribe(&self, notifier: ScrollNotifier) {
        self.state.borrow_mut().notifiers.push(notifier);
    }
}

//=== HeadlessElement =====================================================

#[derive(Debug)]
struct SpacerState {
    style: SpacerStyle,
    size: Size,
}

#[derive(Debug)]
struct ElementState {
    offset: Point,
    computed: ComputedStyle,
    inline_style: Option<String>,
    attached: bool,
    placement: Option<Placement>,
    spacer: Option<SpacerState>,
}

/// Element with a fixed page offset and computed style.
#[derive(Debug, Clone)]
pub struct HeadlessElement {
    state: Rc<RefCell<ElementState>>,
}

impl HeadlessElement {
    pub fn new(offset: Point, computed: ComputedStyle) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                offset,
                computed,
                inline_style: None,
                attached: true,
                placement: None,
                spacer: None,
            })),
        }
    }

    pub fn with_inline_style(self, style: impl Into<String>) -> Self {
        self.state.borrow_mut().inline_style = Some(style.into());
        self
    }

    pub fn move_to(&self, offset: Point) {
        self.state.borrow_mut().offset = offset;
    }

    /// Marks the element as removed from the document.
    pub fn detach_from_document(&self) {
        self.state.borrow_mut().attached = false;
    }

    //--- Inspection -------------------------------------------------------

    /// Last placement written, cleared when the inline style is replaced.
    pub fn placement(&self) -> Option<Placement> {
        self.state.borrow().placement
    }

    pub fn inline_style_text(&self) -> Option<String> {
        self.state.borrow().inline_style.clone()
    }

    pub fn is_wrapped(&self) -> bool {
        self.state.borrow().spacer.is_some()
    }

    pub fn spacer_style(&self) -> Option<SpacerStyle> {
        self.state.borrow().spacer.as_ref().map(|spacer| spacer.style.clone())
    }

    pub fn spacer_size(&self) -> Option<Size> {
        self.state.borrow().spacer.as_ref().map(|spacer| spacer.size)
    }
}

impl Positioned for HeadlessElement {
    fn offset(&self) -> Point {
        self.state.borrow().offset
    }
}

impl PinElement for HeadlessElement {
    fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }

    fn computed_style(&self) -> ComputedStyle {
        self.state.borrow().computed.clone()
    }

    fn inline_style(&self) -> Option<String> {
        self.state.borrow().inline_style.clone()
    }

    fn set_inline_style(&mut self, style: &str) {
        let mut state = self.state.borrow_mut();
        state.inline_style = (!style.is_empty()).then(|| style.to_string());
        state.placement = None;
    }

    fn set_placement(&mut self, placement: Placement) {
        self.state.borrow_mut().placement = Some(placement);
    }

    fn wrap(&mut self, style: SpacerStyle) -> Box<dyn Spacer> {
        let size = Size::new(style.width, style.height);
        self.state.borrow_mut().spacer = Some(SpacerState { style, size });
        Box::new(HeadlessSpacer { element: Rc::clone(&self.state) })
    }
}

//=== HeadlessSpacer ======================================================

/// Spacer handle; it occupies the pinned element's original page offset.
#[derive(Debug)]
pub struct HeadlessSpacer {
    element: Rc<RefCell<ElementState>>,
}

impl Spacer for HeadlessSpacer {
    fn offset(&self) -> Point {
        self.element.borrow().offset
    }

    fn set_extent(&mut self, axis: Axis, extent: f64) {
        if let Some(spacer) = self.element.borrow_mut().spacer.as_mut() {
            match axis {
                Axis::Vertical => spacer.size.height = extent,
                Axis::Horizontal => spacer.size.width = extent,
            }
        }
    }

    fn remove(self: Box<Self>) {
        self.element.borrow_mut().spacer = None;
    }
}

//=== RecordingTween ======================================================

/// A call received by a [`RecordingTween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenCall {
    Play,
    Reverse,
    Pause,
    Seek(f64),
    SeekTotal(f64),
    TweenTo(f64),
    Kill,
}

#[derive(Debug)]
struct TweenState {
    kind: TweenKind,
    infinite: bool,
    paused: bool,
    calls: Vec<TweenCall>,
}

/// Tween that records calls instead of animating.
#[derive(Debug, Clone)]
pub struct RecordingTween {
    state: Rc<RefCell<TweenState>>,
}

impl RecordingTween {
    pub fn new(kind: TweenKind) -> Self {
        Self {
            state: Rc::new(RefCell::new(TweenState {
                kind,
                infinite: false,
                paused: false,
                calls: Vec::new(),
            })),
        }
    }

    /// Makes the tween report an infinite repeat count.
    pub fn looping(self) -> Self {
        self.state.borrow_mut().infinite = true;
        self
    }

    pub fn calls(&self) -> Vec<TweenCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&self, call: TweenCall, paused: Option<bool>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if let Some(paused) = paused {
            state.paused = paused;
        }
    }
}

impl Tween for RecordingTween {
    fn kind(&self) -> TweenKind {
        self.state.borrow().kind
    }

    fn play(&mut self) {
        self.record(TweenCall::Play, Some(false));
    }

    fn reverse(&mut self) {
        self.record(TweenCall::Reverse, Some(false));
    }

    fn pause(&mut self) {
        self.record(TweenCall::Pause, Some(true));
    }

    fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn repeats_infinitely(&self) -> bool {
        self.state.borrow().infinite
    }

    fn seek(&mut self, progress: f64) {
        self.record(TweenCall::Seek(progress), Some(true));
    }

    fn seek_total(&mut self, progress: f64) {
        self.record(TweenCall::SeekTotal(progress), None);
    }

    fn tween_to(&mut self, progress: f64) {
        self.record(TweenCall::TweenTo(progress), Some(false));
    }

    fn kill(&mut self) {
        self.record(TweenCall::Kill, Some(true));
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{EventCollector, PositionMode};

    #[test]
    fn viewport_notifies_every_subscriber() {
        let viewport = HeadlessViewport::new(800.0, 600.0);
        let mut first = EventCollector::new();
        let mut second = EventCollector::new();
        viewport.subscribe(first.notifier());
        viewport.subscribe(second.notifier());

        viewport.scroll_to(10.0);

        assert!(first.collect_frame());
        assert!(second.collect_frame());
        assert_eq!(viewport.scroll_position(Axis::Vertical), 10.0);
    }

    #[test]
    fn silent_scroll_does_not_notify() {
        let viewport = HeadlessViewport::new(800.0, 600.0);
        let mut collector = EventCollector::new();
        viewport.subscribe(collector.notifier());

        viewport.scroll_silently(10.0);

        assert!(!collector.collect_frame());
    }

    #[test]
    fn wrap_and_unwrap_spacer() {
        let mut element = HeadlessElement::new(Point::new(300.0, 20.0), ComputedStyle::default());
        let style = SpacerStyle {
            class: "spacer".into(),
            position: PositionMode::Relative,
            insets: Default::default(),
            display: None,
            width: 40.0,
            height: 30.0,
        };

        let mut spacer = element.wrap(style);
        spacer.set_extent(Axis::Vertical, 130.0);

        assert_eq!(spacer.offset(), Point::new(300.0, 20.0));
        assert_eq!(element.spacer_size(), Some(Size::new(40.0, 130.0)));

        spacer.remove();
        assert!(!element.is_wrapped());
    }

    #[test]
    fn clearing_inline_style_drops_placement() {
        let mut element = HeadlessElement::new(Point::ORIGIN, ComputedStyle::default());
        element.set_placement(Placement::fixed(1.0, 2.0));

        element.set_inline_style("");

        assert_eq!(element.placement(), None);
        assert_eq!(element.inline_style_text(), None);
    }

    #[test]
    fn recording_tween_tracks_pause_state() {
        let mut tween = RecordingTween::new(TweenKind::Basic).looping();
        tween.play();
        assert!(!tween.is_paused());
        tween.pause();
        assert!(tween.is_paused());
        assert!(tween.repeats_infinitely());
        assert_eq!(tween.calls(), vec![TweenCall::Play, TweenCall::Pause]);
    }
}
