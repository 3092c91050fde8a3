//! Carousel state machine.
//!
//! Everything here is host independent: the Yew `Carousel` component feeds
//! viewport widths, measured slide widths and input events in, and reads the
//! index, track offset and dot indicators back out. Autoplay goes through the
//! [`AutoplayScheduler`] seam so the timer can be a `gloo-timers` interval in
//! the browser and a counting fake in tests.

use crate::config::SliderConfig;
use crate::timer::TimerSlot;
use log::debug;

impl SliderConfig {
    /// Number of slides visible side by side at `viewport_width`.
    pub fn slides_to_show(&self, viewport_width: f64) -> usize {
        if viewport_width >= self.breakpoint_px {
            2
        } else {
            1
        }
    }
}

/// [`SliderConfig::slides_to_show`] with the default breakpoint.
pub fn slides_to_show(viewport_width: f64) -> usize {
    SliderConfig::default().slides_to_show(viewport_width)
}

/// One dot per reachable scroll position.
pub fn dot_count(slide_count: usize, slides_to_show: usize) -> usize {
    slide_count.saturating_sub(slides_to_show).saturating_add(1).max(1)
}

/// Horizontal translation of the track for the slide at `index`.
pub fn track_offset(index: usize, slide_width: f64, gap: f64) -> f64 {
    -(index as f64 * (slide_width + gap))
}

/// Whether a freshly measured slide width differs enough from the one in use
/// to move the track. Sub-pixel layout jitter is ignored.
pub fn slide_width_changed(in_use: f64, measured: f64) -> bool {
    (measured - in_use).abs() > 0.5
}

/// Index, layout and indicator bookkeeping for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    slide_count: usize,
    slides_to_show: usize,
    current_index: usize,
}

impl SliderState {
    pub fn new(slide_count: usize, slides_to_show: usize) -> Self {
        Self {
            slide_count,
            slides_to_show,
            current_index: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Highest index that still fills the viewport; 0 when every slide fits.
    pub fn max_index(&self) -> usize {
        self.slide_count.saturating_sub(self.slides_to_show)
    }

    /// Clamp an arbitrary (possibly negative) request into `[0, max_index]`.
    pub fn clamp(&self, requested: isize) -> usize {
        if requested <= 0 {
            0
        } else {
            (requested as usize).min(self.max_index())
        }
    }

    pub fn set_index(&mut self, requested: isize) -> usize {
        self.current_index = self.clamp(requested);
        self.current_index
    }

    /// Index after a forward step, wrapping to the first position.
    pub fn next_index(&self) -> usize {
        if self.current_index < self.max_index() {
            self.current_index + 1
        } else {
            0
        }
    }

    /// Index after a backward step, wrapping to the last position.
    pub fn prev_index(&self) -> usize {
        if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.max_index()
        }
    }

    /// Change the visible slide count and re-clamp. Returns whether anything moved.
    pub fn set_slides_to_show(&mut self, slides_to_show: usize) -> bool {
        let before = *self;
        self.slides_to_show = slides_to_show;
        self.current_index = self.current_index.min(self.max_index());
        before != *self
    }

    pub fn dot_count(&self) -> usize {
        dot_count(self.slide_count, self.slides_to_show)
    }

    pub fn dots(&self) -> Vec<Dot> {
        (0..self.dot_count())
            .map(|index| Dot {
                index,
                active: index == self.current_index,
                label: format!("Go to slide {}", index + 1),
            })
            .collect()
    }
}

/// Rendering data for a single dot indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// Navigation request produced by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderCommand {
    Next,
    Prev,
    GoTo(isize),
}

/// Map a `KeyboardEvent.key` value to a navigation request.
pub fn key_command(key: &str) -> Option<SliderCommand> {
    match key {
        "ArrowLeft" => Some(SliderCommand::Prev),
        "ArrowRight" => Some(SliderCommand::Next),
        _ => None,
    }
}

/// Classify a horizontal touch travel (`end_x - start_x`).
///
/// A leftward swipe pulls the next slide in, a rightward one the previous.
/// Travel of exactly `threshold` pixels is ignored.
pub fn swipe_command(delta_x: f64, threshold: f64) -> Option<SliderCommand> {
    if delta_x < -threshold {
        Some(SliderCommand::Next)
    } else if delta_x > threshold {
        Some(SliderCommand::Prev)
    } else {
        None
    }
}

/// Touch start position awaiting its matching touch end.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    start_x: Option<f64>,
}

impl SwipeGesture {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Close the gesture. A touch end without a start yields nothing.
    pub fn finish(&mut self, x: f64, threshold: f64) -> Option<SliderCommand> {
        let start = self.start_x.take()?;
        swipe_command(x - start, threshold)
    }
}

/// Source of the repeating autoplay timer.
///
/// Dropping the returned handle must stop the timer.
pub trait AutoplayScheduler {
    type Handle;

    fn start_autoplay(&self, period_ms: u32) -> Self::Handle;
}

/// A live carousel: state plus the timer it owns.
pub struct Slider<S: AutoplayScheduler> {
    config: SliderConfig,
    state: SliderState,
    scheduler: S,
    autoplay: TimerSlot<S::Handle>,
    swipe: SwipeGesture,
}

impl<S: AutoplayScheduler> Slider<S> {
    /// Set up a slider for `slide_count` slides and start autoplay.
    ///
    /// Returns `None` when there is nothing to slide; the widget then stays
    /// inert on the page.
    pub fn init(
        slide_count: usize,
        viewport_width: f64,
        config: SliderConfig,
        scheduler: S,
    ) -> Option<Self> {
        if slide_count == 0 {
            debug!("slider has no slides, staying inactive");
            return None;
        }
        let mut slider = Self {
            state: SliderState::new(slide_count, config.slides_to_show(viewport_width)),
            config,
            scheduler,
            autoplay: TimerSlot::new(),
            swipe: SwipeGesture::default(),
        };
        slider.reset_autoplay();
        debug!(
            "slider ready: {} slides, {} visible",
            slide_count,
            slider.state.slides_to_show()
        );
        Some(slider)
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn dots(&self) -> Vec<Dot> {
        self.state.dots()
    }

    pub fn offset_px(&self, slide_width: f64) -> f64 {
        track_offset(self.state.current_index(), slide_width, self.config.gap_px)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_active()
    }

    /// Jump to `requested` (clamped) and give the user a full autoplay period.
    pub fn go_to(&mut self, requested: isize) -> usize {
        let index = self.state.set_index(requested);
        self.reset_autoplay();
        index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.state.next_index() as isize)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.state.prev_index() as isize)
    }

    pub fn dispatch(&mut self, command: SliderCommand) -> usize {
        match command {
            SliderCommand::Next => self.next(),
            SliderCommand::Prev => self.prev(),
            SliderCommand::GoTo(index) => self.go_to(index),
        }
    }

    /// Advance on an autoplay tick.
    ///
    /// The interval that fired keeps running, so it is not replaced here.
    pub fn autoplay_tick(&mut self) -> usize {
        let next = self.state.next_index();
        self.state.set_index(next as isize)
    }

    /// Re-layout for a new viewport width. Returns whether the view changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        let shown = self.config.slides_to_show(viewport_width);
        let changed = self.state.set_slides_to_show(shown);
        if changed {
            debug!(
                "slider relayout: {} visible, index {}",
                shown,
                self.state.current_index()
            );
        }
        changed
    }

    pub fn on_swipe(&mut self, delta_x: f64) -> Option<usize> {
        let command = swipe_command(delta_x, self.config.swipe_threshold_px)?;
        Some(self.dispatch(command))
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    pub fn touch_end(&mut self, x: f64) -> Option<usize> {
        let command = self.swipe.finish(x, self.config.swipe_threshold_px)?;
        Some(self.dispatch(command))
    }

    pub fn on_key(&mut self, key: &str) -> Option<usize> {
        key_command(key).map(|command| self.dispatch(command))
    }

    /// Pointer entered the widget.
    pub fn pause(&mut self) {
        self.autoplay.cancel();
    }

    /// Pointer left the widget.
    pub fn resume(&mut self) {
        self.reset_autoplay();
    }

    fn reset_autoplay(&mut self) {
        let period = self.config.autoplay_period_ms;
        let scheduler = &self.scheduler;
        self.autoplay
            .replace_with(|| scheduler.start_autoplay(period));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::tests::CountedHandle;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeScheduler {
        live: Rc<Cell<usize>>,
        started: Rc<Cell<usize>>,
    }

    impl AutoplayScheduler for FakeScheduler {
        type Handle = CountedHandle;

        fn start_autoplay(&self, period_ms: u32) -> CountedHandle {
            assert_eq!(period_ms, 8_000);
            self.started.set(self.started.get() + 1);
            CountedHandle::new(&self.live)
        }
    }

    fn slider(slide_count: usize, viewport_width: f64) -> (Slider<FakeScheduler>, Rc<Cell<usize>>) {
        let scheduler = FakeScheduler::default();
        let live = scheduler.live.clone();
        let slider = Slider::init(slide_count, viewport_width, SliderConfig::default(), scheduler)
            .expect("slides present");
        (slider, live)
    }

    #[test]
    fn remeasure_ignores_subpixel_jitter() {
        assert!(slide_width_changed(0.0, 320.0));
        assert!(!slide_width_changed(320.0, 320.4));
        assert!(slide_width_changed(320.0, 300.0));
        assert!(!slide_width_changed(0.0, 0.0));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(slides_to_show(767.9), 1);
        assert_eq!(slides_to_show(768.0), 2);
        assert_eq!(slides_to_show(0.0), 1);
        assert_eq!(slides_to_show(1920.0), 2);
    }

    #[test]
    fn no_slides_means_inactive_widget() {
        let scheduler = FakeScheduler::default();
        let live = scheduler.live.clone();
        assert!(Slider::init(0, 1024.0, SliderConfig::default(), scheduler).is_none());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn init_starts_at_zero_with_autoplay() {
        let (slider, live) = slider(5, 1024.0);
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.state().slides_to_show(), 2);
        assert!(slider.is_autoplaying());
        assert_eq!(live.get(), 1);
        assert_eq!(slider.offset_px(300.0), 0.0);
    }

    #[test]
    fn wraps_in_both_directions() {
        let (mut slider, _live) = slider(5, 1024.0);
        assert_eq!(slider.go_to(3), 3);
        assert_eq!(slider.next(), 0);
        assert_eq!(slider.prev(), 3);
        assert_eq!(slider.prev(), 2);
    }

    #[test]
    fn five_slides_two_shown_has_four_dots() {
        let (mut slider, _live) = slider(5, 1024.0);
        slider.go_to(2);
        let dots = slider.dots();
        assert_eq!(dots.len(), 4);
        let active: Vec<usize> = dots.iter().filter(|d| d.active).map(|d| d.index).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(dots[0].label, "Go to slide 1");
        assert_eq!(dots[3].label, "Go to slide 4");
    }

    #[test]
    fn fewer_slides_than_visible_pins_index() {
        let state = SliderState::new(1, 2);
        assert_eq!(state.max_index(), 0);
        assert_eq!(state.dot_count(), 1);
        assert_eq!(state.next_index(), 0);
        assert_eq!(state.prev_index(), 0);
        assert_eq!(state.clamp(7), 0);
    }

    #[test]
    fn offset_uses_measured_width_and_gap() {
        let (mut slider, _live) = slider(5, 500.0);
        slider.go_to(2);
        assert_eq!(slider.offset_px(300.0), -664.0);
        assert_eq!(slider.offset_px(0.0), -64.0);
    }

    #[test]
    fn swipe_threshold_is_strict() {
        let (mut slider, _live) = slider(5, 1024.0);
        assert_eq!(slider.on_swipe(-49.0), None);
        assert_eq!(slider.on_swipe(49.0), None);
        assert_eq!(slider.on_swipe(-50.0), None);
        assert_eq!(slider.current_index(), 0);

        assert_eq!(slider.on_swipe(-51.0), Some(1));
        assert_eq!(slider.on_swipe(51.0), Some(0));
    }

    #[test]
    fn touch_gesture_needs_a_start() {
        let (mut slider, _live) = slider(5, 1024.0);
        assert_eq!(slider.touch_end(10.0), None);

        slider.touch_start(300.0);
        assert_eq!(slider.touch_end(200.0), Some(1));
        // the gesture was consumed
        assert_eq!(slider.touch_end(0.0), None);

        slider.touch_start(100.0);
        assert_eq!(slider.touch_end(130.0), None);
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn arrow_keys_navigate_other_keys_do_not() {
        let (mut slider, _live) = slider(5, 1024.0);
        assert_eq!(slider.on_key("ArrowRight"), Some(1));
        assert_eq!(slider.on_key("ArrowLeft"), Some(0));
        assert_eq!(slider.on_key("ArrowLeft"), Some(3));
        assert_eq!(slider.on_key("Enter"), None);
        assert_eq!(slider.on_key("arrowleft"), None);
        assert_eq!(slider.current_index(), 3);
    }

    #[test]
    fn navigation_restarts_the_single_autoplay_timer() {
        let (mut slider, live) = slider(5, 1024.0);
        let started = slider.scheduler.started.clone();
        assert_eq!(started.get(), 1);

        slider.go_to(1);
        slider.next();
        slider.go_to(-4);
        slider.on_key("ArrowRight");
        assert_eq!(live.get(), 1);
        assert_eq!(started.get(), 5);
    }

    #[test]
    fn autoplay_tick_advances_without_restarting() {
        let (mut slider, live) = slider(3, 1024.0);
        let started = slider.scheduler.started.clone();
        assert_eq!(slider.autoplay_tick(), 1);
        assert_eq!(slider.autoplay_tick(), 0);
        assert_eq!(started.get(), 1);
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let (mut slider, live) = slider(5, 1024.0);
        slider.pause();
        assert!(!slider.is_autoplaying());
        assert_eq!(live.get(), 0);

        slider.pause();
        assert_eq!(live.get(), 0);

        slider.resume();
        assert!(slider.is_autoplaying());
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn going_to_slide_while_paused_starts_one_timer() {
        let (mut slider, live) = slider(5, 1024.0);
        slider.pause();
        slider.go_to(2);
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn shrinking_viewport_keeps_index_valid() {
        let (mut slider, _live) = slider(5, 1024.0);
        slider.go_to(3);

        assert!(slider.on_resize(400.0));
        assert_eq!(slider.state().slides_to_show(), 1);
        assert_eq!(slider.state().max_index(), 4);
        assert_eq!(slider.current_index(), 3);
        assert_eq!(slider.dots().len(), 5);
    }

    #[test]
    fn growing_viewport_reclamps_index() {
        let (mut slider, _live) = slider(5, 400.0);
        slider.go_to(4);

        assert!(slider.on_resize(1024.0));
        assert_eq!(slider.current_index(), 3);
        assert_eq!(slider.dots().iter().filter(|d| d.active).count(), 1);
        assert!(!slider.on_resize(1280.0));
    }

    #[test]
    fn resize_leaves_autoplay_alone() {
        let (mut slider, live) = slider(5, 1024.0);
        let started = slider.scheduler.started.clone();
        slider.on_resize(320.0);
        assert_eq!(started.get(), 1);
        assert_eq!(live.get(), 1);
    }

    proptest! {
        #[test]
        fn slides_to_show_follows_breakpoint(width in 0.0f64..4000.0) {
            let expected = if width >= 768.0 { 2 } else { 1 };
            prop_assert_eq!(slides_to_show(width), expected);
        }

        #[test]
        fn go_to_clamps_every_request(
            slide_count in 1usize..12,
            width in 200.0f64..2000.0,
            requested in -50isize..50,
        ) {
            let (mut slider, live) = slider(slide_count, width);
            let max = slide_count.saturating_sub(slides_to_show(width)) as isize;
            let index = slider.go_to(requested);
            prop_assert_eq!(index as isize, requested.clamp(0, max));
            prop_assert_eq!(live.get(), 1);

            let before = *slider.state();
            slider.go_to(index as isize);
            prop_assert_eq!(*slider.state(), before);
        }

        #[test]
        fn exactly_one_dot_is_active(
            slide_count in 1usize..12,
            width in 200.0f64..2000.0,
            steps in proptest::collection::vec(0u8..3, 0..20),
        ) {
            let (mut slider, _live) = slider(slide_count, width);
            for step in steps {
                match step {
                    0 => { slider.next(); }
                    1 => { slider.prev(); }
                    _ => { slider.on_resize(2200.0 - width); }
                }
                let dots = slider.dots();
                prop_assert_eq!(dots.len(), dot_count(slide_count, slider.state().slides_to_show()));
                let active: Vec<usize> = dots.iter().filter(|d| d.active).map(|d| d.index).collect();
                prop_assert_eq!(active, vec![slider.current_index()]);
            }
        }
    }
}
