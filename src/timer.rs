//! Ownership of pending timers.
//!
//! Every concern that schedules work (autoplay, resize debounce, scroll
//! throttle, toast dismissal) keeps its handle in a [`TimerSlot`]. The slot
//! holds at most one handle; replacing it drops the previous handle first.
//! `gloo-timers` cancels a `Timeout`/`Interval` when it is dropped, so a
//! replace is a cancel followed by a restart.

/// Zero or one pending timer handle.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> TimerSlot<H> {
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Cancel the pending timer (if any), then store the one built by `start`.
    pub fn replace_with(&mut self, start: impl FnOnce() -> H) {
        // The old handle must be gone before `start` runs.
        drop(self.handle.take());
        self.handle = Some(start());
    }

    /// Drop the pending handle. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts one-shot timers whose expiry is reported back to the owner.
pub trait DelayScheduler {
    type Handle;

    fn start_delay(&self, delay_ms: u32) -> Self::Handle;
}

/// Trailing debounce: a burst of triggers settles once, `delay_ms` after the
/// last trigger.
pub struct Debouncer<S: DelayScheduler> {
    scheduler: S,
    delay_ms: u32,
    slot: TimerSlot<S::Handle>,
    pending: bool,
}

impl<S: DelayScheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            slot: TimerSlot::new(),
            pending: false,
        }
    }

    /// Restart the wait; the previous pending timer is cancelled.
    pub fn trigger(&mut self) {
        let (scheduler, delay_ms) = (&self.scheduler, self.delay_ms);
        self.slot.replace_with(|| scheduler.start_delay(delay_ms));
        self.pending = true;
    }

    /// The timer fired. Returns whether a trigger was waiting on it.
    ///
    /// The expired handle stays in its slot: it may be the one running this
    /// call, and the next `trigger` drops it.
    pub fn settle(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Handle that tracks how many instances are alive.
    pub(crate) struct CountedHandle {
        live: Rc<Cell<usize>>,
    }

    impl CountedHandle {
        pub(crate) fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn replace_cancels_before_starting() {
        let live = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::new();

        slot.replace_with(|| CountedHandle::new(&live));
        assert_eq!(live.get(), 1);

        slot.replace_with(|| {
            // the previous handle is already gone at this point
            assert_eq!(live.get(), 0);
            CountedHandle::new(&live)
        });
        assert_eq!(live.get(), 1);
        assert!(slot.is_active());
    }

    struct CountingDelays {
        live: Rc<Cell<usize>>,
        started: Rc<Cell<usize>>,
    }

    impl DelayScheduler for CountingDelays {
        type Handle = CountedHandle;

        fn start_delay(&self, delay_ms: u32) -> CountedHandle {
            assert_eq!(delay_ms, 250);
            self.started.set(self.started.get() + 1);
            CountedHandle::new(&self.live)
        }
    }

    fn debouncer() -> (Debouncer<CountingDelays>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let live = Rc::new(Cell::new(0));
        let started = Rc::new(Cell::new(0));
        let scheduler = CountingDelays {
            live: live.clone(),
            started: started.clone(),
        };
        (Debouncer::new(scheduler, 250), live, started)
    }

    #[test]
    fn resize_burst_keeps_one_pending_timer() {
        let (mut debounce, live, started) = debouncer();
        for _ in 0..5 {
            debounce.trigger();
            assert_eq!(live.get(), 1);
        }
        assert_eq!(started.get(), 5);
        assert!(debounce.is_pending());

        assert!(debounce.settle());
        assert!(!debounce.is_pending());
        // a second expiry report for the same burst is ignored
        assert!(!debounce.settle());
    }

    #[test]
    fn settle_without_trigger_does_nothing() {
        let (mut debounce, live, started) = debouncer();
        assert!(!debounce.settle());
        assert_eq!((live.get(), started.get()), (0, 0));
    }

    #[test]
    fn trigger_after_settle_rearms() {
        let (mut debounce, live, started) = debouncer();
        debounce.trigger();
        assert!(debounce.settle());

        debounce.trigger();
        assert_eq!(live.get(), 1);
        assert_eq!(started.get(), 2);
        assert!(debounce.settle());
    }

    #[test]
    fn cancel_drops_pending_timer() {
        let live = Rc::new(Cell::new(0));
        let mut slot: TimerSlot<CountedHandle> = TimerSlot::default();
        assert!(!slot.cancel());

        slot.replace_with(|| CountedHandle::new(&live));
        assert!(slot.cancel());
        assert_eq!(live.get(), 0);
        assert!(!slot.is_active());
    }
}
