//! Trailing-edge debounce over the [`Scheduler`].
//!
//! Used to coalesce bursts of scroll and resize events: each trigger
//! supersedes the previous pending timer, so the work runs once, `window`
//! after the last event of the burst.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerHandle};

/// Debounce state with an explicit pending timer.
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    pending: Option<TimerHandle>,
}

impl Debounce {
    /// Creates a debounce with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Cancels any pending call and schedules `task` one window from now.
    pub fn trigger<T>(&mut self, scheduler: &mut Scheduler<T>, task: T) -> TimerHandle {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let handle = scheduler.schedule(self.window, task);
        self.pending = Some(handle);
        handle
    }

    /// Marks the trailing call behind `handle` as run.
    ///
    /// Returns false for a stale handle (one superseded by a later trigger).
    pub fn complete(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_single_call() {
        let mut scheduler = Scheduler::new();
        let mut debounce = Debounce::new(Duration::from_millis(16));

        for step in 0..10u64 {
            debounce.trigger(&mut scheduler, step);
            scheduler.settle(Duration::from_millis(step * 5));
        }
        assert_eq!(scheduler.pending(), 1);

        let (handle, task) = scheduler.pop_due(Duration::from_secs(1)).unwrap();
        assert_eq!(task, 9);
        assert!(debounce.complete(handle));
        // Already consumed
        assert!(!debounce.complete(handle));
    }

    #[test]
    fn test_stale_handle_is_rejected() {
        let mut scheduler = Scheduler::new();
        let mut debounce = Debounce::new(Duration::from_millis(250));

        let first = debounce.trigger(&mut scheduler, "first");
        let second = debounce.trigger(&mut scheduler, "second");

        assert!(!scheduler.is_pending(first));
        assert!(!debounce.complete(first));
        assert!(debounce.complete(second));
    }
}
