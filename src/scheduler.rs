//! Virtual-time task scheduler.
//!
//! Every delayed action on the page (notification reveal and dismissal,
//! simulated submissions, debounced scroll/resize work) is a task queued
//! here. The host advances time explicitly, so tests can fast-forward
//! through multi-second delays without sleeping.
//!
//! Tasks due at the same instant run in the order they were scheduled.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled task, used to cancel it or query whether it is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Deterministic scheduler over task payloads of type `T`.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), T>,
    due_by_seq: HashMap<u64, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            due_by_seq: HashMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queues `task` to run `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;

        let due = self.now.saturating_add(delay);
        self.queue.insert((due, seq), task);
        self.due_by_seq.insert(seq, due);

        TimerHandle(seq)
    }

    /// Cancels a pending task.
    ///
    /// Returns `false` if the task already ran or was cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.due_by_seq.remove(&handle.0) {
            Some(due) => self.queue.remove(&(due, handle.0)).is_some(),
            None => false,
        }
    }

    /// Returns true while the task behind `handle` has neither run nor been cancelled.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.due_by_seq.contains_key(&handle.0)
    }

    /// Time at which the next task falls due, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Removes the earliest task due at or before `until`.
    ///
    /// The clock moves to that task's due time, so work scheduled while
    /// handling it is measured from the moment it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let (&(due, seq), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }

        let task = self.queue.remove(&(due, seq))?;
        self.due_by_seq.remove(&seq);
        if due > self.now {
            self.now = due;
        }

        Some((TimerHandle(seq), task))
    }

    /// Moves the clock forward to `until` (never backwards).
    pub fn settle(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(scheduler: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some((_, task)) = scheduler.pop_due(until) {
            fired.push(task);
        }
        scheduler.settle(until);
        fired
    }

    #[test]
    fn test_tasks_fire_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), "late");
        scheduler.schedule(ms(100), "early");
        scheduler.schedule(ms(200), "middle");

        assert_eq!(drain(&mut scheduler, ms(1000)), vec!["early", "middle", "late"]);
        assert_eq!(scheduler.now(), ms(1000));
    }

    #[test]
    fn test_same_instant_keeps_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(50), "first");
        scheduler.schedule(ms(50), "second");

        assert_eq!(drain(&mut scheduler, ms(50)), vec!["first", "second"]);
    }

    #[test]
    fn test_tasks_beyond_window_stay_queued() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), "soon");
        scheduler.schedule(ms(5000), "later");

        assert_eq!(drain(&mut scheduler, ms(100)), vec!["soon"]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.next_due(), Some(ms(5000)));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(100), "cancelled");
        scheduler.schedule(ms(100), "kept");

        assert!(scheduler.is_pending(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.is_pending(handle));
        // Second cancel is a no-op
        assert!(!scheduler.cancel(handle));

        assert_eq!(drain(&mut scheduler, ms(200)), vec!["kept"]);
    }

    #[test]
    fn test_cancel_after_fire_returns_false() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(10), "done");
        drain(&mut scheduler, ms(10));

        assert!(!scheduler.cancel(handle));
    }

    #[test]
    fn test_delay_is_relative_to_fire_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), "outer");

        let (_, task) = scheduler.pop_due(ms(1000)).unwrap();
        assert_eq!(task, "outer");
        assert_eq!(scheduler.now(), ms(100));

        // Scheduled from inside a handler: due at 100 + 300
        scheduler.schedule(ms(300), "inner");
        assert_eq!(scheduler.next_due(), Some(ms(400)));
    }

    #[test]
    fn test_settle_never_goes_backwards() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.settle(ms(500));
        scheduler.settle(ms(200));
        assert_eq!(scheduler.now(), ms(500));
    }
}
