//! Timer scheduler for the landing page.
//!
//! Provides `after()` and `every()` on top of an injected [`Clock`]. The
//! scheduler stores plain job values instead of callbacks; the owner pops
//! due jobs and dispatches them itself, which keeps every timer callback
//! on the caller's thread with full `&mut` access to its state.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Source of the current time, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    pub fn set(&self, to: Duration) {
        *self.now.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

/// Handle returned by `after()` / `every()`, used to cancel the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A scheduled job
#[derive(Debug)]
struct ScheduledTask<J> {
    /// When the task should run
    run_at: Duration,
    id: TimerId,
    /// Tie-breaker so equal deadlines fire in scheduling order
    seq: u64,
    job: J,
    /// If Some, this is a repeating task with the given interval
    repeat_interval: Option<Duration>,
}

impl<J> PartialEq for ScheduledTask<J> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<J> Eq for ScheduledTask<J> {}

impl<J> PartialOrd for ScheduledTask<J> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<J> Ord for ScheduledTask<J> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A job that came due.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<J> {
    pub id: TimerId,
    /// Deadline the job was scheduled for (not the time it was popped)
    pub at: Duration,
    pub job: J,
}

/// The scheduler that tracks timed jobs
pub struct Scheduler<J> {
    clock: Arc<dyn Clock>,
    tasks: BinaryHeap<ScheduledTask<J>>,
    next_id: u64,
    next_seq: u64,
}

impl<J: Clone> Scheduler<J> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            tasks: BinaryHeap::new(),
            next_id: 0,
            next_seq: 0,
        }
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Add a one-shot job
    pub fn after(&mut self, delay: Duration, job: J) -> TimerId {
        let run_at = self.now() + delay;
        self.push(run_at, job, None)
    }

    /// Add a repeating job. The first run is one interval from now.
    pub fn every(&mut self, interval: Duration, job: J) -> TimerId {
        let run_at = self.now() + interval;
        self.push(run_at, job, Some(interval))
    }

    /// Remove a timer. Cancelling an unknown or finished timer is a no-op.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Remove every timer
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Check if there are pending jobs
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Pop the earliest job if it is due.
    ///
    /// Repeating jobs are rescheduled one interval after their previous
    /// deadline before being returned, so a caller that fell behind gets
    /// every missed tick in order.
    pub fn pop_due(&mut self) -> Option<Fired<J>> {
        let now = self.now();
        if self.tasks.peek()?.run_at > now {
            return None;
        }
        let task = self.tasks.pop()?;
        if let Some(interval) = task.repeat_interval {
            let seq = self.bump_seq();
            self.tasks.push(ScheduledTask {
                run_at: task.run_at + interval,
                id: task.id,
                seq,
                job: task.job.clone(),
                repeat_interval: Some(interval),
            });
        }
        Some(Fired {
            id: task.id,
            at: task.run_at,
            job: task.job,
        })
    }

    /// Get duration until next job (for sleep)
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.now();
        self.tasks
            .peek()
            .map(|task| task.run_at.saturating_sub(now))
    }

    fn push(&mut self, run_at: Duration, job: J, repeat_interval: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.tasks.push(ScheduledTask {
            run_at,
            id,
            seq,
            job,
            repeat_interval,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
