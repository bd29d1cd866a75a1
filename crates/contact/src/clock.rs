use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::runtime::Handle;

/// Work handed to a [`Scheduler`], run once when its delay has elapsed.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// One-shot timers. Production code runs them on tokio, tests on a virtual
/// clock that only moves when told to.
pub trait Scheduler: Send + Sync + 'static {
    fn schedule(&self, delay: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task)
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Debug)]
pub struct TokioScheduler(Handle);

impl TokioScheduler {
    /// Panics when called outside of a tokio runtime.
    pub fn current() -> Self {
        Self(Handle::current())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.0.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

/// Deterministic clock for tests: timers fire only inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler(Arc<Mutex<VirtualClock>>);

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        lock(&self.0).now
    }

    pub fn pending(&self) -> usize {
        lock(&self.0).pending.len()
    }

    /// Moves the clock forward, firing due timers in deadline order. Timers
    /// scheduled by a firing task are honored if they fall inside the window.
    /// Returns how many timers fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = lock(&self.0).now + by;
        let mut fired = 0;

        loop {
            let task = {
                let mut clock = lock(&self.0);
                let next = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);

                let Some(i) = next else {
                    clock.now = target;
                    break;
                };

                let pending = clock.pending.swap_remove(i);
                clock.now = pending.due;
                pending.task
            };

            task();
            fired += 1;
        }

        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut clock = lock(&self.0);
        clock.seq += 1;
        let pending = Pending {
            due: clock.now + delay,
            seq: clock.seq,
            task,
        };
        clock.pending.push(pending);
    }
}
