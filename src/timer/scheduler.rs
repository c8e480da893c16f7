//! Repeating callback scheduling
//!
//! The countdown never sleeps on its own. It asks a [`Scheduler`] for a
//! repeating source and keeps the returned [`ScheduleHandle`] so the source
//! can be released again.

use std::{collections::HashMap, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Callback invoked on every firing of a repeating source
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Identifies one registration made with a [`Scheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleHandle(u64);

impl ScheduleHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Periodic callback facility used by the countdown controller
pub trait Scheduler: Send {
    /// Fire `callback` every `interval`, first firing one interval from now
    fn schedule_repeating(&mut self, interval: Duration, callback: TickCallback) -> ScheduleHandle;

    /// Stop a registration. Unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: ScheduleHandle);
}

/// Scheduler backed by one tokio task per registration
#[derive(Debug, Default)]
pub struct TokioScheduler {
    next_id: u64,
    sources: HashMap<ScheduleHandle, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registrations that have not been cancelled
    pub fn active_sources(&self) -> usize {
        self.sources.len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&mut self, interval: Duration, mut callback: TickCallback) -> ScheduleHandle {
        self.next_id += 1;
        let handle = ScheduleHandle(self.next_id);

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            // Late firings are not made up for
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                callback();
            }
        });

        debug!("Scheduled repeating source {} every {:?}", handle.id(), interval);
        self.sources.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        if let Some(task) = self.sources.remove(&handle) {
            task.abort();
            debug!("Cancelled repeating source {}", handle.id());
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.sources.drain() {
            task.abort();
        }
    }
}
