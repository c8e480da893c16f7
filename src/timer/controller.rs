//! Countdown controller state machine

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::scheduler::{ScheduleHandle, Scheduler};
use crate::state::{Phase, TimerState};

/// Interval between two ticks of a running countdown
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// User commands accepted by the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Toggle,
    Reset,
    Snapshot,
}

impl TimerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            TimerCommand::Start => "timer-start",
            TimerCommand::Pause => "timer-pause",
            TimerCommand::Toggle => "timer-toggle",
            TimerCommand::Reset => "timer-reset",
            TimerCommand::Snapshot => "timer-snapshot",
        }
    }
}

/// Messages consumed by the countdown task
#[derive(Debug)]
pub enum TimerMessage {
    /// A user command; the state after applying it is sent back on `reply`
    Command {
        command: TimerCommand,
        reply: oneshot::Sender<TimerState>,
    },
    /// Emitted by the repeating source registered for `generation`
    Tick { generation: u64 },
    Shutdown,
}

/// What a single tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running, nothing changed
    Ignored,
    /// One second was taken off the remaining time
    Counted { remaining_seconds: u64 },
    /// The exhausted phase ended and the timer stopped in the next phase
    PhaseComplete { finished: Phase, next: Phase },
}

/// Owns the [`TimerState`] and the repeating source that advances it.
///
/// The source registered on `start` does not touch the state itself. Its
/// callback only posts [`TimerMessage::Tick`] tagged with the generation of
/// the `start` that created it, and whoever owns the controller feeds those
/// messages back through [`CountdownController::handle_tick`].
///
/// Only a weak sender is kept, so the controller never holds its owner's
/// channel open on its own.
pub struct CountdownController<S: Scheduler> {
    state: TimerState,
    scheduler: S,
    source: Option<ScheduleHandle>,
    generation: u64,
    tick_tx: mpsc::WeakUnboundedSender<TimerMessage>,
}

impl<S: Scheduler> CountdownController<S> {
    pub fn new(scheduler: S, tick_tx: mpsc::WeakUnboundedSender<TimerMessage>) -> Self {
        Self {
            state: TimerState::new(),
            scheduler,
            source: None,
            generation: 0,
            tick_tx,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Generation of the most recent `start`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        self.state.is_running = true;
        self.generation += 1;

        let generation = self.generation;
        let tick_tx = self.tick_tx.clone();
        let handle = self.scheduler.schedule_repeating(
            TICK_INTERVAL,
            Box::new(move || {
                // Nothing to deliver to once every command sender is gone
                if let Some(tx) = tick_tx.upgrade() {
                    let _ = tx.send(TimerMessage::Tick { generation });
                }
            }),
        );
        self.source = Some(handle);

        info!(
            "Timer started: phase={:?}, remaining={}",
            self.state.phase,
            self.state.display()
        );
    }

    pub fn pause(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.state.is_running = false;
        self.release_source();
        info!("Timer paused at {}", self.state.display());
    }

    /// Start when idle, pause when running
    pub fn toggle(&mut self) {
        if self.state.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and restore the full duration of the current phase
    pub fn reset(&mut self) {
        self.state.is_running = false;
        self.release_source();
        self.state.remaining_seconds = self.state.phase.duration_seconds();
        info!("Timer reset: phase={:?}", self.state.phase);
    }

    /// Advance the countdown by one second.
    ///
    /// The phase switch happens on the tick after the one that reached zero,
    /// so `00:00` stays visible for one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Ignored;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            return TickOutcome::Counted {
                remaining_seconds: self.state.remaining_seconds,
            };
        }

        let finished = self.state.phase;
        let next = finished.next();
        self.state.is_running = false;
        self.release_source();
        self.state.phase = next;
        self.state.remaining_seconds = next.duration_seconds();

        info!("{:?} phase complete, switched to {:?}", finished, next);
        TickOutcome::PhaseComplete { finished, next }
    }

    /// Apply a tick posted by the source of `generation`
    pub fn handle_tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation || self.source.is_none() {
            debug!(
                "Dropping stale tick from generation {} (current {})",
                generation, self.generation
            );
            return TickOutcome::Ignored;
        }
        self.tick()
    }

    /// Apply a user command and return the resulting state
    pub fn apply(&mut self, command: TimerCommand) -> TimerState {
        match command {
            TimerCommand::Start => self.start(),
            TimerCommand::Pause => self.pause(),
            TimerCommand::Toggle => self.toggle(),
            TimerCommand::Reset => self.reset(),
            TimerCommand::Snapshot => {}
        }
        self.state
    }

    fn release_source(&mut self) {
        if let Some(handle) = self.source.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for CountdownController<S> {
    fn drop(&mut self) {
        self.release_source();
    }
}
