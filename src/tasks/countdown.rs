//! Countdown background task
//!
//! The task owns the [`CountdownController`] outright. User commands and
//! scheduler ticks arrive on the same channel, so they are applied one at a
//! time in arrival order and the controller never needs a lock.

use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, info, trace, warn};

use crate::{
    state::TimerState,
    timer::{CountdownController, Scheduler, TickOutcome, TimerCommand, TimerMessage},
};

#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("countdown task is not running")]
    Stopped,
}

/// Sender side of a running countdown task
#[derive(Debug, Clone)]
pub struct CountdownHandle {
    commands: mpsc::UnboundedSender<TimerMessage>,
    updates: watch::Receiver<TimerState>,
}

impl CountdownHandle {
    /// Apply `command` and wait for the resulting state
    pub async fn send(&self, command: TimerCommand) -> Result<TimerState, CountdownError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(TimerMessage::Command { command, reply })
            .map_err(|_| CountdownError::Stopped)?;
        response.await.map_err(|_| CountdownError::Stopped)
    }

    /// Last state published by the task
    pub fn snapshot(&self) -> TimerState {
        *self.updates.borrow()
    }

    /// Receiver that observes every published state
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.updates.clone()
    }

    /// Ask the task to stop; it releases its tick source on the way out
    pub fn shutdown(&self) {
        if self.commands.send(TimerMessage::Shutdown).is_err() {
            debug!("Countdown task already stopped");
        }
    }
}

/// Spawn the countdown task around a fresh controller using `scheduler`
pub fn spawn_countdown<S>(scheduler: S) -> (CountdownHandle, JoinHandle<()>)
where
    S: Scheduler + 'static,
{
    let (commands, rx) = mpsc::unbounded_channel();
    let (update_tx, updates) = watch::channel(TimerState::new());
    let controller = CountdownController::new(scheduler, commands.downgrade());

    let task = tokio::spawn(countdown_task(controller, rx, update_tx));
    (CountdownHandle { commands, updates }, task)
}

/// Message loop applying commands and ticks to `controller`
pub async fn countdown_task<S: Scheduler>(
    mut controller: CountdownController<S>,
    mut rx: mpsc::UnboundedReceiver<TimerMessage>,
    update_tx: watch::Sender<TimerState>,
) {
    info!("Starting countdown task");

    while let Some(message) = rx.recv().await {
        match message {
            TimerMessage::Command { command, reply } => {
                debug!("Countdown command: {}", command.name());
                let state = controller.apply(command);
                if reply.send(state).is_err() {
                    debug!("Caller went away before {} completed", command.name());
                }
            }
            TimerMessage::Tick { generation } => match controller.handle_tick(generation) {
                TickOutcome::Ignored => continue,
                TickOutcome::Counted { remaining_seconds } => {
                    trace!("Tick: {}s remaining", remaining_seconds);
                }
                TickOutcome::PhaseComplete { finished, next } => {
                    info!("{} finished, {} ready", finished.label(), next.label());
                }
            },
            TimerMessage::Shutdown => {
                info!("Countdown task shutting down");
                break;
            }
        }

        if update_tx.send(controller.state()).is_err() {
            warn!("No timer state watchers left");
        }
    }

    // controller drops here and cancels its tick source
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{state::Phase, timer::TokioScheduler};

    #[tokio::test(start_paused = true)]
    async fn running_timer_counts_real_seconds() {
        let (handle, _task) = spawn_countdown(TokioScheduler::new());
        let state = handle.send(TimerCommand::Start).await.expect("start");
        assert!(state.is_running);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(handle.snapshot().remaining_seconds, 1497);

        let paused = handle.send(TimerCommand::Pause).await.expect("pause");
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(handle.snapshot(), paused);
        assert_eq!(paused.remaining_seconds, 1497);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_toggle_does_not_double_tick() {
        let (handle, _task) = spawn_countdown(TokioScheduler::new());
        for _ in 0..5 {
            handle.send(TimerCommand::Start).await.expect("start");
            handle.send(TimerCommand::Pause).await.expect("pause");
        }
        handle.send(TimerCommand::Start).await.expect("start");

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(handle.snapshot().remaining_seconds, 1498);
    }

    #[tokio::test(start_paused = true)]
    async fn focus_phase_runs_out_into_break() {
        let (handle, _task) = spawn_countdown(TokioScheduler::new());
        handle.send(TimerCommand::Start).await.expect("start");

        tokio::time::sleep(Duration::from_millis(1500 * 1000 + 500)).await;
        let at_zero = handle.snapshot();
        assert_eq!(at_zero.remaining_seconds, 0);
        assert!(at_zero.is_running);

        tokio::time::sleep(Duration::from_secs(1)).await;
        let after = handle.snapshot();
        assert_eq!(after, TimerState { phase: Phase::Break, remaining_seconds: 300, is_running: false });

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(handle.snapshot(), after);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_every_handle_ends_the_task() {
        let (handle, task) = spawn_countdown(TokioScheduler::new());
        handle.send(TimerCommand::Start).await.expect("start");
        tokio::time::sleep(Duration::from_millis(1500)).await;

        let mut updates = handle.subscribe();
        drop(handle);

        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("task should end")
            .expect("join");

        let last = *updates.borrow_and_update();
        assert_eq!(last.remaining_seconds, 1499);
        assert!(updates.changed().await.is_err());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(*updates.borrow(), last);
    }

    #[tokio::test]
    async fn shutdown_stops_the_task() {
        let (handle, task) = spawn_countdown(TokioScheduler::new());
        handle.send(TimerCommand::Start).await.expect("start");
        handle.shutdown();
        task.await.expect("join");

        assert!(matches!(
            handle.send(TimerCommand::Snapshot).await,
            Err(CountdownError::Stopped)
        ));
    }
}
