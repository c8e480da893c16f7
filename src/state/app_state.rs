//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use super::{Checklist, ChecklistError, ChecklistItem, ThemeState, TimerState};
use crate::{
    tasks::{CountdownError, CountdownHandle},
    timer::TimerCommand,
};

/// Failures surfaced by [`AppState`] operations
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Checklist(#[from] ChecklistError),
    #[error(transparent)]
    Countdown(#[from] CountdownError),
    #[error("failed to lock {0} state")]
    Poisoned(&'static str),
}

/// Main application state shared by every request handler
#[derive(Debug)]
pub struct AppState {
    /// Checklist widget contents
    pub checklist: Arc<Mutex<Checklist>>,
    /// Light or dark theme
    pub theme: Arc<Mutex<ThemeState>>,
    /// Channel into the countdown task
    pub countdown: CountdownHandle,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(
        port: u16,
        host: String,
        countdown: CountdownHandle,
        checklist: Checklist,
        theme: ThemeState,
    ) -> Self {
        Self {
            checklist: Arc::new(Mutex::new(checklist)),
            theme: Arc::new(Mutex::new(theme)),
            countdown,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Run `f` against the locked checklist
    fn with_checklist<T, F>(&self, f: F) -> Result<T, StateError>
    where
        F: FnOnce(&mut Checklist) -> Result<T, ChecklistError>,
    {
        let mut checklist = self.checklist.lock()
            .map_err(|_| StateError::Poisoned("checklist"))?;
        Ok(f(&mut *checklist)?)
    }

    /// Send a command to the countdown and return the resulting timer state
    pub async fn timer_command(&self, command: TimerCommand) -> Result<TimerState, StateError> {
        let state = self.countdown.send(command).await?;
        if command != TimerCommand::Snapshot {
            self.record_action(command.name());
        }
        Ok(state)
    }

    /// Latest published timer state
    pub fn get_timer_state(&self) -> TimerState {
        self.countdown.snapshot()
    }

    pub fn add_task(&self, text: &str) -> Result<ChecklistItem, StateError> {
        let item = self.with_checklist(|checklist| checklist.add(text))?;
        info!("Added task {}: {}", item.id, item.text);
        self.record_action("task-add");
        Ok(item)
    }

    pub fn toggle_task(&self, id: u64) -> Result<ChecklistItem, StateError> {
        let item = self.with_checklist(|checklist| checklist.toggle(id))?;
        info!("Task {} completed={}", item.id, item.completed);
        self.record_action("task-toggle");
        Ok(item)
    }

    pub fn remove_task(&self, id: u64) -> Result<ChecklistItem, StateError> {
        let item = self.with_checklist(|checklist| checklist.remove(id))?;
        info!("Removed task {}", item.id);
        self.record_action("task-remove");
        Ok(item)
    }

    /// Copy of the current checklist
    pub fn get_checklist(&self) -> Result<Checklist, StateError> {
        self.with_checklist(|checklist| Ok(checklist.clone()))
    }

    pub fn get_theme(&self) -> Result<ThemeState, StateError> {
        self.theme.lock()
            .map(|theme| *theme)
            .map_err(|_| StateError::Poisoned("theme"))
    }

    /// Flip the theme and return the new state
    pub fn toggle_theme(&self) -> Result<ThemeState, StateError> {
        let mut theme = self.theme.lock()
            .map_err(|_| StateError::Poisoned("theme"))?;
        theme.toggle();
        let new_theme = *theme;
        drop(theme);

        info!("Theme switched to {}", new_theme.label());
        self.record_action("theme-toggle");
        Ok(new_theme)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tasks::spawn_countdown, timer::TokioScheduler};

    fn app_state() -> AppState {
        let (countdown, _task) = spawn_countdown(TokioScheduler::new());
        AppState::new(0, "127.0.0.1".to_string(), countdown, Checklist::new(), ThemeState::default())
    }

    #[tokio::test]
    async fn actions_are_recorded() {
        let state = app_state();
        assert_eq!(state.get_last_action().0, None);

        state.add_task("plan the day").unwrap();
        assert_eq!(state.get_last_action().0.as_deref(), Some("task-add"));

        state.timer_command(TimerCommand::Start).await.unwrap();
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("timer-start"));
        assert!(time.is_some());

        state.timer_command(TimerCommand::Snapshot).await.unwrap();
        assert_eq!(state.get_last_action().0.as_deref(), Some("timer-start"));
    }

    #[tokio::test]
    async fn checklist_errors_pass_through() {
        let state = app_state();
        assert!(matches!(
            state.toggle_task(7),
            Err(StateError::Checklist(ChecklistError::NotFound(7)))
        ));
        assert!(matches!(
            state.add_task(" "),
            Err(StateError::Checklist(ChecklistError::EmptyText))
        ));
    }

    #[tokio::test]
    async fn theme_toggle_is_stored() {
        let state = app_state();
        assert!(state.toggle_theme().unwrap().dark_mode);
        assert!(state.get_theme().unwrap().dark_mode);
    }
}
