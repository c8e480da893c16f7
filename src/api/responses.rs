//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Checklist, ChecklistItem, Phase, ThemeState, TimerState};

/// Timer snapshot as shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub phase: Phase,
    pub phase_label: String,
    pub remaining_seconds: u64,
    pub display: String,
    pub is_running: bool,
}

impl From<TimerState> for TimerResponse {
    fn from(state: TimerState) -> Self {
        Self {
            phase: state.phase,
            phase_label: state.phase.label().to_string(),
            remaining_seconds: state.remaining_seconds,
            display: state.display(),
            is_running: state.is_running,
        }
    }
}

/// Full checklist with derived progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistResponse {
    pub items: Vec<ChecklistItem>,
    pub completed: usize,
    pub total: usize,
    pub progress_percent: f64,
}

impl From<&Checklist> for ChecklistResponse {
    fn from(checklist: &Checklist) -> Self {
        Self {
            items: checklist.items().to_vec(),
            completed: checklist.completed_count(),
            total: checklist.len(),
            progress_percent: checklist.progress_percent(),
        }
    }
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTaskRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub dark_mode: bool,
    pub theme: String,
}

impl From<ThemeState> for ThemeResponse {
    fn from(theme: ThemeState) -> Self {
        Self {
            dark_mode: theme.dark_mode,
            theme: theme.label().to_string(),
        }
    }
}

/// Counts shown in the checklist header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub completed: usize,
    pub total: usize,
    pub progress_percent: f64,
}

/// Dashboard status overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub theme: ThemeResponse,
    pub timer: TimerResponse,
    pub checklist: ChecklistSummary,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    Unavailable,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_response_carries_display_fields() {
        let response = TimerResponse::from(TimerState::idle(Phase::Break));
        assert_eq!(response.display, "05:00");
        assert_eq!(response.phase_label, "Short Break");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["phase"], "break");
        assert_eq!(json["is_running"], false);
    }
}
