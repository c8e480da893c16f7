//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::{
    state::{AppState, ChecklistItem},
    timer::TimerCommand,
};
use super::{
    error::ApiError,
    responses::{
        ChecklistResponse, ChecklistSummary, HealthResponse, NewTaskRequest, StatusResponse,
        ThemeResponse, TimerResponse,
    },
};

async fn run_timer_command(
    state: &AppState,
    command: TimerCommand,
) -> Result<Json<TimerResponse>, ApiError> {
    let timer = state.timer_command(command).await?;
    if command != TimerCommand::Snapshot {
        info!("{} endpoint called - timer at {}", command.name(), timer.display());
    }
    Ok(Json(timer.into()))
}

/// Handle GET /timer - Current countdown
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, ApiError> {
    run_timer_command(&state, TimerCommand::Snapshot).await
}

/// Handle POST /timer/start
pub async fn timer_start_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, ApiError> {
    run_timer_command(&state, TimerCommand::Start).await
}

/// Handle POST /timer/pause
pub async fn timer_pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, ApiError> {
    run_timer_command(&state, TimerCommand::Pause).await
}

/// Handle POST /timer/toggle - Start when idle, pause when running
pub async fn timer_toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, ApiError> {
    run_timer_command(&state, TimerCommand::Toggle).await
}

/// Handle POST /timer/reset - Stop and refill the current phase
pub async fn timer_reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, ApiError> {
    run_timer_command(&state, TimerCommand::Reset).await
}

/// Handle GET /tasks - Checklist with progress
pub async fn list_tasks_handler(State(state): State<Arc<AppState>>) -> Result<Json<ChecklistResponse>, ApiError> {
    let checklist = state.get_checklist()?;
    Ok(Json(ChecklistResponse::from(&checklist)))
}

/// Handle POST /tasks - Append a task
pub async fn add_task_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewTaskRequest>,
) -> Result<(StatusCode, Json<ChecklistItem>), ApiError> {
    let item = state.add_task(&request.text)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Handle POST /tasks/:id/toggle - Flip completion
pub async fn toggle_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ChecklistItem>, ApiError> {
    Ok(Json(state.toggle_task(id)?))
}

/// Handle DELETE /tasks/:id
pub async fn remove_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ChecklistItem>, ApiError> {
    Ok(Json(state.remove_task(id)?))
}

/// Handle GET /theme
pub async fn theme_handler(State(state): State<Arc<AppState>>) -> Result<Json<ThemeResponse>, ApiError> {
    Ok(Json(state.get_theme()?.into()))
}

/// Handle POST /theme/toggle - Switch light/dark
pub async fn theme_toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ThemeResponse>, ApiError> {
    Ok(Json(state.toggle_theme()?.into()))
}

/// Handle GET /status - Return the whole dashboard state
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let theme = state.get_theme()?;
    let checklist = state.get_checklist()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        theme: theme.into(),
        timer: state.get_timer_state().into(),
        checklist: ChecklistSummary {
            completed: checklist.completed_count(),
            total: checklist.len(),
            progress_percent: checklist.progress_percent(),
        },
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
