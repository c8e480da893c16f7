//! State management module
//! 
//! This module contains all state-related structures and their management logic.

pub mod app_state;
pub mod checklist;
pub mod theme_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, StateError};
pub use checklist::{Checklist, ChecklistError, ChecklistItem};
pub use theme_state::ThemeState;
pub use timer_state::{format_display, Phase, TimerState, BREAK_SECONDS, FOCUS_SECONDS};
