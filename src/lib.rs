//! FocusBoard - A state-managed HTTP server for a focus dashboard
//! 
//! This library keeps a Pomodoro countdown, a checklist and a theme flag in
//! memory and exposes them over a small JSON API.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use tasks::{spawn_countdown, CountdownHandle};
pub use timer::{CountdownController, Scheduler, TokioScheduler};
pub use utils::signals::shutdown_signal;
