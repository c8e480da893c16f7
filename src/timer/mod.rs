//! Countdown timer core
//!
//! This module contains the countdown state machine and the scheduling
//! abstraction that drives it.

pub mod controller;
pub mod scheduler;

// Re-export main types
pub use controller::{CountdownController, TickOutcome, TimerCommand, TimerMessage, TICK_INTERVAL};
pub use scheduler::{ScheduleHandle, Scheduler, TickCallback, TokioScheduler};
