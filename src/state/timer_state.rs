//! Timer state structure and display formatting

use serde::{Deserialize, Serialize};

/// Fixed length of a focus phase in seconds
pub const FOCUS_SECONDS: u64 = 25 * 60;
/// Fixed length of a break phase in seconds
pub const BREAK_SECONDS: u64 = 5 * 60;

/// One of the two alternating timer modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    /// Fixed duration of this phase in seconds
    pub fn duration_seconds(self) -> u64 {
        match self {
            Phase::Focus => FOCUS_SECONDS,
            Phase::Break => BREAK_SECONDS,
        }
    }

    /// The phase that follows this one
    pub fn next(self) -> Self {
        match self {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        }
    }

    /// Human readable label shown under the countdown
    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "Focus Time",
            Phase::Break => "Short Break",
        }
    }
}

/// Countdown state held by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub phase: Phase,
    pub is_running: bool,
}

impl TimerState {
    /// Create an idle timer at the start of a focus phase
    pub fn new() -> Self {
        Self::idle(Phase::Focus)
    }

    /// Create an idle timer holding the full duration of `phase`
    pub fn idle(phase: Phase) -> Self {
        Self {
            remaining_seconds: phase.duration_seconds(),
            phase,
            is_running: false,
        }
    }

    pub fn display(&self) -> String {
        format_display(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a second count as zero-padded `MM:SS`
pub fn format_display(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_display(90), "01:30");
        assert_eq!(format_display(5), "00:05");
        assert_eq!(format_display(0), "00:00");
        assert_eq!(format_display(65), "01:05");
        assert_eq!(format_display(FOCUS_SECONDS), "25:00");
    }

    #[test]
    fn display_is_always_two_padded_fields() {
        for seconds in 0..=FOCUS_SECONDS {
            let shown = format_display(seconds);
            let (mm, ss) = shown.split_once(':').expect("separator");
            assert_eq!(mm.len(), 2, "{shown}");
            assert_eq!(ss.len(), 2, "{shown}");
            let ss: u64 = ss.parse().expect("seconds");
            let mm: u64 = mm.parse().expect("minutes");
            assert!(ss < 60);
            assert_eq!(mm * 60 + ss, seconds);
        }
    }

    #[test]
    fn new_state_is_idle_focus() {
        let state = TimerState::new();
        assert_eq!(state.phase, Phase::Focus);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
        assert_eq!(state.display(), "25:00");
    }

    #[test]
    fn phases_alternate() {
        assert_eq!(Phase::Focus.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Focus);
        assert_eq!(Phase::Break.duration_seconds(), 300);
    }
}
