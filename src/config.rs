//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::{Checklist, ThemeState};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "focusboard")]
#[command(about = "A state-managed HTTP server for a focus timer, checklist and theme dashboard")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Start with the dark theme
    #[arg(long)]
    pub dark: bool,

    /// Start with an empty checklist instead of the sample tasks
    #[arg(long)]
    pub empty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Checklist the server starts with
    pub fn initial_checklist(&self) -> Checklist {
        if self.empty { Checklist::new() } else { Checklist::with_samples() }
    }

    pub fn initial_theme(&self) -> ThemeState {
        ThemeState::new(self.dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["focusboard"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert!(!config.initial_theme().dark_mode);
        assert_eq!(config.initial_checklist().len(), 3);
    }

    #[test]
    fn flags_shape_initial_state() {
        let config = Config::try_parse_from(["focusboard", "--dark", "--empty", "-v", "-p", "9000"]).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level(), "debug");
        assert!(config.initial_theme().dark_mode);
        assert!(config.initial_checklist().is_empty());
    }
}
