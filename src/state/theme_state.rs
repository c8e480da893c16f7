//! Theme state structure

use serde::{Deserialize, Serialize};

/// Dashboard colour scheme selected by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl ThemeState {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Switch between light and dark, returning the new `dark_mode`
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn label(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}
