//! Local UI chrome state (theme, sidebar, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session model so
//! rendering controls can evolve independently of auth data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Dark theme is the default until the user picks light.
    pub dark_mode: bool,
    /// Main-layout sidebar open on narrow screens.
    pub sidebar_open: bool,
    /// Landing navbar drawer open on narrow screens.
    pub menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true, sidebar_open: false, menu_open: false }
    }
}

impl UiState {
    /// Close every transient overlay, e.g. after navigation.
    pub fn close_overlays(&mut self) {
        self.sidebar_open = false;
        self.menu_open = false;
    }

    /// Toggle-button label and tooltip for the current theme.
    #[must_use]
    pub fn theme_toggle_label(&self) -> (&'static str, &'static str) {
        if self.dark_mode {
            ("🌞", "Switch to light mode")
        } else {
            ("🌙", "Switch to dark mode")
        }
    }
}
