//! Dark mode initialization and toggle.
//!
//! Reads the stored `theme` preference and applies it to the `<html>`
//! element as both a `dark` class and a `data-theme` attribute. Toggle writes
//! back to `localStorage`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op and render the dark default.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

pub const THEME_KEY: &str = "theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Map a stored theme value to the dark flag. Anything but `"light"` is dark.
pub(crate) fn parse_theme(raw: Option<&str>) -> bool {
    raw != Some(LIGHT)
}

pub(crate) fn theme_name(enabled: bool) -> &'static str {
    if enabled { DARK } else { LIGHT }
}

/// Read the dark mode preference from localStorage, defaulting to dark.
pub fn read_preference() -> bool {
    parse_theme(storage::get_raw(THEME_KEY).as_deref())
}

/// Write the preference without touching the document.
pub fn persist(enabled: bool) {
    storage::set_raw(THEME_KEY, theme_name(enabled));
}

/// Apply the `dark` class and `data-theme` attribute on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.class_list().toggle_with_force(DARK, enabled);
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(next);
    next
}
