//! Light/dark colour scheme.
//!
//! The active scheme is mirrored as a `data-theme` attribute on `<html>`; the
//! stylesheet swaps its palette on that attribute. An explicit choice is kept
//! in `localStorage` under `config::THEME_STORAGE_KEY`; without one the
//! system `prefers-color-scheme` decides. SSR and native builds always see
//! `Theme::Light` and never touch the document.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to `data-theme` and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Stored value back to a theme. Anything unrecognised is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Label for the toggle button: names the scheme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark Mode",
            Self::Dark => "Switch to Light Mode",
        }
    }
}

/// Stored choice, else the system preference.
pub fn load() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|raw| Theme::parse(&raw));
        if let Some(theme) = stored {
            return theme;
        }
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set `data-theme` on the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if root.set_attribute("data-theme", theme.as_str()).is_err() {
                leptos::logging::warn!("theme: data-theme rejected");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply and persist the result.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            if storage.set_item(THEME_STORAGE_KEY, next.as_str()).is_err() {
                leptos::logging::warn!("theme: storage write rejected");
            }
        }
    }
    next
}
