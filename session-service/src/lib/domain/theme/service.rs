use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::domain::theme::models::ThemeMode;

/// Light/dark mode holder.
///
/// Independent of the session container; in-memory only, nothing persists
/// across restarts.
#[derive(Debug)]
pub struct ThemeState {
    dark: AtomicBool,
}

impl ThemeState {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            dark: AtomicBool::new(initial == ThemeMode::Dark),
        }
    }

    /// Flip between light and dark, returning the new mode.
    pub fn toggle_mode(&self) -> ThemeMode {
        let was_dark = self.dark.fetch_xor(true, Ordering::Relaxed);
        if was_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// The active mode.
    pub fn current_mode(&self) -> ThemeMode {
        if self.dark.load(Ordering::Relaxed) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
