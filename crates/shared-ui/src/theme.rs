use dioxus::prelude::*;

/// The single key persisted to durable local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Presentation modes available in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Key used for storage and the root presentation class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored key. Anything unrecognized is treated as absent so a
    /// corrupted value falls through to the OS preference.
    pub fn from_key(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Boot-time resolution order: persisted value, else the OS
    /// `prefers-color-scheme` hint, else light.
    pub fn resolve_initial(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
        if let Some(theme) = stored.and_then(Theme::from_key) {
            return theme;
        }
        if os_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Shared theme state provided as context by the preferences store.
///
/// The top navigation toggle writes this signal; changes call [`set_theme`]
/// to sync the document class and durable storage.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
}

impl ThemeState {
    pub fn current(&self) -> Theme {
        *self.theme.read()
    }

    /// Flip light/dark and propagate to storage and the document root.
    pub fn toggle(&mut self) {
        let next = self.current().toggled();
        self.theme.set(next);
        set_theme(next);
    }
}

/// Seed the theme on application startup.
///
/// The page script resolves stored value → OS preference → light and flips
/// the root `dark` class before any paint-affecting interaction; the
/// resolved inputs are reported back so the in-memory signal agrees with
/// the document. Mount this once in the top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    let mut state: ThemeState = use_context();

    use_future(move || async move {
        let boot = document::eval(
            r#"
            var stored = null;
            try { stored = window.localStorage.getItem('theme'); } catch (e) {}
            var prefersDark = false;
            try { prefersDark = window.matchMedia('(prefers-color-scheme: dark)').matches; } catch (e) {}
            var dark = stored === 'dark' || (stored !== 'light' && prefersDark);
            document.documentElement.classList.toggle('dark', dark);
            return { stored: stored, prefersDark: prefersDark };
            "#,
        )
        .await;

        if let Ok(value) = boot {
            let stored = value.get("stored").and_then(|v| v.as_str()).map(str::to_owned);
            let os_dark = value.get("prefersDark").and_then(|v| v.as_bool()).unwrap_or(false);
            state.theme.set(Theme::resolve_initial(stored.as_deref(), os_dark));
        }
    });

    rsx! {}
}

/// Set the active theme: toggle the root `dark` class and persist the key.
/// Fire-and-forget; no caller awaits the storage write.
pub fn set_theme(theme: Theme) {
    document::eval(&format!(
        r#"
        try {{ window.localStorage.setItem('{key}', '{value}'); }} catch (e) {{}}
        document.documentElement.classList.toggle('dark', {dark});
        "#,
        key = THEME_STORAGE_KEY,
        value = theme.as_str(),
        dark = theme.is_dark(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_key_roundtrip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_key(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn unknown_key_is_absent() {
        assert_eq!(Theme::from_key("solarized"), None);
        assert_eq!(Theme::from_key(""), None);
    }

    #[test]
    fn stored_value_wins_over_os_preference() {
        assert_eq!(Theme::resolve_initial(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve_initial(Some("light"), true), Theme::Light);
    }

    #[test]
    fn os_preference_applies_without_stored_value() {
        assert_eq!(Theme::resolve_initial(None, true), Theme::Dark);
        assert_eq!(Theme::resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn corrupted_stored_value_falls_through() {
        assert_eq!(Theme::resolve_initial(Some("neon"), true), Theme::Dark);
        assert_eq!(Theme::resolve_initial(Some("neon"), false), Theme::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
