use dioxus::prelude::*;
use shared_types::{Role, SessionUser};
use shared_ui::theme::{Theme, ThemeState};

/// Session and preference state shared across all routes.
///
/// The demo has no backend session; switching roles replaces the seeded
/// user record in place and every consumer rerenders from the signal.
#[derive(Clone, Copy)]
pub struct AppState {
    pub user: Signal<SessionUser>,
    pub sidebar_collapsed: Signal<bool>,
    pub theme: ThemeState,
}

impl AppState {
    pub fn role(&self) -> Role {
        self.user.read().role
    }

    pub fn switch_role(&mut self, role: Role) {
        tracing::info!(role = role.as_str(), "switching active role");
        self.user.set(SessionUser::with_role(role));
    }

    pub fn toggle_sidebar(&mut self) {
        let next = !*self.sidebar_collapsed.read();
        self.sidebar_collapsed.set(next);
    }
}

/// Provide [`AppState`] (and the theme context the seed component reads)
/// at the application root.
pub fn provide_app_state() -> AppState {
    let theme = ThemeState { theme: Signal::new(Theme::default()) };
    use_context_provider(|| theme);

    use_context_provider(|| AppState {
        user: Signal::new(SessionUser::demo_default()),
        sidebar_collapsed: Signal::new(false),
        theme,
    })
}

/// Panics when called outside [`provide_app_state`]; every routed page
/// renders under the provider, so a miss is a wiring bug.
pub fn use_app() -> AppState {
    use_context::<AppState>()
}
