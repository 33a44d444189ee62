use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLogOut, LdMenu, LdMoon, LdSun};
use dioxus_free_icons::Icon;
use shared_types::{ACADEMIC_YEARS, DEMO_SCHOOL};
use shared_ui::{Avatar, Badge, BadgeVariant};

use crate::routes::Route;
use crate::state::use_app;

/// Top navigation strip: sidebar toggle, school identity, academic year,
/// theme toggle, notifications, and the session user.
#[component]
pub fn TopNav() -> Element {
    let mut app = use_app();
    let user = *app.user.read();
    let dark = app.theme.current().is_dark();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./top_nav.css") }
        header { class: "top-nav",
            div { class: "top-nav-left",
                button {
                    class: "top-nav-icon-button",
                    "aria-label": "Toggle sidebar",
                    onclick: move |_| app.toggle_sidebar(),
                    Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                }
                div { class: "top-nav-school",
                    span { class: "top-nav-school-name", {DEMO_SCHOOL.name} }
                    select { class: "top-nav-year",
                        for year in ACADEMIC_YEARS {
                            option {
                                value: *year,
                                selected: *year == DEMO_SCHOOL.academic_year,
                                "AY {year}"
                            }
                        }
                    }
                }
            }
            div { class: "top-nav-right",
                button {
                    class: "top-nav-icon-button",
                    "aria-label": "Toggle theme",
                    onclick: move |_| {
                        app.theme.toggle();
                        tracing::debug!(dark = app.theme.current().is_dark(), "theme toggled");
                    },
                    if dark {
                        Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                    } else {
                        Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                    }
                }
                button {
                    class: "top-nav-icon-button",
                    "aria-label": "Notifications",
                    Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                    span { class: "top-nav-dot" }
                }
                Badge { variant: BadgeVariant::Outline, {user.role.display_name()} }
                Link { to: Route::RoleSwitch {}, class: "top-nav-profile",
                    Avatar { initials: user.initials() }
                    div { class: "top-nav-identity",
                        span { class: "top-nav-name", {user.name} }
                        span { class: "top-nav-email", {user.email} }
                    }
                }
                Link { to: Route::Login {}, class: "top-nav-icon-button", "aria-label": "Sign out",
                    Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                }
            }
        }
    }
}
