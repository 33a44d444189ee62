use dioxus::prelude::*;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{Badge, BadgeVariant, Card, CardContent};

use crate::routes::Route;
use crate::state::use_app;

/// Role picker. Selecting a card replaces the session user and lands on
/// that role's home page.
#[component]
pub fn RoleSwitch() -> Element {
    let app = use_app();
    let active = app.role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./role_switch.css") }
        div { class: "role-switch",
            header { class: "role-switch-header",
                h1 { "Who are you today?" }
                p { "Pick a role to explore its dashboard. You can switch again at any time." }
            }
            div { class: "role-grid",
                for role in ALL_ROLES.iter().copied() {
                    RoleCard { role, active: role == active }
                }
            }
        }
    }
}

#[component]
fn RoleCard(role: Role, active: bool) -> Element {
    let mut app = use_app();

    rsx! {
        div {
            class: if active { "role-card active" } else { "role-card" },
            onclick: move |_| {
                app.switch_role(role);
                navigator().push(role.home_path());
            },
            Card {
                CardContent {
                    div { class: "role-card-top",
                        span { class: "role-card-name", {role.display_name()} }
                        if active {
                            Badge { variant: BadgeVariant::Success, "Active" }
                        }
                    }
                    p { class: "role-card-description", {role.description()} }
                }
            }
        }
    }
}
