use dioxus::prelude::*;
use shared_types::DEMO_SCHOOL;
use shared_ui::{Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

struct Step {
    title: &'static str,
    body: &'static str,
}

const STEPS: &[Step] = &[
    Step { title: "School profile", body: "Name, academic year, and branding are preloaded for the demo school." },
    Step { title: "Pick a role", body: "Explore the dashboard as any of the nine staff, student, or parent roles." },
    Step { title: "Try the assistant", body: "Every role shares the AI assistant for questions across school data." },
];

/// Landing page for unknown locations and fresh sessions.
#[component]
pub fn Onboarding() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./entry.css") }
        div { class: "entry-screen",
            Card { class: "entry-card",
                CardHeader {
                    CardTitle { "Welcome to SchoolOS" }
                    CardDescription {
                        {DEMO_SCHOOL.name}
                        " · Academic Year "
                        {DEMO_SCHOOL.academic_year}
                    }
                }
                CardContent {
                    Badge { variant: BadgeVariant::Ai, "Demo workspace" }
                    div { class: "entry-steps",
                        for (i, step) in STEPS.iter().enumerate() {
                            div { class: "entry-step",
                                span { class: "entry-step-number", "{i + 1}" }
                                div {
                                    div { class: "entry-step-title", {step.title} }
                                    div { class: "entry-step-body", {step.body} }
                                }
                            }
                        }
                    }
                    Button {
                        onclick: move |_| {
                            navigator().push(Route::RoleSwitch {});
                        },
                        "Choose a Role"
                    }
                }
            }
        }
    }
}
