use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdGraduationCap;
use dioxus_free_icons::Icon;
use shared_types::DEMO_SCHOOL;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::routes::Route;

/// Demo sign-in. No backend; any credentials continue to onboarding.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(|| "principal@demoschool.edu.in".to_string());
    let mut password = use_signal(String::new);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./entry.css") }
        div { class: "entry-screen",
            Card { class: "entry-card",
                CardHeader {
                    div { class: "entry-brand",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 28, height: 28 }
                        CardTitle { "SchoolOS" }
                    }
                    CardDescription { "Sign in to {DEMO_SCHOOL.name}" }
                }
                CardContent {
                    div { class: "entry-form",
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email.read().clone(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "Any password works in the demo",
                            value: password.read().clone(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            onclick: move |_| {
                                tracing::info!(email = %email.read(), "demo sign-in");
                                navigator().push(Route::Onboarding {});
                            },
                            "Sign In"
                        }
                        p { class: "entry-hint",
                            "This is a demo environment. Credentials are not verified."
                        }
                    }
                }
            }
        }
    }
}
