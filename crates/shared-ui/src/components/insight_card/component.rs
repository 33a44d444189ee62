use dioxus::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonVariant};

fn priority_variant(priority: &str) -> BadgeVariant {
    match priority {
        "high" => BadgeVariant::Destructive,
        "medium" => BadgeVariant::Warning,
        _ => BadgeVariant::Secondary,
    }
}

/// Assistant insight tile shown on dashboards. Priority drives the badge
/// color; actionable insights get a follow-up button.
#[component]
pub fn InsightCard(
    title: String,
    description: String,
    priority: String,
    #[props(default = false)] actionable: bool,
    #[props(default)] on_action: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "insight-card",
            div { class: "insight-card-top",
                Badge { variant: BadgeVariant::Ai, "AI" }
                Badge { variant: priority_variant(&priority), "{priority}" }
            }
            span { class: "insight-card-title", "{title}" }
            p { class: "insight-card-description", "{description}" }
            if actionable {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |evt| {
                        if let Some(handler) = &on_action {
                            handler.call(evt);
                        }
                    },
                    "Take action"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_drives_badge_variant() {
        assert_eq!(priority_variant("high"), BadgeVariant::Destructive);
        assert_eq!(priority_variant("medium"), BadgeVariant::Warning);
        assert_eq!(priority_variant("low"), BadgeVariant::Secondary);
        assert_eq!(priority_variant("unknown"), BadgeVariant::Secondary);
    }
}
