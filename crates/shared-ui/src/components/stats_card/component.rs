use dioxus::prelude::*;

/// Dashboard metric tile: a label, a headline value, and an optional
/// period-over-period change line.
#[component]
pub fn StatsCard(
    title: String,
    value: String,
    #[props(default)] change: Option<String>,
    #[props(default = true)] positive: bool,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stats-card",
            div { class: "stats-card-body",
                span { class: "stats-card-title", "{title}" }
                span { class: "stats-card-value", "{value}" }
                if let Some(change) = change {
                    span {
                        class: "stats-card-change",
                        "data-trend": if positive { "up" } else { "down" },
                        "{change}"
                    }
                }
            }
            if let Some(icon) = icon {
                div { class: "stats-card-icon", {icon} }
            }
        }
    }
}
