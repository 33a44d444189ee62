use dioxus::prelude::*;

/// Circular initials avatar. Takes pre-computed initials so callers decide
/// how names collapse.
#[component]
pub fn Avatar(initials: String, #[props(default = false)] small: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "avatar",
            "data-size": if small { "sm" } else { "md" },
            "{initials}"
        }
    }
}
