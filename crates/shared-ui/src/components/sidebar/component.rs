use dioxus::prelude::*;

/// The main sidebar container. Collapse state is owned by the caller and
/// passed down, so the same preference signal can drive both the rail and
/// the content margin.
#[component]
pub fn Sidebar(
    #[props(default = false)] collapsed: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside {
            class: "sidebar",
            "data-collapsed": if collapsed { "true" } else { "false" },
            ..attributes,
            {children}
        }
    }
}

/// Branding section at the top of the Sidebar.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

/// Scrollable navigation area of the Sidebar.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-content", {children} }
    }
}

/// Footer section pinned to the bottom of the Sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Navigation menu list inside the sidebar.
#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// A single entry in a SidebarMenu. `ai` gives the assistant entry its
/// gradient treatment.
#[component]
pub fn SidebarMenuItem(
    #[props(default = false)] active: bool,
    #[props(default = false)] ai: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                "data-active": if active { "true" } else { "false" },
                "data-ai": if ai { "true" } else { "false" },
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
