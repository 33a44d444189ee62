use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
    Ai,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Ai => "ai",
        }
    }
}

/// Map a record status string onto a badge variant. Statuses from every
/// domain table funnel through here so the color language stays uniform.
pub fn status_variant(status: &str) -> BadgeVariant {
    match status.to_lowercase().as_str() {
        "active" | "approved" | "paid" | "present" | "completed" | "issued" | "returned"
        | "on time" => BadgeVariant::Success,
        "pending" | "partial" | "review" | "late" | "due soon" => BadgeVariant::Warning,
        "waitlisted" | "inactive" | "draft" | "scheduled" => BadgeVariant::Secondary,
        "absent" | "rejected" | "overdue" => BadgeVariant::Destructive,
        _ => BadgeVariant::Primary,
    }
}

/// Badge for inline labels and statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "badge",
            "data-style": variant.class(),
            ..attributes,
            {children}
        }
    }
}

/// Badge colored by a status string, rendering the status as its label.
#[component]
pub fn StatusBadge(status: String) -> Element {
    rsx! {
        Badge { variant: status_variant(&status), "{status}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_expected_variants() {
        assert_eq!(status_variant("Approved"), BadgeVariant::Success);
        assert_eq!(status_variant("paid"), BadgeVariant::Success);
        assert_eq!(status_variant("Pending"), BadgeVariant::Warning);
        assert_eq!(status_variant("Waitlisted"), BadgeVariant::Secondary);
        assert_eq!(status_variant("Overdue"), BadgeVariant::Destructive);
        assert_eq!(status_variant("Rejected"), BadgeVariant::Destructive);
    }

    #[test]
    fn unknown_status_defaults_to_primary() {
        assert_eq!(status_variant("Enrolled"), BadgeVariant::Primary);
        assert_eq!(status_variant(""), BadgeVariant::Primary);
    }
}
