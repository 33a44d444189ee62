use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGraduationCap, LdTrendingUp, LdUsers, LdWallet};
use dioxus_free_icons::Icon;
use shared_types::fees::format_rupees;
use shared_types::governance::{Approval, Report};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Column, InsightCard, Input, PageActions, PageDescription, PageHeader, PageTitle,
    RecordTable, StatsCard, StatusBadge, TableFilter,
};

use crate::data::{APPROVALS, INSIGHTS, REPORTS};

#[component]
pub fn PrincipalDashboard() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Principal Dashboard" }
                PageDescription { "School-wide overview for the current academic year." }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Total Students",
                value: "2,847",
                change: "+3.2% from last year",
                icon: rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Staff Present Today",
                value: "118 / 124",
                change: "95% attendance",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Fees Collected (Nov)",
                value: format_rupees(4_825_000),
                change: "82% of billed",
                icon: rsx! { Icon::<LdWallet> { icon: LdWallet, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Average Attendance",
                value: "92.4%",
                change: "-1.1% this week",
                positive: false,
                icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 } },
            }
        }
        div { class: "two-col",
            Card {
                CardHeader {
                    CardTitle { "Pending Approvals" }
                    CardDescription { "Requests waiting on your sign-off." }
                }
                CardContent {
                    div { class: "page-grid",
                        for approval in APPROVALS.iter().filter(|a| a.status.as_str() == "pending") {
                            div { class: "approval-row",
                                div {
                                    div { class: "approval-request", {approval.request} }
                                    div { class: "approval-meta",
                                        "{approval.requested_by} · {approval.category} · {approval.date}"
                                    }
                                }
                                StatusBadge { status: approval.status.as_str().to_string() }
                            }
                        }
                    }
                }
            }
            div { class: "page-grid",
                for insight in INSIGHTS {
                    InsightCard {
                        title: insight.title.to_string(),
                        description: insight.description.to_string(),
                        priority: insight.priority.as_str().to_string(),
                        actionable: insight.actionable,
                    }
                }
            }
        }
    }
}

fn approval_columns() -> Vec<Column<Approval>> {
    vec![
        Column::new("id", "ID", |a: &Approval| a.id.to_string()),
        Column::new("request", "Request", |a: &Approval| a.request.to_string()),
        Column::new("requested_by", "Requested By", |a: &Approval| a.requested_by.to_string()),
        Column::new("category", "Category", |a: &Approval| a.category.to_string()),
        Column::new("date", "Date", |a: &Approval| a.date.to_string()),
        Column::new("status", "Status", |a: &Approval| a.status.as_str().to_string())
            .render(|a: &Approval| rsx! { StatusBadge { status: a.status.as_str().to_string() } }),
    ]
}

#[component]
pub fn PrincipalApprovals() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Approvals" }
                PageDescription { "Review and act on staff requests." }
            }
        }
        RecordTable::<Approval> {
            items: APPROVALS.to_vec(),
            columns: approval_columns(),
            key_of: |a: &Approval| a.id.to_string(),
            search_placeholder: "Search requests...",
            filters: vec![TableFilter {
                key: "status",
                label: "Status",
                options: &["Pending", "Approved", "Rejected"],
            }],
            actions: (|a: &Approval| {
                let id = a.id;
                rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| tracing::info!(%id, "approval opened"),
                        "Review"
                    }
                }
            }) as fn(&Approval) -> Element,
            empty_message: "No matching requests.",
        }
    }
}

fn report_columns() -> Vec<Column<Report>> {
    vec![
        Column::new("name", "Report", |r: &Report| r.name.to_string()),
        Column::new("category", "Category", |r: &Report| r.category.to_string()),
        Column::new("generated", "Generated", |r: &Report| r.generated.to_string()),
        Column::new("status", "Status", |r: &Report| r.status.as_str().to_string())
            .render(|r: &Report| rsx! { StatusBadge { status: r.status.as_str().to_string() } }),
    ]
}

#[component]
pub fn PrincipalReports() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Reports" }
                PageDescription { "Generated summaries across attendance, finance, and academics." }
            }
            PageActions {
                Button { "Generate Report" }
            }
        }
        RecordTable::<Report> {
            items: REPORTS.to_vec(),
            columns: report_columns(),
            key_of: |r: &Report| r.id.to_string(),
            search_placeholder: "Search reports...",
            filters: vec![TableFilter {
                key: "category",
                label: "Category",
                options: &["Attendance", "Finance", "Academics", "HR"],
            }],
        }
    }
}

#[component]
pub fn PrincipalSettings() -> Element {
    let mut school_name = use_signal(|| shared_types::DEMO_SCHOOL.name.to_string());
    let mut motto = use_signal(|| "Service Before Self".to_string());

    rsx! {
        PageHeader {
            div {
                PageTitle { "Settings" }
                PageDescription { "School profile and notification preferences." }
            }
        }
        div { class: "page-grid",
            Card {
                CardHeader {
                    CardTitle { "School Profile" }
                    CardDescription { "Shown across the dashboard and on generated documents." }
                }
                CardContent {
                    div { class: "page-grid",
                        Input {
                            label: "School name",
                            value: school_name.read().clone(),
                            on_input: move |evt: FormEvent| school_name.set(evt.value()),
                        }
                        Input {
                            label: "Motto",
                            value: motto.read().clone(),
                            on_input: move |evt: FormEvent| motto.set(evt.value()),
                        }
                        div {
                            Button { "Save Changes" }
                        }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Notifications" }
                    CardDescription { "Delivery channels for school-wide announcements." }
                }
                CardContent {
                    div { class: "page-grid",
                        label { class: "settings-toggle",
                            input { r#type: "checkbox", checked: true }
                            "Email staff on new approval requests"
                        }
                        label { class: "settings-toggle",
                            input { r#type: "checkbox", checked: true }
                            "SMS parents on fee due dates"
                        }
                        label { class: "settings-toggle",
                            input { r#type: "checkbox" }
                            "Weekly digest of AI insights"
                        }
                        Badge { variant: BadgeVariant::Secondary, "Demo only; changes are not persisted" }
                    }
                }
            }
        }
    }
}
