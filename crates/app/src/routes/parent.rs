use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendarCheck, LdCreditCard, LdMessageSquare};
use dioxus_free_icons::Icon;
use shared_types::fees::{format_rupees, FeeRecord, PayStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Column, PageDescription, PageHeader, PageTitle, RecordTable, StatsCard,
    StatusBadge,
};

use crate::data::{MESSAGES, PARENT_FEES};

#[component]
pub fn ParentDashboard() -> Element {
    let due: u32 = PARENT_FEES
        .iter()
        .filter(|f| matches!(f.status, PayStatus::Pending | PayStatus::Overdue))
        .map(|f| f.amount)
        .sum();
    let unread = MESSAGES.iter().filter(|m| !m.read).count();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Parent Dashboard" }
                PageDescription { "Aarav Sharma · Class 8-A · Roll 8A-01" }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Attendance This Term",
                value: "94.2%",
                icon: rsx! { Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Fees Due",
                value: format_rupees(due),
                change: "Q3 due 10 December",
                positive: false,
                icon: rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Unread Messages",
                value: unread.to_string(),
                icon: rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 20, height: 20 } },
            }
        }
        Card {
            CardHeader {
                CardTitle { "Recent Messages" }
                CardDescription { "Latest from the school." }
            }
            CardContent {
                div { class: "page-grid",
                    for message in MESSAGES.iter().take(3) {
                        div { class: "approval-row",
                            div {
                                div { class: "approval-request", {message.subject} }
                                div { class: "approval-meta", "{message.from} · {message.date}" }
                            }
                            if !message.read {
                                Badge { variant: BadgeVariant::Primary, "New" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn fee_columns() -> Vec<Column<FeeRecord>> {
    vec![
        Column::new("head", "Fee Head", |f: &FeeRecord| f.fee_head.to_string()),
        Column::new("amount", "Amount", |f: &FeeRecord| format_rupees(f.amount)),
        Column::new("due", "Due Date", |f: &FeeRecord| f.due_date.to_string()),
        Column::new("status", "Status", |f: &FeeRecord| f.status.as_str().to_string())
            .render(|f: &FeeRecord| rsx! { StatusBadge { status: f.status.as_str().to_string() } }),
    ]
}

#[component]
pub fn ParentFees() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Fee Payment" }
                PageDescription { "Dues and payment history for this academic year." }
            }
        }
        RecordTable::<FeeRecord> {
            items: PARENT_FEES.to_vec(),
            columns: fee_columns(),
            key_of: |f: &FeeRecord| f.id.to_string(),
            search_placeholder: "Search fee heads...",
            actions: (|f: &FeeRecord| {
                let payable = matches!(f.status, PayStatus::Pending | PayStatus::Overdue);
                let id = f.id;
                rsx! {
                    if payable {
                        Button {
                            onclick: move |_| tracing::info!(%id, "payment started"),
                            "Pay Now"
                        }
                    } else {
                        Button { variant: ButtonVariant::Outline, "Receipt" }
                    }
                }
            }) as fn(&FeeRecord) -> Element,
        }
    }
}

/// Message inbox. Selecting a row expands the preview inline.
#[component]
pub fn ParentCommunication() -> Element {
    let mut open_id = use_signal(|| None::<&'static str>);

    rsx! {
        PageHeader {
            div {
                PageTitle { "Communication" }
                PageDescription { "Messages and circulars from the school." }
            }
        }
        Card {
            CardContent {
                div { class: "page-grid",
                    for message in MESSAGES {
                        div {
                            key: "{message.id}",
                            class: "approval-row",
                            style: "cursor: pointer; flex-direction: column; align-items: stretch;",
                            onclick: move |_| {
                                let current = *open_id.read();
                                open_id.set(if current == Some(message.id) { None } else { Some(message.id) });
                            },
                            div { style: "display: flex; justify-content: space-between; gap: 1rem;",
                                div {
                                    div { class: "approval-request", {message.subject} }
                                    div { class: "approval-meta", "{message.from} · {message.date}" }
                                }
                                if !message.read {
                                    Badge { variant: BadgeVariant::Primary, "New" }
                                }
                            }
                            if *open_id.read() == Some(message.id) {
                                p { class: "approval-meta", {message.preview} }
                            }
                        }
                    }
                }
            }
        }
    }
}
