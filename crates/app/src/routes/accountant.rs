use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCreditCard, LdTrendingUp, LdWallet};
use dioxus_free_icons::Icon;
use shared_types::fees::{format_rupees, PayStatus, Transaction};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Column,
    PageActions, PageDescription, PageHeader, PageTitle, RecordTable, StatsCard, StatusBadge,
    TableFilter,
};

use crate::data::{DEFAULTERS, TRANSACTIONS};

fn transaction_columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("id", "Receipt", |t: &Transaction| t.id.to_string()),
        Column::new("student", "Student", |t: &Transaction| t.student.to_string()),
        Column::new("class", "Class", |t: &Transaction| t.class.to_string()),
        Column::new("amount", "Amount", |t: &Transaction| format_rupees(t.amount)),
        Column::new("method", "Method", |t: &Transaction| t.method.to_string()),
        Column::new("date", "Date", |t: &Transaction| t.date.to_string()),
        Column::new("status", "Status", |t: &Transaction| t.status.as_str().to_string())
            .render(|t: &Transaction| rsx! { StatusBadge { status: t.status.as_str().to_string() } }),
    ]
}

#[component]
pub fn FeeCollection() -> Element {
    let collected: u32 = TRANSACTIONS
        .iter()
        .filter(|t| matches!(t.status, PayStatus::Completed | PayStatus::Paid))
        .map(|t| t.amount)
        .sum();
    let outstanding: u32 = DEFAULTERS.iter().map(|d| d.pending).sum();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Fee Collection" }
                PageDescription { "Receipts, dues, and follow-ups for the current term." }
            }
            PageActions {
                Button { "Record Payment" }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Collected This Month",
                value: format_rupees(collected),
                change: "+8.1% over last month",
                icon: rsx! { Icon::<LdWallet> { icon: LdWallet, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Outstanding Dues",
                value: format_rupees(outstanding),
                change: "{DEFAULTERS.len()} defaulters",
                positive: false,
                icon: rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Collection Rate",
                value: "91.4%",
                change: "Target 95%",
                icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 } },
            }
        }
        div { class: "two-col",
            div {
                RecordTable::<Transaction> {
                    items: TRANSACTIONS.to_vec(),
                    columns: transaction_columns(),
                    key_of: |t: &Transaction| t.id.to_string(),
                    search_placeholder: "Search by student or receipt...",
                    filters: vec![
                        TableFilter {
                            key: "status",
                            label: "Status",
                            options: &["Completed", "Pending", "Partial"],
                        },
                        TableFilter {
                            key: "method",
                            label: "Method",
                            options: &["UPI", "Card", "Cash", "Cheque"],
                        },
                    ],
                    empty_message: "No transactions match.".to_string(),
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Defaulter Follow-up" }
                    CardDescription { "Oldest dues first." }
                }
                CardContent {
                    div { class: "page-grid",
                        for defaulter in DEFAULTERS {
                            div { class: "approval-row",
                                div {
                                    div { class: "approval-request", {defaulter.student} }
                                    div { class: "approval-meta",
                                        "{defaulter.class} · {format_rupees(defaulter.pending)} · {defaulter.overdue_days} days overdue"
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let student = defaulter.student;
                                        move |_| tracing::info!(student, "payment reminder sent")
                                    },
                                    "Remind"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
