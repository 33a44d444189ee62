use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::facilities::BookLoan;
use shared_ui::{
    Button, ButtonVariant, Column, PageActions, PageDescription, PageHeader, PageTitle,
    RecordTable, StatsCard, StatusBadge, TableFilter,
};

use crate::data::BOOK_LOANS;

fn loan_columns() -> Vec<Column<BookLoan>> {
    vec![
        Column::new("title", "Title", |l: &BookLoan| l.title.to_string()),
        Column::new("student", "Student", |l: &BookLoan| l.student.to_string()),
        Column::new("issued", "Issued", |l: &BookLoan| l.issued.to_string()),
        Column::new("due", "Due", |l: &BookLoan| l.due.to_string()),
        Column::new("status", "Status", |l: &BookLoan| l.status.to_string())
            .render(|l: &BookLoan| rsx! { StatusBadge { status: l.status.to_string() } }),
    ]
}

#[component]
pub fn LibraryDashboard() -> Element {
    let out = BOOK_LOANS.iter().filter(|l| l.status != "Returned").count();
    let overdue = BOOK_LOANS.iter().filter(|l| l.status == "Overdue").count();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Library" }
                PageDescription { "Circulation desk for issued books." }
            }
            PageActions {
                Button { "Issue Book" }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Books On Loan",
                value: out.to_string(),
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Overdue Returns",
                value: overdue.to_string(),
                positive: overdue == 0,
                icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
            }
        }
        RecordTable::<BookLoan> {
            items: BOOK_LOANS.to_vec(),
            columns: loan_columns(),
            key_of: |l: &BookLoan| l.id.to_string(),
            search_placeholder: "Search titles or students...",
            filters: vec![TableFilter {
                key: "status",
                label: "Status",
                options: &["Issued", "Overdue", "Returned"],
            }],
            actions: (|l: &BookLoan| {
                let id = l.id;
                let returnable = l.status != "Returned";
                rsx! {
                    if returnable {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| tracing::info!(%id, "book marked returned"),
                            "Mark Returned"
                        }
                    }
                }
            }) as fn(&BookLoan) -> Element,
        }
    }
}
