use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_types::admission::Admission;
use shared_types::governance::Certificate;
use shared_types::student::Student;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Column,
    PageActions, PageDescription, PageHeader, PageTitle, RecordTable, StatusBadge, TableFilter,
};

use crate::data::{admission_by_id, ADMISSIONS, CERTIFICATES, STUDENTS};
use crate::routes::Route;

fn admission_columns() -> Vec<Column<Admission>> {
    vec![
        Column::new("id", "Application", |a: &Admission| a.id.to_string()),
        Column::new("student", "Student", |a: &Admission| a.student_name.to_string()),
        Column::new("parent", "Parent", |a: &Admission| a.parent_name.to_string()),
        Column::new("class", "Class", |a: &Admission| a.class.to_string()),
        Column::new("submitted", "Submitted", |a: &Admission| a.submitted.to_string()),
        Column::new("status", "Status", |a: &Admission| a.status.as_str().to_string())
            .render(|a: &Admission| rsx! { StatusBadge { status: a.status.as_str().to_string() } }),
    ]
}

/// Admissions pipeline. The dataset spans multiple pages on purpose, so
/// search and status filters interact with pagination here.
#[component]
pub fn AdmissionsList() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Admissions" }
                PageDescription { "Applications for the next academic year." }
            }
            PageActions {
                Button { "New Application" }
            }
        }
        RecordTable::<Admission> {
            items: ADMISSIONS.to_vec(),
            columns: admission_columns(),
            key_of: |a: &Admission| a.id.to_string(),
            search_placeholder: "Search by student, parent, or class...",
            filters: vec![
                TableFilter {
                    key: "status",
                    label: "Status",
                    options: &["Pending", "Approved", "Rejected", "Waitlisted"],
                },
                TableFilter {
                    key: "class",
                    label: "Class",
                    options: &[
                        "Class 1", "Class 2", "Class 3", "Class 4", "Class 5", "Class 6",
                        "Class 7", "Class 8", "Class 9",
                    ],
                },
            ],
            on_row_click: move |a: Admission| {
                navigator().push(Route::AdmissionDetail { id: a.id.to_string() });
            },
            empty_message: "No applications match the current filters.",
        }
    }
}

/// One application, looked up by id from the static dataset.
#[component]
pub fn AdmissionDetail(id: String) -> Element {
    let Some(admission) = admission_by_id(&id) else {
        return rsx! {
            Card {
                CardContent {
                    p { "No application with id {id}." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::AdmissionsList {});
                        },
                        "Back to Admissions"
                    }
                }
            }
        };
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "{admission.student_name}" }
                PageDescription { "Application {admission.id} · submitted {admission.submitted}" }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        navigator().push(Route::AdmissionsList {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Back"
                }
                Button { "Approve" }
                Button { variant: ButtonVariant::Destructive, "Reject" }
            }
        }
        div { class: "two-col",
            Card {
                CardHeader {
                    CardTitle { "Application Details" }
                }
                CardContent {
                    dl { class: "detail-list",
                        dt { "Applying for" }
                        dd { {admission.class} }
                        dt { "Parent / Guardian" }
                        dd { {admission.parent_name} }
                        dt { "Phone" }
                        dd { {admission.phone} }
                        dt { "Email" }
                        dd { {admission.email} }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Status" }
                    CardDescription { "Current stage in the pipeline." }
                }
                CardContent {
                    StatusBadge { status: admission.status.as_str().to_string() }
                }
            }
        }
    }
}

fn student_columns() -> Vec<Column<Student>> {
    vec![
        Column::new("roll", "Roll No", |s: &Student| s.roll_no.to_string()),
        Column::new("name", "Name", |s: &Student| s.name.to_string()),
        Column::new("class", "Class", |s: &Student| s.class.to_string()),
        Column::new("section", "Section", |s: &Student| s.section.to_string()),
        Column::new("parent", "Parent", |s: &Student| s.parent_name.to_string()),
        Column::new("phone", "Parent Phone", |s: &Student| s.parent_phone.to_string()),
    ]
}

#[component]
pub fn StudentMaster() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Student Master" }
                PageDescription { "The enrolled student register." }
            }
        }
        RecordTable::<Student> {
            items: STUDENTS.to_vec(),
            columns: student_columns(),
            key_of: |s: &Student| s.id.to_string(),
            search_placeholder: "Search students...",
            filters: vec![TableFilter {
                key: "class",
                label: "Class",
                options: &["Class 8", "Class 9", "Class 10"],
            }],
        }
    }
}

fn certificate_columns() -> Vec<Column<Certificate>> {
    vec![
        Column::new("id", "Request", |c: &Certificate| c.id.to_string()),
        Column::new("student", "Student", |c: &Certificate| c.student.to_string()),
        Column::new("type", "Certificate", |c: &Certificate| c.cert_type.to_string()),
        Column::new("requested", "Requested", |c: &Certificate| c.requested.to_string()),
        Column::new("status", "Status", |c: &Certificate| c.status.to_string())
            .render(|c: &Certificate| rsx! { StatusBadge { status: c.status.to_string() } }),
    ]
}

#[component]
pub fn Certificates() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Certificates" }
                PageDescription { "Transfer, bonafide, and migration certificate requests." }
            }
        }
        RecordTable::<Certificate> {
            items: CERTIFICATES.to_vec(),
            columns: certificate_columns(),
            key_of: |c: &Certificate| c.id.to_string(),
            search_placeholder: "Search certificate requests...",
            actions: (|c: &Certificate| {
                let id = c.id;
                rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| tracing::info!(%id, "certificate issued"),
                        "Issue"
                    }
                }
            }) as fn(&Certificate) -> Element,
        }
    }
}
