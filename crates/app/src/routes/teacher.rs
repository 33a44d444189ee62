use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdCalendarCheck, LdClipboardList, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::academics::{ExamSchedule, LessonPlan};
use shared_types::student::{AttendanceStatus, RosterEntry};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Column,
    PageActions, PageDescription, PageHeader, PageTitle, RecordTable, StatsCard, StatusBadge,
    TableFilter,
};

use crate::data::{ATTENDANCE_ROSTER, EXAM_SCHEDULES, LESSON_PLANS, TEACHER_CLASSES};

#[component]
pub fn TeacherDashboard() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Teacher Dashboard" }
                PageDescription { "Your classes, plans, and assessments at a glance." }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Classes Assigned",
                value: TEACHER_CLASSES.len().to_string(),
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Attendance Pending",
                value: "2 classes",
                icon: rsx! { Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Lesson Plans in Draft",
                value: LESSON_PLANS
                    .iter()
                    .filter(|p| p.status.as_str() == "draft")
                    .count()
                    .to_string(),
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Upcoming Exams",
                value: EXAM_SCHEDULES.len().to_string(),
                icon: rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 } },
            }
        }
        Card {
            CardHeader {
                CardTitle { "My Classes" }
                CardDescription { "Sections you teach this year." }
            }
            CardContent {
                div { class: "stats-grid",
                    for group in TEACHER_CLASSES {
                        div { class: "approval-row",
                            div {
                                div { class: "approval-request", {group.name} }
                                div { class: "approval-meta", "{group.subject} · {group.students} students" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_cycle(status: AttendanceStatus) -> AttendanceStatus {
    match status {
        AttendanceStatus::Present => AttendanceStatus::Absent,
        AttendanceStatus::Absent => AttendanceStatus::Late,
        AttendanceStatus::Late => AttendanceStatus::Present,
    }
}

/// Mark attendance for one class. Tapping a status cycles it; the roster
/// lives in local state seeded from the demo data.
#[component]
pub fn TeacherAttendance() -> Element {
    let mut roster = use_signal(|| ATTENDANCE_ROSTER.to_vec());

    let present = roster.read().iter().filter(|r| r.status == AttendanceStatus::Present).count();
    let total = roster.read().len();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Attendance" }
                PageDescription { "Class 8-A · {present}/{total} present" }
            }
            PageActions {
                Button {
                    onclick: move |_| {
                        tracing::info!(present, total, "attendance submitted");
                    },
                    "Submit Attendance"
                }
            }
        }
        Card {
            CardContent {
                div { class: "page-grid",
                    for (i, entry) in roster.read().iter().enumerate() {
                        div { key: "{entry.id}", class: "approval-row",
                            div {
                                div { class: "approval-request", {entry.name} }
                                div { class: "approval-meta", "Roll {entry.roll_no}" }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    let mut list = roster.write();
                                    list[i].status = status_cycle(list[i].status);
                                },
                                StatusBadge { status: entry.status.as_str().to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn lesson_columns() -> Vec<Column<LessonPlan>> {
    vec![
        Column::new("title", "Lesson", |p: &LessonPlan| p.title.to_string()),
        Column::new("class", "Class", |p: &LessonPlan| p.class.to_string()),
        Column::new("date", "Planned For", |p: &LessonPlan| p.date.to_string()),
        Column::new("status", "Status", |p: &LessonPlan| p.status.as_str().to_string())
            .render(|p: &LessonPlan| rsx! { StatusBadge { status: p.status.as_str().to_string() } }),
    ]
}

#[component]
pub fn TeacherLessons() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Lesson Plans" }
                PageDescription { "Planner for the coming weeks." }
            }
            PageActions {
                Button { "New Lesson Plan" }
            }
        }
        RecordTable::<LessonPlan> {
            items: LESSON_PLANS.to_vec(),
            columns: lesson_columns(),
            key_of: |p: &LessonPlan| p.id.to_string(),
            search_placeholder: "Search lesson plans...",
            filters: vec![TableFilter {
                key: "status",
                label: "Status",
                options: &["Draft", "Review", "Approved", "Completed"],
            }],
        }
    }
}

fn exam_columns() -> Vec<Column<ExamSchedule>> {
    vec![
        Column::new("exam", "Exam", |e: &ExamSchedule| e.exam.to_string()),
        Column::new("class", "Class", |e: &ExamSchedule| e.class.to_string()),
        Column::new("date", "Date", |e: &ExamSchedule| e.date.to_string()),
        Column::new("marks", "Max Marks", |e: &ExamSchedule| e.max_marks.to_string()),
        Column::new("status", "Status", |e: &ExamSchedule| e.status.as_str().to_string())
            .render(|e: &ExamSchedule| rsx! { StatusBadge { status: e.status.as_str().to_string() } }),
    ]
}

#[component]
pub fn TeacherExams() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Exams" }
                PageDescription { "Scheduled assessments for your subjects." }
            }
            PageActions {
                Button { "Schedule Exam" }
            }
        }
        RecordTable::<ExamSchedule> {
            items: EXAM_SCHEDULES.to_vec(),
            columns: exam_columns(),
            key_of: |e: &ExamSchedule| e.id.to_string(),
            search_placeholder: "Search exams...",
        }
    }
}
