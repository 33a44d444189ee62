use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdAward, LdBookOpen, LdCalendar, LdCalendarCheck};
use dioxus_free_icons::Icon;
use shared_types::academics::{ExamResult, TimetableSlot};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Column,
    PageDescription, PageHeader, PageTitle, RecordTable, StatsCard,
};

use crate::data::{EXAM_RESULTS, LEARNING_RESOURCES, TIMETABLE};

#[component]
pub fn StudentDashboard() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "My Dashboard" }
                PageDescription { "Today's schedule and your progress." }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Attendance",
                value: "94.2%",
                change: "This term",
                icon: rsx! { Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Periods Today",
                value: TIMETABLE.len().to_string(),
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Materials In Progress",
                value: LEARNING_RESOURCES
                    .iter()
                    .filter(|r| r.progress > 0 && r.progress < 100)
                    .count()
                    .to_string(),
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Last Exam Average",
                value: "85%",
                change: "+4% over Unit Test 2",
                icon: rsx! { Icon::<LdAward> { icon: LdAward, width: 20, height: 20 } },
            }
        }
        Card {
            CardHeader {
                CardTitle { "Today's Periods" }
                CardDescription { "Class 8-A timetable for the day." }
            }
            CardContent {
                div { class: "page-grid",
                    for slot in TIMETABLE.iter().take(4) {
                        div { class: "approval-row",
                            div {
                                div { class: "approval-request", {slot.subject} }
                                div { class: "approval-meta", "{slot.time} · {slot.teacher} · Room {slot.room}" }
                            }
                            Badge { variant: BadgeVariant::Outline, "Period {slot.period}" }
                        }
                    }
                }
            }
        }
    }
}

fn timetable_columns() -> Vec<Column<TimetableSlot>> {
    vec![
        Column::new("period", "Period", |s: &TimetableSlot| s.period.to_string()),
        Column::new("time", "Time", |s: &TimetableSlot| s.time.to_string()),
        Column::new("subject", "Subject", |s: &TimetableSlot| s.subject.to_string()),
        Column::new("teacher", "Teacher", |s: &TimetableSlot| s.teacher.to_string()),
        Column::new("room", "Room", |s: &TimetableSlot| s.room.to_string()),
    ]
}

#[component]
pub fn StudentTimetable() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Timetable" }
                PageDescription { "Weekly schedule for Class 8-A." }
            }
        }
        RecordTable::<TimetableSlot> {
            items: TIMETABLE.to_vec(),
            columns: timetable_columns(),
            key_of: |s: &TimetableSlot| s.period.to_string(),
            search_placeholder: "Search subjects or teachers...",
        }
    }
}

#[component]
pub fn StudentLearning() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./learning.css") }
        PageHeader {
            div {
                PageTitle { "Learning" }
                PageDescription { "Self-paced material shared by your teachers." }
            }
        }
        div { class: "learning-grid",
            for resource in LEARNING_RESOURCES {
                Card {
                    CardContent {
                        div { class: "learning-top",
                            Badge { variant: BadgeVariant::Secondary, {resource.kind} }
                            span { class: "learning-duration", {resource.duration} }
                        }
                        div { class: "learning-title", {resource.title} }
                        div { class: "learning-subject", {resource.subject} }
                        div { class: "learning-progress-track",
                            div {
                                class: "learning-progress-fill",
                                style: "width: {resource.progress}%",
                            }
                        }
                        span { class: "learning-progress-label", "{resource.progress}% complete" }
                    }
                }
            }
        }
    }
}

fn result_columns() -> Vec<Column<ExamResult>> {
    vec![
        Column::new("subject", "Subject", |r: &ExamResult| r.subject.to_string()),
        Column::new("exam", "Exam", |r: &ExamResult| r.exam.to_string()),
        Column::new("marks", "Marks", |r: &ExamResult| {
            format!("{} / {}", r.obtained, r.max_marks)
        }),
        Column::new("grade", "Grade", |r: &ExamResult| r.grade.to_string())
            .render(|r: &ExamResult| rsx! { Badge { variant: BadgeVariant::Primary, {r.grade} } }),
    ]
}

#[component]
pub fn StudentResults() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "Results" }
                PageDescription { "Published marks for the half yearly examination." }
            }
        }
        RecordTable::<ExamResult> {
            items: EXAM_RESULTS.to_vec(),
            columns: result_columns(),
            key_of: |r: &ExamResult| r.subject.to_string(),
            search_placeholder: "Search subjects...",
        }
    }
}
