use serde::Serialize;

/// A period in the weekly timetable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimetableSlot {
    pub period: u32,
    pub time: &'static str,
    pub subject: &'static str,
    pub teacher: &'static str,
    pub room: &'static str,
}

/// A planned lesson in the teacher's planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LessonPlan {
    pub id: &'static str,
    pub title: &'static str,
    pub subject: &'static str,
    pub class: &'static str,
    pub date: &'static str,
    pub status: WorkStatus,
}

/// A scheduled examination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExamSchedule {
    pub id: &'static str,
    pub exam: &'static str,
    pub subject: &'static str,
    pub class: &'static str,
    pub date: &'static str,
    pub max_marks: u32,
    pub status: WorkStatus,
}

/// A published exam result for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExamResult {
    pub exam: &'static str,
    pub subject: &'static str,
    pub max_marks: u32,
    pub obtained: u32,
    pub grade: &'static str,
}

/// Self-paced learning material for students.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LearningResource {
    pub id: &'static str,
    pub title: &'static str,
    pub subject: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub progress: u32,
}

/// Lifecycle of planner items (lessons, exams, reports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    Draft,
    Review,
    Approved,
    Completed,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Draft => "draft",
            WorkStatus::Review => "review",
            WorkStatus::Approved => "approved",
            WorkStatus::Completed => "completed",
        }
    }
}
