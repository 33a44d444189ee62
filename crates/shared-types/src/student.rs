use serde::Serialize;

/// One row in the student master register.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Student {
    pub id: &'static str,
    pub name: &'static str,
    pub roll_no: &'static str,
    pub class: &'static str,
    pub section: &'static str,
    pub parent_name: &'static str,
    pub parent_phone: &'static str,
}

/// One student on a class attendance roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub roll_no: &'static str,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }
}

/// A class a teacher is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub students: u32,
}
