use serde::Serialize;

/// An admission application in the admin pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Admission {
    pub id: &'static str,
    pub student_name: &'static str,
    pub parent_name: &'static str,
    pub class: &'static str,
    pub submitted: &'static str,
    pub status: AdmissionStatus,
    pub phone: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionStatus {
    Pending,
    Approved,
    Rejected,
    Waitlisted,
}

impl AdmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionStatus::Pending => "pending",
            AdmissionStatus::Approved => "approved",
            AdmissionStatus::Rejected => "rejected",
            AdmissionStatus::Waitlisted => "waitlisted",
        }
    }
}
