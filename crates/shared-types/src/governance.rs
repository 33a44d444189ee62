use serde::Serialize;

use crate::academics::WorkStatus;

/// A request waiting on the principal's sign-off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Approval {
    pub id: &'static str,
    pub request: &'static str,
    pub requested_by: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub status: ApprovalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

/// A generated report available for download.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub generated: &'static str,
    pub status: WorkStatus,
}

/// A certificate request handled by the office.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Certificate {
    pub id: &'static str,
    pub student: &'static str,
    pub cert_type: &'static str,
    pub requested: &'static str,
    pub status: &'static str,
}
