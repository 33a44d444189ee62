use serde::{Deserialize, Serialize};

/// User roles available in the demo. Exactly one role is active per
/// session; switching roles replaces the whole session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Principal,
    Admin,
    Teacher,
    Student,
    Parent,
    Accountant,
    HostelWarden,
    Transport,
    Librarian,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Principal,
    Role::Admin,
    Role::Teacher,
    Role::Student,
    Role::Parent,
    Role::Accountant,
    Role::HostelWarden,
    Role::Transport,
    Role::Librarian,
];

impl Role {
    /// Stable key used in configuration tables and serialized forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Principal => "principal",
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Accountant => "accountant",
            Role::HostelWarden => "hostel_warden",
            Role::Transport => "transport",
            Role::Librarian => "librarian",
        }
    }

    /// Parse a role key; unknown keys are a configuration error, not a
    /// fallback case, so this returns `None` rather than guessing.
    pub fn from_key(s: &str) -> Option<Role> {
        ALL_ROLES.iter().copied().find(|r| r.as_str() == s)
    }

    /// Human-readable name for badges and labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Principal => "Principal",
            Role::Admin => "Admin / Office",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Accountant => "Accountant",
            Role::HostelWarden => "Hostel Warden",
            Role::Transport => "Transport Manager",
            Role::Librarian => "Librarian",
        }
    }

    /// One-line summary shown on the role picker.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Principal => "Full access to all modules, approvals, and analytics",
            Role::Admin => "Manage admissions, students, staff, and daily operations",
            Role::Teacher => "Attendance, lesson planning, exams, and gradebook",
            Role::Student => "View timetable, assignments, results, and materials",
            Role::Parent => "Track children's progress, fees, and communication",
            Role::Accountant => "Fee configuration, collections, and financial reports",
            Role::HostelWarden => "Room allocation, leave management, and incidents",
            Role::Transport => "Route management, vehicle tracking, and student mapping",
            Role::Librarian => "Book management, issue/return, and inventory",
        }
    }

    /// Landing page after selecting this role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Principal => "/principal/dashboard",
            Role::Admin => "/admin/admissions",
            Role::Teacher => "/teacher/dashboard",
            Role::Student => "/student/dashboard",
            Role::Parent => "/parent/dashboard",
            Role::Accountant => "/accountant/fees",
            Role::HostelWarden => "/hostel/dashboard",
            Role::Transport => "/transport/dashboard",
            Role::Librarian => "/library/dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_key_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_key(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn unknown_role_key_is_none() {
        assert_eq!(Role::from_key("superuser"), None);
        assert_eq!(Role::from_key(""), None);
    }

    #[test]
    fn all_roles_list_is_complete() {
        assert_eq!(ALL_ROLES.len(), 9);
    }

    #[test]
    fn default_role_is_principal() {
        assert_eq!(Role::default(), Role::Principal);
    }
}
