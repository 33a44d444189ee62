use serde::Serialize;

use crate::role::Role;

/// The demo session identity. Replaced wholesale when the role is switched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionUser {
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub avatar: Option<&'static str>,
}

impl SessionUser {
    /// The seeded demo user.
    pub fn demo_default() -> SessionUser {
        SessionUser {
            name: "Dr. Rajesh Kumar",
            email: "principal@demoschool.edu.in",
            role: Role::Principal,
            avatar: None,
        }
    }

    /// The demo role switcher replaces the whole record, not just the
    /// role field.
    pub fn with_role(role: Role) -> SessionUser {
        SessionUser { role, ..SessionUser::demo_default() }
    }

    /// Initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|word| word.chars().next().is_some_and(|c| c.is_alphabetic()))
            .take(2)
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// The demo school shown in the top navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct School {
    pub name: &'static str,
    pub academic_year: &'static str,
}

pub const DEMO_SCHOOL: School =
    School { name: "Delhi Public School", academic_year: "2024-25" };

/// Academic years offered by the year selector.
pub const ACADEMIC_YEARS: &[&str] = &["2024-25", "2023-24", "2022-23"];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initials_take_first_two_words() {
        let user = SessionUser::demo_default();
        assert_eq!(user.initials(), "DR");
    }

    #[test]
    fn with_role_replaces_only_the_role() {
        let user = SessionUser::with_role(Role::Librarian);
        assert_eq!(user.role, Role::Librarian);
        assert_eq!(user.name, SessionUser::demo_default().name);
    }
}
