//! Role-keyed navigation tables and active-path resolution.
//!
//! Menus are static configuration built once at startup and never mutated.
//! The shell consults [`resolve`] on every render to lay out the sidebar.

use crate::role::Role;

/// Destination of the shared AI assistant entry. This path is matched
/// exactly, never by prefix, so the entry does not light up on unrelated
/// locations.
pub const AI_ASSISTANT_PATH: &str = "/ai-assistant";

/// Icon slot for a navigation entry. Kept renderer-agnostic here; the app
/// shell maps these to actual icon glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    CheckSquare,
    BarChart,
    Settings,
    Users,
    GraduationCap,
    FileText,
    CalendarCheck,
    BookOpen,
    ClipboardList,
    Calendar,
    Award,
    CreditCard,
    MessageSquare,
    Building,
    Bus,
    Bot,
}

/// One sidebar menu item tied to a destination path and the set of roles
/// it applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
    pub roles: &'static [Role],
    pub badge: Option<&'static str>,
    pub is_ai: bool,
}

impl NavEntry {
    /// Whether this entry is highlighted for the given location.
    ///
    /// Exact match always wins. Non-AI entries also match by prefix, since
    /// several roles share a path prefix between their dashboard and their
    /// primary resource entry. The AI entry is exact-match only.
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.path || (!self.is_ai && current_path.starts_with(self.path))
    }
}

const fn entry(
    label: &'static str,
    icon: NavIcon,
    path: &'static str,
    roles: &'static [Role],
) -> NavEntry {
    NavEntry { label, icon, path, roles, badge: None, is_ai: false }
}

const fn ai_entry(roles: &'static [Role]) -> NavEntry {
    NavEntry {
        label: "AI Assistant",
        icon: NavIcon::Bot,
        path: AI_ASSISTANT_PATH,
        roles,
        badge: None,
        is_ai: true,
    }
}

const PRINCIPAL_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/principal/dashboard", &[Role::Principal]),
    entry("Approvals", NavIcon::CheckSquare, "/principal/approvals", &[Role::Principal]),
    entry("Reports", NavIcon::BarChart, "/principal/reports", &[Role::Principal]),
    entry("Settings", NavIcon::Settings, "/principal/settings", &[Role::Principal]),
    ai_entry(&[Role::Principal]),
];

const ADMIN_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/principal/dashboard", &[Role::Admin]),
    entry("Admissions", NavIcon::Users, "/admin/admissions", &[Role::Admin]),
    entry("Students", NavIcon::GraduationCap, "/admin/students", &[Role::Admin]),
    entry("Certificates", NavIcon::FileText, "/admin/certificates", &[Role::Admin]),
    ai_entry(&[Role::Admin]),
];

const TEACHER_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/teacher/dashboard", &[Role::Teacher]),
    entry("Attendance", NavIcon::CalendarCheck, "/teacher/attendance", &[Role::Teacher]),
    entry("Lesson Plans", NavIcon::BookOpen, "/teacher/lessons", &[Role::Teacher]),
    entry("Exams", NavIcon::ClipboardList, "/teacher/exams", &[Role::Teacher]),
    ai_entry(&[Role::Teacher]),
];

const STUDENT_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/student/dashboard", &[Role::Student]),
    entry("Timetable", NavIcon::Calendar, "/student/timetable", &[Role::Student]),
    entry("Learning", NavIcon::BookOpen, "/student/learning", &[Role::Student]),
    entry("Results", NavIcon::Award, "/student/results", &[Role::Student]),
    ai_entry(&[Role::Student]),
];

const PARENT_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/parent/dashboard", &[Role::Parent]),
    entry("Fee Payment", NavIcon::CreditCard, "/parent/fees", &[Role::Parent]),
    entry("Communication", NavIcon::MessageSquare, "/parent/communication", &[Role::Parent]),
    ai_entry(&[Role::Parent]),
];

const ACCOUNTANT_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/accountant/fees", &[Role::Accountant]),
    entry("Fee Collection", NavIcon::CreditCard, "/accountant/fees", &[Role::Accountant]),
    ai_entry(&[Role::Accountant]),
];

const HOSTEL_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/hostel/dashboard", &[Role::HostelWarden]),
    entry("Room Management", NavIcon::Building, "/hostel/dashboard", &[Role::HostelWarden]),
    ai_entry(&[Role::HostelWarden]),
];

const TRANSPORT_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/transport/dashboard", &[Role::Transport]),
    entry("Vehicles", NavIcon::Bus, "/transport/dashboard", &[Role::Transport]),
    ai_entry(&[Role::Transport]),
];

const LIBRARIAN_MENU: &[NavEntry] = &[
    entry("Dashboard", NavIcon::Dashboard, "/library/dashboard", &[Role::Librarian]),
    entry("Books", NavIcon::BookOpen, "/library/dashboard", &[Role::Librarian]),
    ai_entry(&[Role::Librarian]),
];

/// Role-keyed menu table. Static configuration; order within each menu is
/// display order.
pub const ROLE_MENUS: &[(Role, &[NavEntry])] = &[
    (Role::Principal, PRINCIPAL_MENU),
    (Role::Admin, ADMIN_MENU),
    (Role::Teacher, TEACHER_MENU),
    (Role::Student, STUDENT_MENU),
    (Role::Parent, PARENT_MENU),
    (Role::Accountant, ACCOUNTANT_MENU),
    (Role::HostelWarden, HOSTEL_MENU),
    (Role::Transport, TRANSPORT_MENU),
    (Role::Librarian, LIBRARIAN_MENU),
];

/// Menu shown when a role has no configured entries. A misconfigured role
/// silently degrades to this set so the shell is never empty.
pub const FALLBACK_MENU: &[NavEntry] = PRINCIPAL_MENU;

fn lookup(table: &[(Role, &'static [NavEntry])], role: Role) -> &'static [NavEntry] {
    table
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, menu)| *menu)
        .unwrap_or(FALLBACK_MENU)
}

/// Ordered menu for a role, falling back to [`FALLBACK_MENU`] when the
/// role has no configured entries.
pub fn menu_for(role: Role) -> &'static [NavEntry] {
    lookup(ROLE_MENUS, role)
}

/// A menu entry paired with its highlight state for the current location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedNav {
    pub entry: &'static NavEntry,
    pub is_active: bool,
}

/// Resolve the sidebar for a role at the given location.
pub fn resolve(role: Role, current_path: &str) -> Vec<ResolvedNav> {
    menu_for(role)
        .iter()
        .map(|entry| ResolvedNav { entry, is_active: entry.is_active(current_path) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ALL_ROLES;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_menu_entry_declares_its_role() {
        for role in ALL_ROLES {
            for entry in menu_for(*role) {
                assert!(
                    entry.roles.contains(role),
                    "{} menu entry {:?} does not declare role {}",
                    role.as_str(),
                    entry.label,
                    role.as_str()
                );
            }
        }
    }

    #[test]
    fn every_menu_ends_with_the_ai_entry() {
        for role in ALL_ROLES {
            let menu = menu_for(*role);
            let last = menu.last().unwrap();
            assert!(last.is_ai);
            assert_eq!(last.path, AI_ASSISTANT_PATH);
            // Exactly one AI entry per menu.
            assert_eq!(menu.iter().filter(|e| e.is_ai).count(), 1);
        }
    }

    #[test]
    fn unconfigured_role_falls_back_to_principal_menu() {
        // Simulate a configuration gap by looking up against a table that
        // has no entry for the teacher role.
        let partial: Vec<(Role, &'static [NavEntry])> = ROLE_MENUS
            .iter()
            .copied()
            .filter(|(r, _)| *r != Role::Teacher)
            .collect();
        assert_eq!(lookup(&partial, Role::Teacher), FALLBACK_MENU);
        // Idempotent and deterministic.
        assert_eq!(lookup(&partial, Role::Teacher), lookup(&partial, Role::Teacher));
    }

    #[test]
    fn exact_path_is_active() {
        let entry = entry("Dashboard", NavIcon::Dashboard, "/teacher/dashboard", &[Role::Teacher]);
        assert!(entry.is_active("/teacher/dashboard"));
    }

    #[test]
    fn prefix_path_is_active_for_regular_entries() {
        let entry = entry("Dashboard", NavIcon::Dashboard, "/teacher/dashboard", &[Role::Teacher]);
        assert!(entry.is_active("/teacher/dashboard/foo"));
        assert!(!entry.is_active("/teacher/exams"));
    }

    #[test]
    fn ai_entry_is_exact_match_only() {
        let entry = ai_entry(&[Role::Teacher]);
        assert!(entry.is_active("/ai-assistant"));
        assert!(!entry.is_active("/ai-assistant/foo"));
    }

    #[test]
    fn resolve_marks_exactly_the_matching_entries() {
        let resolved = resolve(Role::Teacher, "/teacher/attendance");
        let active: Vec<&str> =
            resolved.iter().filter(|r| r.is_active).map(|r| r.entry.label).collect();
        assert_eq!(active, vec!["Attendance"]);
    }

    #[test]
    fn shared_dashboard_prefix_marks_both_entries() {
        // Accountant's dashboard and fee-collection entries intentionally
        // share a destination, so both highlight there.
        let resolved = resolve(Role::Accountant, "/accountant/fees");
        let active: Vec<&str> =
            resolved.iter().filter(|r| r.is_active).map(|r| r.entry.label).collect();
        assert_eq!(active, vec!["Dashboard", "Fee Collection"]);
    }

    #[test]
    fn resolve_is_deterministic() {
        let a = resolve(Role::Parent, "/parent/fees");
        let b = resolve(Role::Parent, "/parent/fees");
        assert_eq!(a, b);
    }

    #[test]
    fn menus_preserve_declaration_order() {
        let labels: Vec<&str> =
            menu_for(Role::Principal).iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Approvals", "Reports", "Settings", "AI Assistant"]);
    }
}
