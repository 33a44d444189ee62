pub mod accountant;
pub mod admin;
pub mod ai_assistant;
pub mod hostel;
pub mod library;
pub mod login;
pub mod onboarding;
pub mod parent;
pub mod principal;
pub mod role_switch;
pub mod student;
pub mod teacher;
pub mod transport;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAward, LdBookOpen, LdBot, LdBuilding, LdBus, LdCalendar, LdCalendarCheck, LdClipboardCheck,
    LdClipboardList, LdCreditCard, LdFileText, LdGraduationCap, LdLayoutDashboard,
    LdMessageSquare, LdSettings, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::nav::{self, NavIcon};
use shared_ui::{Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarMenu, SidebarMenuItem};

use crate::components::TopNav;
use crate::state::use_app;

use accountant::FeeCollection;
use admin::{AdmissionDetail, AdmissionsList, Certificates, StudentMaster};
use ai_assistant::AiAssistant;
use hostel::HostelDashboard;
use library::LibraryDashboard;
use login::Login;
use onboarding::Onboarding;
use parent::{ParentCommunication, ParentDashboard, ParentFees};
use principal::{PrincipalApprovals, PrincipalDashboard, PrincipalReports, PrincipalSettings};
use role_switch::RoleSwitch;
use student::{StudentDashboard, StudentLearning, StudentResults, StudentTimetable};
use teacher::{TeacherAttendance, TeacherDashboard, TeacherExams, TeacherLessons};
use transport::TransportDashboard;

/// Application routes. Bare role prefixes redirect to that role's landing
/// page; anything unrecognized lands on onboarding.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/role-switch")]
    RoleSwitch {},
    #[layout(AppLayout)]
    #[redirect("/principal", || Route::PrincipalDashboard {})]
    #[route("/principal/dashboard")]
    PrincipalDashboard {},
    #[route("/principal/approvals")]
    PrincipalApprovals {},
    #[route("/principal/reports")]
    PrincipalReports {},
    #[route("/principal/settings")]
    PrincipalSettings {},
    #[redirect("/admin", || Route::AdmissionsList {})]
    #[route("/admin/admissions")]
    AdmissionsList {},
    #[route("/admin/admissions/:id")]
    AdmissionDetail { id: String },
    #[route("/admin/students")]
    StudentMaster {},
    #[route("/admin/certificates")]
    Certificates {},
    #[redirect("/teacher", || Route::TeacherDashboard {})]
    #[route("/teacher/dashboard")]
    TeacherDashboard {},
    #[route("/teacher/attendance")]
    TeacherAttendance {},
    #[route("/teacher/lessons")]
    TeacherLessons {},
    #[route("/teacher/exams")]
    TeacherExams {},
    #[redirect("/student", || Route::StudentDashboard {})]
    #[route("/student/dashboard")]
    StudentDashboard {},
    #[route("/student/timetable")]
    StudentTimetable {},
    #[route("/student/learning")]
    StudentLearning {},
    #[route("/student/results")]
    StudentResults {},
    #[redirect("/parent", || Route::ParentDashboard {})]
    #[route("/parent/dashboard")]
    ParentDashboard {},
    #[route("/parent/fees")]
    ParentFees {},
    #[route("/parent/communication")]
    ParentCommunication {},
    #[redirect("/accountant", || Route::FeeCollection {})]
    #[route("/accountant/fees")]
    FeeCollection {},
    #[redirect("/hostel", || Route::HostelDashboard {})]
    #[route("/hostel/dashboard")]
    HostelDashboard {},
    #[redirect("/transport", || Route::TransportDashboard {})]
    #[route("/transport/dashboard")]
    TransportDashboard {},
    #[redirect("/library", || Route::LibraryDashboard {})]
    #[route("/library/dashboard")]
    LibraryDashboard {},
    #[route("/ai-assistant")]
    AiAssistant {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Unknown locations bounce straight to onboarding.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    navigator().replace(Route::Onboarding {});
    rsx! {
        div { class: "redirect-splash",
            p { "Redirecting..." }
        }
    }
}

fn nav_glyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::CheckSquare => rsx! { Icon::<LdClipboardCheck> { icon: LdClipboardCheck, width: 18, height: 18 } },
        NavIcon::BarChart => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::GraduationCap => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 } },
        NavIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::CalendarCheck => rsx! { Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 18, height: 18 } },
        NavIcon::BookOpen => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::ClipboardList => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Award => rsx! { Icon::<LdAward> { icon: LdAward, width: 18, height: 18 } },
        NavIcon::CreditCard => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        NavIcon::MessageSquare => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        NavIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Bus => rsx! { Icon::<LdBus> { icon: LdBus, width: 18, height: 18 } },
        NavIcon::Bot => rsx! { Icon::<LdBot> { icon: LdBot, width: 18, height: 18 } },
    }
}

/// Main app shell: role-resolved sidebar, top navigation, routed content.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let app = use_app();

    let role = app.role();
    let current_path = route.to_string();
    let resolved = nav::resolve(role, &current_path);
    let collapsed = *app.sidebar_collapsed.read();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "app-shell",
            Sidebar { collapsed,
                SidebarHeader {
                    Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 22, height: 22 }
                    div { class: "sidebar-header-text",
                        span { class: "sidebar-brand-name", "SchoolOS" }
                        span { class: "sidebar-brand-sub", {shared_types::DEMO_SCHOOL.name} }
                    }
                }
                SidebarContent {
                    SidebarMenu {
                        for item in resolved {
                            SidebarMenuItem {
                                active: item.is_active,
                                ai: item.entry.is_ai,
                                onclick: move |_| {
                                    navigator().push(item.entry.path);
                                },
                                {nav_glyph(item.entry.icon)}
                                span { class: "sidebar-label", {item.entry.label} }
                                if let Some(badge) = item.entry.badge {
                                    span { class: "sidebar-badge", "{badge}" }
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    SidebarMenu {
                        SidebarMenuItem {
                            onclick: move |_| {
                                navigator().push(Route::RoleSwitch {});
                            },
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            span { class: "sidebar-label", "Switch Role" }
                        }
                    }
                }
            }
            div { class: "app-main",
                TopNav {}
                main { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_print_their_paths() {
        assert_eq!(Route::PrincipalDashboard {}.to_string(), "/principal/dashboard");
        assert_eq!(
            Route::AdmissionDetail { id: "ADM-2024-001".into() }.to_string(),
            "/admin/admissions/ADM-2024-001"
        );
        assert_eq!(Route::AiAssistant {}.to_string(), "/ai-assistant");
    }

    #[test]
    fn bare_role_prefixes_redirect_to_landing_pages() {
        assert_eq!("/principal".parse::<Route>().unwrap(), Route::PrincipalDashboard {});
        assert_eq!("/admin".parse::<Route>().unwrap(), Route::AdmissionsList {});
        assert_eq!("/accountant".parse::<Route>().unwrap(), Route::FeeCollection {});
        assert_eq!("/library".parse::<Route>().unwrap(), Route::LibraryDashboard {});
    }

    #[test]
    fn unknown_paths_fall_through_to_the_catch_all() {
        assert_eq!(
            "/no/such/page".parse::<Route>().unwrap(),
            Route::NotFound { segments: vec!["no".into(), "such".into(), "page".into()] }
        );
    }

    #[test]
    fn every_nav_destination_parses_to_a_route() {
        for (_, menu) in nav::ROLE_MENUS {
            for entry in *menu {
                let parsed = entry.path.parse::<Route>().unwrap();
                assert!(
                    !matches!(parsed, Route::NotFound { .. }),
                    "menu path {} does not resolve",
                    entry.path
                );
            }
        }
    }
}
