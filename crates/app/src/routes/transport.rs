use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBus, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::facilities::TransportRoute;
use shared_ui::{
    Column, PageDescription, PageHeader, PageTitle, RecordTable, StatsCard, StatusBadge,
};

use crate::data::ROUTES;

fn route_columns() -> Vec<Column<TransportRoute>> {
    vec![
        Column::new("route", "Route", |r: &TransportRoute| r.route.to_string()),
        Column::new("driver", "Driver", |r: &TransportRoute| r.driver.to_string()),
        Column::new("vehicle", "Vehicle", |r: &TransportRoute| r.vehicle.to_string()),
        Column::new("students", "Students", |r: &TransportRoute| r.students.to_string()),
        Column::new("status", "Status", |r: &TransportRoute| r.status.to_string())
            .render(|r: &TransportRoute| rsx! { StatusBadge { status: r.status.to_string() } }),
    ]
}

#[component]
pub fn TransportDashboard() -> Element {
    let riders: u32 = ROUTES.iter().map(|r| r.students).sum();
    let delayed = ROUTES.iter().filter(|r| r.status != "On Time").count();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Transport" }
                PageDescription { "Bus routes, drivers, and live status." }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Active Routes",
                value: ROUTES.len().to_string(),
                change: if delayed > 0 { format!("{delayed} delayed") } else { "All on time".to_string() },
                positive: delayed == 0,
                icon: rsx! { Icon::<LdBus> { icon: LdBus, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Students Transported",
                value: riders.to_string(),
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
        }
        RecordTable::<TransportRoute> {
            items: ROUTES.to_vec(),
            columns: route_columns(),
            key_of: |r: &TransportRoute| r.route.to_string(),
            search_placeholder: "Search routes or drivers...",
        }
    }
}
