use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::facilities::RoomAllocation;
use shared_ui::{
    Column, PageDescription, PageHeader, PageTitle, RecordTable, StatsCard, StatusBadge,
    TableFilter,
};

use crate::data::ROOMS;

fn room_columns() -> Vec<Column<RoomAllocation>> {
    vec![
        Column::new("room", "Room", |r: &RoomAllocation| r.room.to_string()),
        Column::new("block", "Block", |r: &RoomAllocation| r.block.to_string()),
        Column::new("occupancy", "Occupancy", |r: &RoomAllocation| {
            format!("{} / {}", r.occupied, r.capacity)
        }),
        Column::new("status", "Status", |r: &RoomAllocation| r.status.to_string())
            .render(|r: &RoomAllocation| rsx! { StatusBadge { status: r.status.to_string() } }),
    ]
}

#[component]
pub fn HostelDashboard() -> Element {
    let capacity: u32 = ROOMS.iter().map(|r| r.capacity).sum();
    let occupied: u32 = ROOMS.iter().map(|r| r.occupied).sum();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Hostel" }
                PageDescription { "Room allocation across blocks." }
            }
        }
        div { class: "stats-grid",
            StatsCard {
                title: "Rooms",
                value: ROOMS.len().to_string(),
                icon: rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 20, height: 20 } },
            }
            StatsCard {
                title: "Beds Occupied",
                value: "{occupied} / {capacity}",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
        }
        RecordTable::<RoomAllocation> {
            items: ROOMS.to_vec(),
            columns: room_columns(),
            key_of: |r: &RoomAllocation| r.room.to_string(),
            search_placeholder: "Search rooms or blocks...",
            filters: vec![TableFilter {
                key: "block",
                label: "Block",
                options: &["Block A", "Block B"],
            }],
        }
    }
}
