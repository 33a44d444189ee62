use serde::Serialize;

/// A hostel room and its occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomAllocation {
    pub room: &'static str,
    pub block: &'static str,
    pub capacity: u32,
    pub occupied: u32,
    pub status: &'static str,
}

/// A bus route with its assigned vehicle and driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransportRoute {
    pub route: &'static str,
    pub driver: &'static str,
    pub vehicle: &'static str,
    pub students: u32,
    pub status: &'static str,
}

/// A library book currently on loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookLoan {
    pub id: &'static str,
    pub title: &'static str,
    pub student: &'static str,
    pub issued: &'static str,
    pub due: &'static str,
    pub status: &'static str,
}

/// A message in the parent communication inbox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Message {
    pub id: &'static str,
    pub from: &'static str,
    pub subject: &'static str,
    pub preview: &'static str,
    pub date: &'static str,
    pub read: bool,
}
