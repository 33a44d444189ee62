pub mod components;
pub mod table;
pub mod theme;

pub use components::*;
pub use table::{Column, TableFilter, ITEMS_PER_PAGE};
