pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod insight_card;
pub mod page_header;
pub mod sidebar;
pub mod stats_card;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use input::*;
pub use insight_card::*;
pub use page_header::*;
pub use sidebar::*;
pub use stats_card::*;
