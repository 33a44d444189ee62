pub mod nav;
pub mod role;
pub mod session;

// Domain record modules (one per school domain)
pub mod academics;
pub mod admission;
pub mod facilities;
pub mod fees;
pub mod governance;
pub mod insight;
pub mod student;

pub use nav::*;
pub use role::*;
pub use session::*;

pub use academics::*;
pub use admission::*;
pub use facilities::*;
pub use fees::*;
pub use governance::*;
pub use insight::*;
pub use student::*;
