pub mod users;
pub mod workouts;
pub mod exercises;
pub mod page;

pub use page::{PageQuery, PageResponse};
