pub mod common;
pub mod courses;
pub mod courseworks;
pub mod enrollments;
pub mod resources;
pub mod submissions;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
