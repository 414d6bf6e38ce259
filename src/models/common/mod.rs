pub mod pagination;

pub use pagination::{PaginationInfo, PaginationQuery};
