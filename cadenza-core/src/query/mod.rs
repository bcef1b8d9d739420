pub mod service;
pub mod sorting;

pub use service::QueryService;
pub use sorting::{SortBy, sort_records};
