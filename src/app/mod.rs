//! Application layer: the service bundle and helpers built on the traits.

pub mod api;
pub mod pagination;

pub use api::{BackendStatus, BlockfrostApi};
pub use pagination::collect_all_pages;
