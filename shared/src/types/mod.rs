//! Common types shared across layers

pub mod pagination;
pub mod response;

pub use pagination::PaginationParams;
pub use response::{ApiResponse, MessageResponse};
