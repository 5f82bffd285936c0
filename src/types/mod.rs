//! Shared types used across endpoints.

mod pagination;

pub use pagination::{Paginated, PaginatedMessages, PaginationMeta, PaginationParams};
