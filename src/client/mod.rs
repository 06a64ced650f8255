//! API client
//!
//! The API surface is split into focused traits (see [`api`]) so the resolver
//! and poller can be exercised against [`mock::MockZnClient`] in tests.

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod zn;

pub use api::{ActionApi, OperationApi, ResourceApi};
#[cfg(test)]
pub use mock::MockZnClient;
pub use pagination::{PagedResponse, PaginationParams};
pub use zn::{DEFAULT_API_URL, ZnClient};
