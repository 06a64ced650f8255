//! Resource API trait for lookup and creation

use async_trait::async_trait;

use crate::client::models::{CreateSpec, ResourceKind, ResourceRecord};
use crate::client::pagination::{PagedResponse, PaginationParams};
use crate::error::Result;

/// Named-resource operations (targets, policies, applications, ...)
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// List one page of a collection, optionally filtered by name.
    ///
    /// The server-side name filter is a substring/prefix match; callers must
    /// narrow results themselves.
    async fn list_resources(
        &self,
        kind: ResourceKind,
        name: Option<&str>,
        pagination: Option<&PaginationParams>,
    ) -> Result<PagedResponse<ResourceRecord>>;

    /// Fetch a single resource by ID.
    async fn get_resource(&self, kind: ResourceKind, id: &str) -> Result<ResourceRecord>;

    /// Create a resource and return the stored record including its new ID.
    async fn create_resource(&self, spec: &CreateSpec) -> Result<ResourceRecord>;
}
