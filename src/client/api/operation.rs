//! Operation status API trait

use async_trait::async_trait;

use crate::client::models::{OperationHandle, OperationStatus};
use crate::error::Result;

/// Status queries for jobs, report exports and scans
#[async_trait]
pub trait OperationApi: Send + Sync {
    /// Query the current status of an operation.
    ///
    /// A response without a recognizable status yields
    /// [`OperationState::Unknown`](crate::client::models::OperationState::Unknown)
    /// rather than an error; the poller decides what that means.
    async fn operation_status(&self, handle: &OperationHandle) -> Result<OperationStatus>;
}
