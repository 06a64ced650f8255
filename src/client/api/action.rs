//! Action API trait for operations that start server-side work

use async_trait::async_trait;

use crate::client::models::{OperationHandle, ReportExportRequest};
use crate::error::Result;

/// Actions returning a handle to an asynchronous operation
#[async_trait]
pub trait ActionApi: Send + Sync {
    /// Run a policy, producing a job.
    async fn run_policy(&self, policy_id: &str) -> Result<OperationHandle>;

    /// Resume a paused job. The returned handle refers to the same job.
    async fn resume_job(&self, job_id: &str) -> Result<OperationHandle>;

    /// Ask the server to build a report export.
    async fn request_report_export(&self, request: &ReportExportRequest)
    -> Result<OperationHandle>;

    /// Download a finished report export.
    async fn download_report(&self, report_id: &str) -> Result<Vec<u8>>;
}
