//! Mock API client for testing
//!
//! Provides an in-memory implementation of the API traits so the resolver,
//! poller and command helpers can be tested without HTTP.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{ActionApi, OperationApi, ResourceApi};
use super::models::{
    CreateSpec, OperationHandle, OperationKind, OperationStatus, RecordData, ReportExportRequest,
    ResourceKind, ResourceRecord,
};
use super::pagination::{PagedResponse, PaginationParams};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockZnClient::new()
///     .with_records(ResourceKind::Target, vec![MockZnClient::record("t1", "web")])
///     .await;
///
/// let page = mock.list_resources(ResourceKind::Target, Some("web"), None).await?;
/// assert_eq!(page.items.len(), 1);
/// ```
#[derive(Default)]
pub struct MockZnClient {
    /// Stored records per kind; list applies a substring name filter like the server
    records: Arc<Mutex<HashMap<ResourceKind, Vec<ResourceRecord>>>>,
    /// Scripted statuses returned by operation_status, in order
    status_script: Arc<Mutex<VecDeque<std::result::Result<OperationStatus, ApiError>>>>,
    /// Status returned once the script is exhausted
    status_fallback: Arc<Mutex<Option<OperationStatus>>>,
    /// Error returned by the next create call - consumed on first use
    create_error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by the next call of any kind - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Report bodies by report ID
    reports: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    /// Job ID handed out by run_policy
    next_job_id: Arc<Mutex<Option<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Operation IDs queried, in order
    polled: Arc<Mutex<Vec<String>>>,
    /// Leave `count`/`totalCount` out of list responses
    omit_totals: Arc<Mutex<bool>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_resources: usize,
    pub get_resource: usize,
    pub create_resource: usize,
    pub operation_status: usize,
    pub run_policy: usize,
    pub resume_job: usize,
    pub request_report_export: usize,
    pub download_report: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_resources
            + self.get_resource
            + self.create_resource
            + self.operation_status
            + self.run_policy
            + self.resume_job
            + self.request_report_export
            + self.download_report
    }
}

impl MockZnClient {
    /// Create a new mock client with empty responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record with the name nested under `data`, as most collections do.
    pub fn record(id: &str, name: &str) -> ResourceRecord {
        ResourceRecord {
            id: id.to_string(),
            name: None,
            data: Some(RecordData {
                name: Some(name.to_string()),
                ..Default::default()
            }),
        }
    }

    /// Configure stored records for a kind.
    pub async fn with_records(self, kind: ResourceKind, records: Vec<ResourceRecord>) -> Self {
        self.records.lock().await.insert(kind, records);
        self
    }

    /// List responses carry no total, like endpoints that send `{}` as meta.
    pub async fn without_totals(self) -> Self {
        *self.omit_totals.lock().await = true;
        self
    }

    /// Configure the sequence of statuses returned by operation_status.
    pub async fn with_statuses(self, statuses: Vec<OperationStatus>) -> Self {
        *self.status_script.lock().await = statuses.into_iter().map(Ok).collect();
        self
    }

    /// Queue a failing poll after the currently scripted statuses.
    pub async fn with_status_error(self, error: ApiError) -> Self {
        self.status_script.lock().await.push_back(Err(error));
        self
    }

    /// Status repeated forever once the script runs out.
    pub async fn with_status_fallback(self, status: OperationStatus) -> Self {
        *self.status_fallback.lock().await = Some(status);
        self
    }

    /// Make the next create call fail.
    pub async fn with_create_error(self, error: ApiError) -> Self {
        *self.create_error.lock().await = Some(error);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure the body served for a report ID.
    pub async fn with_report(self, report_id: &str, body: &[u8]) -> Self {
        self.reports
            .lock()
            .await
            .insert(report_id.to_string(), body.to_vec());
        self
    }

    /// Configure the job ID returned by run_policy.
    pub async fn with_job_id(self, job_id: &str) -> Self {
        *self.next_job_id.lock().await = Some(job_id.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Operation IDs queried so far.
    pub async fn polled_ids(&self) -> Vec<String> {
        self.polled.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceApi for MockZnClient {
    async fn list_resources(
        &self,
        kind: ResourceKind,
        name: Option<&str>,
        pagination: Option<&PaginationParams>,
    ) -> Result<PagedResponse<ResourceRecord>> {
        self.call_count.lock().await.list_resources += 1;
        self.check_error().await?;

        // Server-side filter is a loose substring match
        let filtered: Vec<ResourceRecord> = self
            .records
            .lock()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|r| match name {
                Some(n) => r
                    .display_name()
                    .to_lowercase()
                    .contains(&n.to_lowercase()),
                None => true,
            })
            .collect();

        let total = filtered.len();
        let params = pagination.cloned().unwrap_or_default();
        let items = filtered
            .into_iter()
            .skip(params.offset.unwrap_or(0))
            .take(params.page_size())
            .collect();

        let total = if *self.omit_totals.lock().await {
            None
        } else {
            Some(total)
        };
        Ok(PagedResponse::new(items, total))
    }

    async fn get_resource(&self, kind: ResourceKind, id: &str) -> Result<ResourceRecord> {
        self.call_count.lock().await.get_resource += 1;
        self.check_error().await?;

        self.records
            .lock()
            .await
            .get(&kind)
            .and_then(|records| records.iter().find(|r| r.id == id).cloned())
            .ok_or_else(|| ApiError::NotFound(format!("{} {}", kind, id)).into())
    }

    async fn create_resource(&self, spec: &CreateSpec) -> Result<ResourceRecord> {
        let count = {
            let mut counts = self.call_count.lock().await;
            counts.create_resource += 1;
            counts.create_resource
        };
        self.check_error().await?;

        if let Some(e) = self.create_error.lock().await.take() {
            return Err(e.into());
        }

        let record = Self::record(&format!("created-{}", count), &spec.name);
        self.records
            .lock()
            .await
            .entry(spec.kind)
            .or_default()
            .push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl OperationApi for MockZnClient {
    async fn operation_status(&self, handle: &OperationHandle) -> Result<OperationStatus> {
        self.call_count.lock().await.operation_status += 1;
        self.polled.lock().await.push(handle.id.clone());
        self.check_error().await?;

        if let Some(next) = self.status_script.lock().await.pop_front() {
            return next.map_err(Into::into);
        }

        self.status_fallback
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Protocol("status script exhausted".to_string()).into())
    }
}

#[async_trait]
impl ActionApi for MockZnClient {
    async fn run_policy(&self, policy_id: &str) -> Result<OperationHandle> {
        self.call_count.lock().await.run_policy += 1;
        self.check_error().await?;

        let job_id = self
            .next_job_id
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| format!("job-for-{}", policy_id));
        Ok(OperationHandle::job(job_id))
    }

    async fn resume_job(&self, job_id: &str) -> Result<OperationHandle> {
        self.call_count.lock().await.resume_job += 1;
        self.check_error().await?;
        Ok(OperationHandle::job(job_id))
    }

    async fn request_report_export(
        &self,
        _request: &ReportExportRequest,
    ) -> Result<OperationHandle> {
        self.call_count.lock().await.request_report_export += 1;
        self.check_error().await?;
        Ok(OperationHandle::new("report-1", OperationKind::ReportExport))
    }

    async fn download_report(&self, report_id: &str) -> Result<Vec<u8>> {
        self.call_count.lock().await.download_report += 1;
        self.check_error().await?;

        self.reports
            .lock()
            .await
            .get(report_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("report {}", report_id)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::OperationState;

    #[tokio::test]
    async fn test_mock_list_filters_like_server() {
        let mock = MockZnClient::new()
            .with_records(
                ResourceKind::Target,
                vec![
                    MockZnClient::record("t1", "web"),
                    MockZnClient::record("t2", "webshop"),
                    MockZnClient::record("t3", "api"),
                ],
            )
            .await;

        let page = mock
            .list_resources(ResourceKind::Target, Some("WEB"), None)
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count, Some(2));
        assert_eq!(mock.call_counts().await.list_resources, 1);
    }

    #[tokio::test]
    async fn test_mock_list_pages() {
        let records = (0..5)
            .map(|i| MockZnClient::record(&format!("t{}", i), &format!("svc-{}", i)))
            .collect();
        let mock = MockZnClient::new()
            .with_records(ResourceKind::Target, records)
            .await;

        let params = PaginationParams::new().limit(2).offset(4);
        let page = mock
            .list_resources(ResourceKind::Target, None, Some(&params))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "t4");
        assert_eq!(page.total_count, Some(5));
    }

    #[tokio::test]
    async fn test_mock_one_shot_error() {
        let mock = MockZnClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(
            mock.list_resources(ResourceKind::Policy, None, None)
                .await
                .is_err()
        );
        assert!(
            mock.list_resources(ResourceKind::Policy, None, None)
                .await
                .is_ok()
        );
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_status_script_then_fallback() {
        let mock = MockZnClient::new()
            .with_statuses(vec![OperationState::Pending.into()])
            .await
            .with_status_fallback(OperationState::Running.into())
            .await;
        let handle = OperationHandle::job("j");

        let first = mock.operation_status(&handle).await.unwrap();
        let second = mock.operation_status(&handle).await.unwrap();
        let third = mock.operation_status(&handle).await.unwrap();
        assert_eq!(first.state, OperationState::Pending);
        assert_eq!(second.state, OperationState::Running);
        assert_eq!(third.state, OperationState::Running);
        assert_eq!(mock.polled_ids().await, vec!["j", "j", "j"]);
    }
}
