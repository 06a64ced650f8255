//! HTTP implementation of the API traits

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{ActionApi, OperationApi, ResourceApi};
use super::models::{
    CreateSpec, JobStarted, ListMeta, OperationHandle, OperationKind, OperationStatus,
    ReportExportRequest, ReportExportStarted, ResourceKind, ResourceRecord, StatusEnvelope,
};
use super::pagination::{PagedResponse, PaginationParams};
use crate::config::ApiKey;
use crate::error::{ApiError, Result};

/// Default API root
pub const DEFAULT_API_URL: &str = "https://api.zeronorth.io/v1";

/// Client-side pacing: 6 requests per second
const RATE_LIMIT_PER_SECOND: u32 = 6;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API client
pub struct ZnClient {
    http: HttpClient,
    base_url: String,
    api_key: ApiKey,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ZnClient {
    /// Create a client against the default API root
    pub fn new(api_key: ApiKey) -> Result<Self> {
        Self::with_base_url(api_key, None)
    }

    /// Create a client with an optional API root override (tests, staging)
    pub fn with_base_url(api_key: ApiKey, base_url: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN));

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            api_key,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and map non-2xx statuses to errors.
    ///
    /// Single attempt; nothing is retried.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {} {:?}", method, url, query);

        let mut request = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.api_key.expose());

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        check_status(response).await
    }

    /// Send a request and parse the JSON body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.send(method, path, query, body).await?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Protocol(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            ApiError::Protocol(format!(
                "Failed to parse response from {}: {}. Body was: {}",
                path,
                e,
                truncate(&text, 500)
            ))
            .into()
        })
    }
}

/// Map an HTTP response status to the error taxonomy.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
        StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
        StatusCode::NOT_FOUND => {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Resource not found".to_string());
            Err(ApiError::NotFound(body).into())
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Transport {
                status: status.as_u16(),
                body,
            }
            .into())
        }
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Status endpoint for an operation handle
fn status_path(handle: &OperationHandle) -> String {
    match handle.kind {
        OperationKind::Job => format!("/jobs/{}", handle.id),
        OperationKind::Scan => format!("/scans/{}", handle.id),
        OperationKind::ReportExport => format!("/reports/{}/status", handle.id),
    }
}

#[async_trait]
impl ResourceApi for ZnClient {
    async fn list_resources(
        &self,
        kind: ResourceKind,
        name: Option<&str>,
        pagination: Option<&PaginationParams>,
    ) -> Result<PagedResponse<ResourceRecord>> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("name", name.to_string()));
        }
        query.extend(pagination.cloned().unwrap_or_default().to_query_params());

        // Element 0 holds the records, element 1 the counts
        let (records, meta): (Vec<ResourceRecord>, ListMeta) =
            self.request_json(Method::GET, kind.path(), &query, None).await?;

        debug!(
            "{} list returned {} records, total={:?}",
            kind,
            records.len(),
            meta.total()
        );

        Ok(PagedResponse::new(records, meta.total()))
    }

    async fn get_resource(&self, kind: ResourceKind, id: &str) -> Result<ResourceRecord> {
        let path = format!("{}/{}", kind.path(), id);
        self.request_json(Method::GET, &path, &[], None).await
    }

    async fn create_resource(&self, spec: &CreateSpec) -> Result<ResourceRecord> {
        let body = spec.to_body();
        self.request_json(Method::POST, spec.kind.path(), &[], Some(&body))
            .await
    }
}

#[async_trait]
impl OperationApi for ZnClient {
    async fn operation_status(&self, handle: &OperationHandle) -> Result<OperationStatus> {
        let envelope: StatusEnvelope = self
            .request_json(Method::GET, &status_path(handle), &[], None)
            .await?;
        Ok(envelope.into_status())
    }
}

#[async_trait]
impl ActionApi for ZnClient {
    async fn run_policy(&self, policy_id: &str) -> Result<OperationHandle> {
        let path = format!("/policies/{}/run", policy_id);
        let started: JobStarted = self
            .request_json(Method::POST, &path, &[], Some(&Value::Object(Default::default())))
            .await?;
        Ok(OperationHandle::job(started.job_id))
    }

    async fn resume_job(&self, job_id: &str) -> Result<OperationHandle> {
        let path = format!("/jobs/{}/resume", job_id);
        self.send(Method::POST, &path, &[], Some(&Value::Object(Default::default())))
            .await?;
        Ok(OperationHandle::job(job_id))
    }

    async fn request_report_export(
        &self,
        request: &ReportExportRequest,
    ) -> Result<OperationHandle> {
        let body = serde_json::to_value(request)?;
        let started: ReportExportStarted = self
            .request_json(Method::POST, "/reports/export", &[], Some(&body))
            .await?;
        Ok(OperationHandle::new(
            started.report_id,
            OperationKind::ReportExport,
        ))
    }

    async fn download_report(&self, report_id: &str) -> Result<Vec<u8>> {
        let path = format!("/reports/{}/download", report_id);
        let response = self.send(Method::GET, &path, &[], None).await?;
        let bytes = response.bytes().await.map_err(ApiError::from)?;
        Ok(bytes.to_vec())
    }
}
