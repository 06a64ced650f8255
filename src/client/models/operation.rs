//! Asynchronous operation models: handles and status vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-side operation kinds that can be waited on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    Job,
    ReportExport,
    Scan,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Job => write!(f, "job"),
            OperationKind::ReportExport => write!(f, "report export"),
            OperationKind::Scan => write!(f, "scan"),
        }
    }
}

/// Opaque handle to an operation, parsed from the triggering action's response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationHandle {
    pub id: String,
    pub kind: OperationKind,
}

impl OperationHandle {
    pub fn new(id: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn job(id: impl Into<String>) -> Self {
        Self::new(id, OperationKind::Job)
    }
}

/// Canonical operation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationState {
    Pending,
    Running,
    Ready,
    Failed,
    Unknown,
}

impl OperationState {
    /// Map a vendor status string to a canonical state.
    ///
    /// The vocabulary differs per sub-API ("RUNNING", "In Process", "ready"...),
    /// so comparison ignores case and treats spaces, hyphens and underscores alike.
    pub fn from_vendor(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        match normalized.as_str() {
            "PENDING" | "QUEUED" | "CREATED" | "SCHEDULED" | "NEW" => OperationState::Pending,
            "RUNNING" | "IN_PROCESS" | "IN_PROGRESS" | "PROCESSING" | "STARTED" | "RESUMED" => {
                OperationState::Running
            }
            "FINISHED" | "READY" | "COMPLETED" | "COMPLETE" | "DONE" | "SUCCESS" => {
                OperationState::Ready
            }
            "FAILED" | "ERROR" | "CANCELED" | "CANCELLED" | "ABORTED" => OperationState::Failed,
            _ => OperationState::Unknown,
        }
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationState::Pending => "Pending",
            OperationState::Running => "Running",
            OperationState::Ready => "Ready",
            OperationState::Failed => "Failed",
            OperationState::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One observed status of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStatus {
    pub state: OperationState,

    /// Vendor status string as received (None when the field was missing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl OperationStatus {
    /// Build from an optional vendor status field.
    pub fn from_raw(raw: Option<String>) -> Self {
        let state = raw
            .as_deref()
            .map(OperationState::from_vendor)
            .unwrap_or(OperationState::Unknown);
        Self { state, raw }
    }

    pub fn raw_or_missing(&self) -> &str {
        self.raw.as_deref().unwrap_or("<missing>")
    }
}

impl From<OperationState> for OperationStatus {
    fn from(state: OperationState) -> Self {
        Self { state, raw: None }
    }
}

/// Body of a job/scan status response: `{"data": {"status": ...}}` or `{"status": ...}`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub data: Option<StatusData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StatusData {
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusEnvelope {
    pub fn into_status(self) -> OperationStatus {
        let raw = self
            .data
            .and_then(|d| d.status)
            .or(self.status)
            .or(self.state);
        OperationStatus::from_raw(raw)
    }
}

/// Job handle returned by "run policy": `{"jobId": ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobStarted {
    #[serde(alias = "id")]
    pub job_id: String,
}
