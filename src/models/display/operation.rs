//! Operation display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{OperationHandle, OperationStatus};

/// Job/export/scan display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OperationDisplay {
    #[tabled(rename = "KIND")]
    pub kind: String,

    #[tabled(rename = "ID")]
    pub id: String,

    /// Canonical state, or "Submitted" when not yet queried
    #[tabled(rename = "STATE")]
    pub state: String,

    /// Vendor status string as received
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl OperationDisplay {
    /// Operation that was started but not waited on.
    pub fn submitted(handle: &OperationHandle) -> Self {
        Self {
            kind: handle.kind.to_string(),
            id: handle.id.clone(),
            state: "Submitted".to_string(),
            status: "--".to_string(),
        }
    }

    pub fn with_status(handle: &OperationHandle, status: &OperationStatus) -> Self {
        Self {
            kind: handle.kind.to_string(),
            id: handle.id.clone(),
            state: status.state.to_string(),
            status: status.raw_or_missing().to_string(),
        }
    }
}
