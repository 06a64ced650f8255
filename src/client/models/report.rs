//! Report export models

use serde::{Deserialize, Serialize};

/// Export file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// Body of a report export request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExportRequest {
    pub format: ReportFormat,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

/// Response to a report export request.
///
/// Different report endpoints name the handle `reportId`, `file` or `id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportExportStarted {
    #[serde(alias = "file", alias = "id")]
    pub report_id: String,
}
