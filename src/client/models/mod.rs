//! API data models
//!
//! Wire types for resource lookups, asynchronous operations and report exports.

mod operation;
mod report;
mod resource;

pub use operation::{OperationHandle, OperationKind, OperationState, OperationStatus};
pub(crate) use operation::{JobStarted, StatusEnvelope};
pub use report::ReportExportRequest;
pub use report::ReportFormat;
pub(crate) use report::ReportExportStarted;
pub use resource::{
    CreateSpec, ID_PREFIX, Identifier, ListMeta, MatchMode, RecordData, ResourceKind,
    ResourceMatch, ResourceQuery, ResourceRecord,
};
