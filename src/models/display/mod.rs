//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod operation;
mod resource;

pub use operation::OperationDisplay;
pub use resource::{MatchDisplay, ResourceDisplay};
