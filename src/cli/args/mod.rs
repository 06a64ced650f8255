//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod global;
mod lookup;
mod pagination;
mod wait;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use lookup::{LookupArgs, parse_key_value};
pub use pagination::PaginationArgs;
pub use wait::{PollArgs, WaitArgs, parse_duration};
