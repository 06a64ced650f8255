//! Reusable command handlers

pub mod list;
pub mod lookup;
pub mod wait;

pub use list::run_list_command;
pub use lookup::{fetch_resolved, print_ensured, run_ensure_command, run_get_command};
pub use wait::wait_for;
