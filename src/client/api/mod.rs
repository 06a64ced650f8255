//! API trait definitions split by responsibility
//!
//! - [`ResourceApi`] - list/get/create for named resources
//! - [`OperationApi`] - status of asynchronous operations
//! - [`ActionApi`] - actions that start asynchronous operations
//!
//! Callers bound on only the traits they use.

mod action;
mod operation;
mod resource;

pub use action::ActionApi;
pub use operation::OperationApi;
pub use resource::ResourceApi;
