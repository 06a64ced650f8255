//! Reusable workflow building blocks
//!
//! - [`Resolver`] finds a named resource, or creates it, and never guesses
//!   between several matches.
//! - [`Poller`] waits for a job, report export or scan to finish.
//!
//! The two are independent; commands chain them as resolve → act → poll.

pub mod poller;
pub mod resolver;

pub use poller::{DEFAULT_POLL_INTERVAL, PollOptions, Poller};
pub use resolver::Resolver;
