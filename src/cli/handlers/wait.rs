//! Wait on an operation with a progress spinner

use std::time::Instant;

use log::info;

use crate::cli::progress::PollProgress;
use crate::client::OperationApi;
use crate::client::models::{OperationHandle, OperationStatus};
use crate::error::Result;
use crate::ops::{PollOptions, Poller};
use crate::output::formatters::format_elapsed;

/// Poll `handle` to completion, showing progress on stderr.
pub async fn wait_for<C: OperationApi + ?Sized>(
    client: &C,
    handle: &OperationHandle,
    options: PollOptions,
) -> Result<OperationStatus> {
    info!(
        "Waiting for {} {} (interval {:?}, timeout {:?})",
        handle.kind, handle.id, options.interval, options.timeout
    );

    let progress = PollProgress::start(handle);
    let started = Instant::now();
    let result = Poller::new(client, options)
        .await_completion_with(handle, |status, poll| progress.observe(status, poll))
        .await;
    progress.finish();

    if result.is_ok() {
        info!(
            "{} {} finished after {}",
            handle.kind,
            handle.id,
            format_elapsed(started.elapsed())
        );
    }
    result
}
