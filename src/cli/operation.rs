//! Job and scan commands

use log::info;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::wait_for;
use crate::cli::{CommandContext, PollArgs, WaitArgs};
use crate::client::models::OperationHandle;
use crate::client::{ActionApi, OperationApi};
use crate::error::Result;
use crate::models::OperationDisplay;
use crate::output::Formattable;

/// One status query, no waiting
pub async fn get(opts: &GlobalOptions, handle: &OperationHandle) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    let status = ctx.client.operation_status(handle).await?;
    vec![OperationDisplay::with_status(handle, &status)].print(ctx.format)
}

/// Wait for a job or scan to finish
pub async fn wait(opts: &GlobalOptions, handle: &OperationHandle, poll: &PollArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    let status = wait_for(ctx.client.as_ref(), handle, poll.options(&ctx.config.poll)).await?;
    vec![OperationDisplay::with_status(handle, &status)].print(ctx.format)
}

/// Run the job resume command
pub async fn resume(opts: &GlobalOptions, job_id: &str, wait: &WaitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    let handle = ctx.client.resume_job(job_id).await?;
    info!("Resumed {} {}", handle.kind, handle.id);

    let display = if wait.wait {
        let status = wait_for(ctx.client.as_ref(), &handle, wait.poll.options(&ctx.config.poll))
            .await?;
        OperationDisplay::with_status(&handle, &status)
    } else {
        OperationDisplay::submitted(&handle)
    };

    vec![display].print(ctx.format)
}
