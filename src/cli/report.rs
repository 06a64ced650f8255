//! Report export commands

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::wait_for;
use crate::cli::{CommandContext, WaitArgs};
use crate::client::models::{
    OperationHandle, ReportExportRequest, ReportFormat, ResourceKind, ResourceQuery,
};
use crate::client::{ActionApi, ResourceApi};
use crate::error::Result;
use crate::models::OperationDisplay;
use crate::ops::Resolver;
use crate::output::Formattable;

/// Arguments for `report export`
#[derive(Args, Debug, Clone)]
pub struct ReportExportArgs {
    /// Report file type
    #[arg(long = "type", value_enum, default_value = "csv")]
    pub report_type: ReportFormat,

    /// Limit the report to one application (name or id:<ID>)
    #[arg(long)]
    pub app: Option<String>,

    #[command(flatten)]
    pub wait: WaitArgs,

    /// Write the finished report here instead of stdout (implies --wait)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl ReportExportArgs {
    fn waits(&self) -> bool {
        self.wait.wait || self.output.is_some()
    }
}

/// Resolve the optional application filter and request the export.
pub async fn start_export<C: ResourceApi + ActionApi + ?Sized>(
    client: &C,
    resolver: &Resolver<'_, C>,
    args: &ReportExportArgs,
) -> Result<OperationHandle> {
    let application_id = match args.app {
        Some(ref app) => Some(
            resolver
                .resolve(&ResourceQuery::new(ResourceKind::Application, app.clone()), None)
                .await?
                .id,
        ),
        None => None,
    };

    let request = ReportExportRequest {
        format: args.report_type,
        application_id,
    };
    client.request_report_export(&request).await
}

/// Run the report export command
pub async fn export(opts: &GlobalOptions, args: &ReportExportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    let handle = start_export(ctx.client.as_ref(), &ctx.resolver(), args).await?;
    info!("Requested {} {}", handle.kind, handle.id);

    if !args.waits() {
        return vec![OperationDisplay::submitted(&handle)].print(ctx.format);
    }

    wait_for(
        ctx.client.as_ref(),
        &handle,
        args.wait.poll.options(&ctx.config.poll),
    )
    .await?;
    let body = ctx.client.download_report(&handle.id).await?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &body)?;
            eprintln!("Saved {} bytes to {}", body.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&body)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
