//! Generic list command handler
//!
//! Every resource list follows the same flow:
//! 1. Create command context
//! 2. Fetch one page with the server-side name filter
//! 3. Convert to display type
//! 4. Print output, with a hint on stderr when more pages exist

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::ResourceApi;
use crate::client::models::ResourceKind;
use crate::error::Result;
use crate::models::ResourceDisplay;
use crate::output::Formattable;

/// Run a list command for any resource kind.
pub async fn run_list_command(
    opts: &GlobalOptions,
    kind: ResourceKind,
    name: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let params = pagination.to_params(ctx.config.preferences.page_size);

    debug!("Listing {} (name filter: {:?}, {:?})", kind, name, params);

    let page = ctx.client.list_resources(kind, name, Some(&params)).await?;
    let received = page.items.len();
    let offset = params.offset.unwrap_or(0);

    debug!("Fetched {} {} records", received, kind);

    if page.has_more(offset + received, params.page_size()) {
        match page.total_count {
            Some(total) => eprintln!(
                "Showing {} of {} (use --offset {} for more)",
                received,
                total,
                offset + received
            ),
            None => eprintln!(
                "Showing {} (use --offset {} for more)",
                received,
                offset + received
            ),
        }
    }

    let display: Vec<ResourceDisplay> = page.items.into_iter().map(ResourceDisplay::from).collect();
    display.print(ctx.format)?;

    Ok(())
}
