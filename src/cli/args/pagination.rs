//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Number of results to skip
    #[arg(long)]
    pub offset: Option<usize>,
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params.
    ///
    /// `page_size` comes from the config preferences and is used when no
    /// `--limit` is given.
    pub fn to_params(&self, page_size: usize) -> PaginationParams {
        let mut params = PaginationParams::new().limit(self.limit.unwrap_or(page_size));

        if let Some(offset) = self.offset {
            params = params.offset(offset);
        }

        params
    }
}
