//! Get and ensure handlers shared by all resource kinds

use log::info;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, LookupArgs};
use crate::client::ResourceApi;
use crate::client::models::{CreateSpec, ResourceKind, ResourceMatch, ResourceQuery, ResourceRecord};
use crate::error::Result;
use crate::models::{MatchDisplay, ResourceDisplay};
use crate::ops::Resolver;
use crate::output::Formattable;

/// Resolve `query` to exactly one resource and fetch its full record.
pub async fn fetch_resolved<C: ResourceApi + ?Sized>(
    client: &C,
    resolver: &Resolver<'_, C>,
    query: &ResourceQuery,
) -> Result<ResourceRecord> {
    let found = resolver.resolve(query, None).await?;
    client.get_resource(query.kind, &found.id).await
}

/// Run a get command for any resource kind.
pub async fn run_get_command(
    opts: &GlobalOptions,
    kind: ResourceKind,
    lookup: &LookupArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let record = fetch_resolved(ctx.client.as_ref(), &ctx.resolver(), &lookup.query(kind)).await?;

    vec![ResourceDisplay::from(record)].print(ctx.format)?;
    Ok(())
}

/// Print the outcome of an ensure.
pub fn print_ensured(ctx: &CommandContext, found: ResourceMatch) -> Result<()> {
    info!("Using {} ({})", found.name, found.id);
    vec![MatchDisplay::from(found)].print(ctx.format)
}

/// Run an ensure for a kind without parent resources.
pub async fn run_ensure_command(opts: &GlobalOptions, spec: CreateSpec) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let query = ResourceQuery::new(spec.kind, spec.name.clone());

    let found = ctx.resolver().resolve(&query, Some(&spec)).await?;
    print_ensured(&ctx, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockZnClient;
    use crate::error::{Error, ResolveError};

    #[tokio::test]
    async fn test_fetch_resolved_gets_full_record() {
        let mock = MockZnClient::new()
            .with_records(
                ResourceKind::Integration,
                vec![
                    MockZnClient::record("e-1", "github"),
                    MockZnClient::record("e-2", "github-enterprise"),
                ],
            )
            .await;
        let resolver = Resolver::new(&mock);

        let record = fetch_resolved(
            &mock,
            &resolver,
            &ResourceQuery::new(ResourceKind::Integration, "GitHub"),
        )
        .await
        .unwrap();

        assert_eq!(record.id, "e-1");
        let counts = mock.call_counts().await;
        assert_eq!(counts.list_resources, 1);
        assert_eq!(counts.get_resource, 1);
    }

    #[tokio::test]
    async fn test_fetch_resolved_not_found_skips_get() {
        let mock = MockZnClient::new();
        let resolver = Resolver::new(&mock);

        let err = fetch_resolved(
            &mock,
            &resolver,
            &ResourceQuery::new(ResourceKind::Scenario, "DAST"),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Resolve(ResolveError::NotFound { .. })));
        assert_eq!(mock.call_counts().await.get_resource, 0);
    }
}
