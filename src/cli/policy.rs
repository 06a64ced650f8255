//! Policy commands

use clap::Args;
use log::info;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{print_ensured, wait_for};
use crate::cli::{CommandContext, LookupArgs, WaitArgs};
use crate::client::models::{
    CreateSpec, OperationHandle, ResourceKind, ResourceMatch, ResourceQuery,
};
use crate::client::{ActionApi, ResourceApi};
use crate::error::Result;
use crate::models::OperationDisplay;
use crate::ops::Resolver;
use crate::output::Formattable;

/// Arguments for `policy ensure`
#[derive(Args, Debug, Clone)]
pub struct PolicyEnsureArgs {
    /// Policy name (matched exactly, ignoring case)
    pub name: String,

    /// Target the policy scans (name or id:<ID>)
    #[arg(long)]
    pub target: String,

    /// Integration the target belongs to (name or id:<ID>)
    #[arg(long)]
    pub integration: String,

    /// Scenario to run (name or id:<ID>)
    #[arg(long)]
    pub scenario: String,

    /// Description of a newly created policy
    #[arg(long)]
    pub description: Option<String>,
}

/// Resolve target, integration and scenario, then find or create the policy.
///
/// None of the referenced resources is created here.
pub async fn ensure_policy<C: ResourceApi + ?Sized>(
    resolver: &Resolver<'_, C>,
    args: &PolicyEnsureArgs,
) -> Result<ResourceMatch> {
    let target = resolver
        .resolve(&ResourceQuery::new(ResourceKind::Target, args.target.clone()), None)
        .await?;
    let integration = resolver
        .resolve(
            &ResourceQuery::new(ResourceKind::Integration, args.integration.clone()),
            None,
        )
        .await?;
    let scenario = resolver
        .resolve(&ResourceQuery::new(ResourceKind::Scenario, args.scenario.clone()), None)
        .await?;

    let mut spec = CreateSpec::new(ResourceKind::Policy, args.name.clone())
        .parent(target.id)
        .attribute("environmentId", integration.id)
        .attribute("scenarioIds", json!([scenario.id]));
    if let Some(ref description) = args.description {
        spec = spec.attribute("description", description.clone());
    }

    resolver
        .resolve(&ResourceQuery::new(ResourceKind::Policy, args.name.clone()), Some(&spec))
        .await
}

/// Resolve a policy and start a run; returns the job handle.
pub async fn start_run<C: ResourceApi + ActionApi + ?Sized>(
    client: &C,
    resolver: &Resolver<'_, C>,
    query: &ResourceQuery,
) -> Result<(ResourceMatch, OperationHandle)> {
    let policy = resolver.resolve(query, None).await?;
    let handle = client.run_policy(&policy.id).await?;
    Ok((policy, handle))
}

/// Run the policy ensure command
pub async fn ensure(opts: &GlobalOptions, args: &PolicyEnsureArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let found = ensure_policy(&ctx.resolver(), args).await?;
    print_ensured(&ctx, found)
}

/// Run the policy run command
pub async fn run(opts: &GlobalOptions, lookup: &LookupArgs, wait: &WaitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let query = lookup.query(ResourceKind::Policy);

    let (policy, handle) = start_run(ctx.client.as_ref(), &ctx.resolver(), &query).await?;
    info!("Started {} {} for policy {}", handle.kind, handle.id, policy.name);

    let display = if wait.wait {
        let options = wait.poll.options(&ctx.config.poll);
        let status = wait_for(ctx.client.as_ref(), &handle, options).await?;
        OperationDisplay::with_status(&handle, &status)
    } else {
        OperationDisplay::submitted(&handle)
    };

    vec![display].print(ctx.format)
}
