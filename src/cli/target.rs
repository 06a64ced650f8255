//! Target commands

use clap::Args;
use serde_json::{Map, Value};

use crate::cli::args::{GlobalOptions, parse_key_value};
use crate::cli::handlers::print_ensured;
use crate::cli::CommandContext;
use crate::client::ResourceApi;
use crate::client::models::{CreateSpec, ResourceKind, ResourceMatch, ResourceQuery};
use crate::error::Result;
use crate::ops::Resolver;

/// Arguments for `target ensure`
#[derive(Args, Debug, Clone)]
pub struct TargetEnsureArgs {
    /// Target name (matched exactly, ignoring case)
    pub name: String,

    /// Integration the target belongs to (name or id:<ID>)
    #[arg(long)]
    pub integration: String,

    /// Environment type of a newly created target
    #[arg(long)]
    pub env_type: Option<String>,

    /// Connection parameter for a newly created target (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

impl TargetEnsureArgs {
    /// Create spec for this target under `integration_id`.
    pub fn create_spec(&self, integration_id: &str) -> CreateSpec {
        let mut spec = CreateSpec::new(ResourceKind::Target, self.name.clone()).parent(integration_id);

        if let Some(ref env_type) = self.env_type {
            spec = spec.attribute("environmentType", env_type.clone());
        }
        if !self.params.is_empty() {
            let params: Map<String, Value> = self
                .params
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            spec = spec.attribute("parameters", Value::Object(params));
        }

        spec
    }
}

/// Resolve the integration (never created), then find or create the target.
pub async fn ensure_target<C: ResourceApi + ?Sized>(
    resolver: &Resolver<'_, C>,
    args: &TargetEnsureArgs,
) -> Result<ResourceMatch> {
    let integration = resolver
        .resolve(
            &ResourceQuery::new(ResourceKind::Integration, args.integration.clone()),
            None,
        )
        .await?;

    let spec = args.create_spec(&integration.id);
    resolver
        .resolve(&ResourceQuery::new(ResourceKind::Target, args.name.clone()), Some(&spec))
        .await
}

/// Run the target ensure command
pub async fn ensure(opts: &GlobalOptions, args: &TargetEnsureArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let found = ensure_target(&ctx.resolver(), args).await?;
    print_ensured(&ctx, found)
}
