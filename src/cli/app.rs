//! Application commands

use clap::Args;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_ensure_command;
use crate::client::models::{CreateSpec, ResourceKind};
use crate::error::Result;

/// Arguments for `app ensure`
#[derive(Args, Debug, Clone)]
pub struct AppEnsureArgs {
    /// Application name (matched exactly, ignoring case)
    pub name: String,

    /// Description of a newly created application
    #[arg(long)]
    pub description: Option<String>,
}

impl AppEnsureArgs {
    pub fn create_spec(&self) -> CreateSpec {
        let spec = CreateSpec::new(ResourceKind::Application, self.name.clone());
        match self.description {
            Some(ref description) => spec.attribute("description", description.clone()),
            None => spec,
        }
    }
}

/// Run the app ensure command
pub async fn ensure(opts: &GlobalOptions, args: &AppEnsureArgs) -> Result<()> {
    run_ensure_command(opts, args.create_spec()).await
}
