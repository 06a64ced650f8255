//! znops - resolve-or-create resources and wait on jobs against the security orchestration API

use chrono::{SecondsFormat, Utc};
use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod ops;
mod output;

use cli::args::GlobalOptions;
use cli::{
    AppCommands, Cli, Commands, JobCommands, LookupCommands, PolicyCommands, ReportCommands,
    ScanCommands, TargetCommands,
};
use client::models::{OperationHandle, OperationKind, ResourceKind};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!(
            "[{}] Error: {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            err
        );
        std::process::exit(1);
    }
}

/// Log to stderr. `--debug` wins over `RUST_LOG`; the default is warnings only.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp_secs().init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Target(cmd) => match cmd {
            TargetCommands::List { name, pagination } => {
                cli::handlers::run_list_command(
                    &opts,
                    ResourceKind::Target,
                    name.as_deref(),
                    &pagination,
                )
                .await
            }
            TargetCommands::Get { lookup } => {
                cli::handlers::run_get_command(&opts, ResourceKind::Target, &lookup).await
            }
            TargetCommands::Ensure(args) => cli::target::ensure(&opts, &args).await,
        },
        Commands::Policy(cmd) => match cmd {
            PolicyCommands::List { name, pagination } => {
                cli::handlers::run_list_command(
                    &opts,
                    ResourceKind::Policy,
                    name.as_deref(),
                    &pagination,
                )
                .await
            }
            PolicyCommands::Get { lookup } => {
                cli::handlers::run_get_command(&opts, ResourceKind::Policy, &lookup).await
            }
            PolicyCommands::Ensure(args) => cli::policy::ensure(&opts, &args).await,
            PolicyCommands::Run { lookup, wait } => cli::policy::run(&opts, &lookup, &wait).await,
        },
        Commands::App(cmd) => match cmd {
            AppCommands::List { name, pagination } => {
                cli::handlers::run_list_command(
                    &opts,
                    ResourceKind::Application,
                    name.as_deref(),
                    &pagination,
                )
                .await
            }
            AppCommands::Get { lookup } => {
                cli::handlers::run_get_command(&opts, ResourceKind::Application, &lookup).await
            }
            AppCommands::Ensure(args) => cli::app::ensure(&opts, &args).await,
        },
        Commands::Integration(cmd) => run_lookup(&opts, ResourceKind::Integration, cmd).await,
        Commands::Scenario(cmd) => run_lookup(&opts, ResourceKind::Scenario, cmd).await,
        Commands::Job(cmd) => match cmd {
            JobCommands::Get { job_id } => {
                cli::operation::get(&opts, &OperationHandle::job(job_id)).await
            }
            JobCommands::Wait { job_id, poll } => {
                cli::operation::wait(&opts, &OperationHandle::job(job_id), &poll).await
            }
            JobCommands::Resume { job_id, wait } => {
                cli::operation::resume(&opts, &job_id, &wait).await
            }
        },
        Commands::Scan(cmd) => match cmd {
            ScanCommands::Get { scan_id } => {
                let handle = OperationHandle::new(scan_id, OperationKind::Scan);
                cli::operation::get(&opts, &handle).await
            }
            ScanCommands::Wait { scan_id, poll } => {
                let handle = OperationHandle::new(scan_id, OperationKind::Scan);
                cli::operation::wait(&opts, &handle, &poll).await
            }
        },
        Commands::Report(cmd) => match cmd {
            ReportCommands::Export(args) => cli::report::export(&opts, &args).await,
        },
    }
}

async fn run_lookup(opts: &GlobalOptions, kind: ResourceKind, cmd: LookupCommands) -> Result<()> {
    match cmd {
        LookupCommands::List { name, pagination } => {
            cli::handlers::run_list_command(opts, kind, name.as_deref(), &pagination).await
        }
        LookupCommands::Get { lookup } => cli::handlers::run_get_command(opts, kind, &lookup).await,
    }
}
