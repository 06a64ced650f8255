//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod app;
pub mod args;
pub mod context;
pub mod handlers;
pub mod init;
pub mod operation;
pub mod policy;
pub mod progress;
pub mod report;
pub mod status;
pub mod target;

pub use args::{LookupArgs, OutputFormat, PaginationArgs, PollArgs, WaitArgs};
pub use context::CommandContext;

/// znops - resolve-or-create resources and wait on jobs against the security orchestration API
#[derive(Parser, Debug)]
#[command(name = "znops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ZNOPS_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "ZNOPS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Read the API key from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Override the API root URL
    #[arg(long, global = true, env = "ZNOPS_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ZNOPS_DEBUG", hide_env = true)]
    pub debug: bool,

    /// API key from the environment
    #[arg(long, env = "ZN_API_KEY", hide = true)]
    pub api_key: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store an API key in the config file
    Init,

    /// Show configuration and credential status
    Status,

    /// Manage targets
    #[command(subcommand)]
    Target(TargetCommands),

    /// Manage and run policies
    #[command(subcommand)]
    Policy(PolicyCommands),

    /// Manage applications
    #[command(subcommand)]
    App(AppCommands),

    /// Look up integrations
    #[command(subcommand)]
    Integration(LookupCommands),

    /// Look up scenarios
    #[command(subcommand)]
    Scenario(LookupCommands),

    /// Inspect, wait for and resume jobs
    #[command(subcommand)]
    Job(JobCommands),

    /// Inspect and wait for scans
    #[command(subcommand)]
    Scan(ScanCommands),

    /// Export reports
    #[command(subcommand)]
    Report(ReportCommands),
}

/// Read-only subcommands shared by integrations and scenarios
#[derive(Subcommand, Debug)]
pub enum LookupCommands {
    /// List resources, optionally filtered by name
    List {
        /// Server-side name filter (loose match)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show the single resource matching a name or id:<ID>
    Get {
        #[command(flatten)]
        lookup: LookupArgs,
    },
}

/// Target subcommands
#[derive(Subcommand, Debug)]
pub enum TargetCommands {
    /// List targets, optionally filtered by name
    List {
        /// Server-side name filter (loose match)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show the single target matching a name or id:<ID>
    Get {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Find a target by exact name, creating it if missing
    #[command(after_help = "EXAMPLES:\n  \
        znops target ensure web-frontend --integration github\n  \
        znops target ensure web-frontend --integration id:env-42 --param repo=org/web")]
    Ensure(target::TargetEnsureArgs),
}

/// Policy subcommands
#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    /// List policies, optionally filtered by name
    List {
        /// Server-side name filter (loose match)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show the single policy matching a name or id:<ID>
    Get {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Find a policy by exact name, creating it if missing
    Ensure(policy::PolicyEnsureArgs),

    /// Run a policy, optionally waiting for the job to finish
    #[command(after_help = "EXAMPLES:\n  \
        znops policy run nightly-sast\n  \
        znops policy run nightly-sast --wait --interval 30s --timeout 2h")]
    Run {
        #[command(flatten)]
        lookup: LookupArgs,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

/// Application subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// List applications, optionally filtered by name
    List {
        /// Server-side name filter (loose match)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show the single application matching a name or id:<ID>
    Get {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Find an application by exact name, creating it if missing
    Ensure(app::AppEnsureArgs),
}

/// Job subcommands
#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// Show the current status of a job
    Get {
        /// Job ID
        job_id: String,
    },

    /// Wait for a job to finish
    Wait {
        /// Job ID
        job_id: String,

        #[command(flatten)]
        poll: PollArgs,
    },

    /// Resume a paused job
    Resume {
        /// Job ID
        job_id: String,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

/// Scan subcommands
#[derive(Subcommand, Debug)]
pub enum ScanCommands {
    /// Show the current status of a scan
    Get {
        /// Scan ID
        scan_id: String,
    },

    /// Wait for a scan to finish
    Wait {
        /// Scan ID
        scan_id: String,

        #[command(flatten)]
        poll: PollArgs,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Request a report export and optionally download it
    #[command(after_help = "EXAMPLES:\n  \
        znops report export --app shop --wait --output shop.csv\n  \
        znops report export --type json --wait > issues.json")]
    Export(report::ReportExportArgs),
}
