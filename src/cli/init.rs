//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::models::ResourceKind;
use crate::client::{PaginationParams, ResourceApi, ZnClient};
use crate::config::{ApiKey, Config};
use crate::error::Result;

/// Run the init command
///
/// With `--key-file` the path is stored instead of the key itself.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to znops!".bold().green());
    println!("Let's set up your API access.\n");

    let mut config = Config::load_or_default_at(opts.config_ref())?;

    let api_key = match opts.key_file_ref() {
        Some(path) => {
            println!("Using key file {}", path.display().to_string().cyan());
            ApiKey::from_file(path)?
        }
        None => {
            let raw: String = Password::with_theme(&ColorfulTheme::default())
                .with_prompt("Paste your API key")
                .interact()?;
            ApiKey::new(&raw)?
        }
    };

    if let Some(ref url) = opts.api_url {
        config.api_url = Some(url.clone());
    }

    // Verify before saving
    println!("\n{}", "Verifying API key...".cyan());
    let client = ZnClient::with_base_url(api_key.clone(), config.api_url.clone())?;
    client
        .list_resources(
            ResourceKind::Scenario,
            None,
            Some(&PaginationParams::new().limit(1)),
        )
        .await?;
    println!("{}", "✓ API key accepted!".green());

    match opts.key_file {
        Some(ref path) => {
            config.api_key_file = Some(path.clone());
            config.api_key = None;
        }
        None => {
            config.api_key = Some(api_key.expose().to_string());
            config.api_key_file = None;
        }
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "znops status".cyan());
    println!("  {} - List targets", "znops target list".cyan());

    Ok(())
}
