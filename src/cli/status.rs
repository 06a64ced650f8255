//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{Config, MIN_API_KEY_LEN};
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status.
///
/// Makes no API calls.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "znops Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_from(&config_path) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!(
                "{} No config file at {}",
                "○".dimmed(),
                config_path.display()
            );
            Config::default()
        }
        Err(e) => return Err(e),
    };

    println!();

    // API key status
    match config.key_source(opts.key_file_ref(), opts.api_key_ref()) {
        Some(source) => match config.api_key_from(opts.key_file_ref(), opts.api_key_ref()) {
            Ok(key) => println!(
                "{} API key from {} ({} bytes)",
                "✓".green(),
                source,
                key.expose().len()
            ),
            Err(e) => {
                println!("{} API key from {} is unusable", "✗".red(), source);
                println!("  → {}", e);
            }
        },
        None => {
            println!("{} API key not configured", "✗".red());
            println!(
                "  → Run 'znops init', set ZN_API_KEY, or pass --key-file (keys are at least {} bytes)",
                MIN_API_KEY_LEN
            );
        }
    }

    // API root
    let api_url = opts.api_url_ref().unwrap_or_else(|| config.api_url());
    println!("{} API root: {}", "○".dimmed(), api_url.cyan());

    // Poll defaults
    let timeout = match config.poll.timeout_secs {
        Some(secs) => format!("{}s", secs),
        None => "none".to_string(),
    };
    println!(
        "{} Poll interval: {}s, timeout: {}",
        "○".dimmed(),
        config.poll.interval().as_secs(),
        timeout
    );
    println!(
        "{} List page size: {}",
        "○".dimmed(),
        config.preferences.page_size
    );

    println!();
    Ok(())
}
