//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::config::{Config, DEFAULT_API_HOST};
use crate::error::Result;

/// Show the first and last few characters of a key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "fleetip Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let file_exists = config_path.exists();

    match load_config(opts) {
        Ok(config) => {
            if file_exists {
                println!("Config file: {}", config_path.display().to_string().cyan());
            } else {
                println!(
                    "Config file: {} {}",
                    config_path.display().to_string().dimmed(),
                    "(not created, using flags/environment)".dimmed()
                );
            }
            println!();

            // API key status
            match config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
                Some(key) => println!("{} API key configured ({})", "✓".green(), mask_key(key)),
                None => {
                    println!("{} API key not configured", "✗".red());
                    println!("  → Run 'fleetip init' to configure");
                }
            }

            // API host status (only flag as custom if it differs)
            let host = config.api_base_url();
            if host == DEFAULT_API_HOST {
                println!("{} API host: {}", "○".dimmed(), host);
            } else {
                println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
            }

            println!(
                "{} Request interval: {} ms, timeout: {} s",
                "○".dimmed(),
                config.preferences.request_interval_ms,
                config.preferences.timeout_secs
            );
            println!(
                "{} Output format: {:?}",
                "○".dimmed(),
                opts.resolve_format(&config)
            );
            println!();
        }
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!();
            println!(
                "Run {} to create a configuration file.",
                "fleetip init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
