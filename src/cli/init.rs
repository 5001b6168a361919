//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{FleetApi, FleetClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for an API key unless one was passed with `--api-key`, checks it
/// by listing organizations and saves the config file. Existing preferences
/// are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to fleetip!".bold().green());
    println!("Let's set up access to your dashboard API.\n");

    let api_key: String = match opts.api_key_ref() {
        Some(key) => key.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your dashboard API key")
            .interact()?,
    };

    let mut config = Config::load_at(opts.config_ref())
        .unwrap_or_default()
        .with_overrides(Some(api_key.as_str()), opts.api_host_ref());

    println!("\n{}", "Verifying API key...".cyan());
    let client = FleetClient::from_config(&config)?;
    let orgs = client.list_organizations().await?;
    println!("{}", "✓ Authentication successful!".green());

    if orgs.is_empty() {
        println!("{}", "⚠ No organizations found for this key.".yellow());
    } else {
        println!("Found {} organizations.", orgs.len().to_string().bold());
    }

    config.api_key = Some(api_key);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "fleetip status".cyan());
    println!("  {} - List organizations", "fleetip org list".cyan());
    println!("  {} - Audit every organization", "fleetip audit --org /all".cyan());

    Ok(())
}
