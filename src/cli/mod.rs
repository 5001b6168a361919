//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod audit;
pub mod completions;
pub mod context;
pub mod init;
pub mod org;
pub mod status;

pub use args::{AuditArgs, GlobalOptions, OrgListArgs, OutputFormat};
pub use context::CommandContext;

/// fleetip - audit static vs DHCP management addressing across a network fleet
#[derive(Parser, Debug)]
#[command(name = "fleetip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "FLEETIP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "FLEETIP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Dashboard API key (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "FLEETIP_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Custom API base URL
    #[arg(long, global = true, env = "FLEETIP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FLEETIP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize fleetip configuration
    Init,

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// List organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Report static vs DHCP management addressing per device
    #[command(after_help = "\
Examples:
  fleetip audit --org /all
  fleetip audit --org 'Acme*' --output acme.json
  fleetip audit --org '*Retail' --format json")]
    Audit(AuditArgs),

    /// Generate shell completions (static)
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   fleetip completion bash > /etc/bash_completion.d/fleetip
  zsh:    fleetip completion zsh > \"${fpath[1]}/_fleetip\"
  fish:   fleetip completion fish > ~/.config/fish/completions/fleetip.fish

Dynamic completions (includes organization names via API):
  bash:   echo 'source <(COMPLETE=bash fleetip)' >> ~/.bashrc
  zsh:    echo 'source <(COMPLETE=zsh fleetip)' >> ~/.zshrc
  fish:   echo 'COMPLETE=fish fleetip | source' >> ~/.config/fish/config.fish")]
    Completion {
        /// Shell to generate completions for (static only)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List accessible organizations in report order
    List(OrgListArgs),
}
