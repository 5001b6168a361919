//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, authentication validation, and client initialization.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::FleetClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI/env overrides applied
    pub config: Config,
    /// API client paced per the configured interval
    pub client: FleetClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or no API key is available.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;
        let client = FleetClient::from_config(&config)?;
        let format = opts.resolve_format(&config);

        Ok(Self {
            config,
            client,
            format,
        })
    }
}

/// Load the config file and apply overrides.
///
/// A missing file is fine when the API key comes from the flag or environment.
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) if opts.api_key.is_some() => Config::default(),
        Err(e) => return Err(e),
    };

    Ok(config.with_overrides(opts.api_key_ref(), opts.api_host_ref()))
}
