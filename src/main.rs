//! fleetip - audit static vs DHCP management addressing across a network fleet

use clap::{CommandFactory, Parser};
use colored::Colorize;

mod audit;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod report;

use cli::{Cli, Commands, GlobalOptions, OrgCommands};
use error::Result;

fn main() {
    // Serve dynamic completions when invoked by the shell (COMPLETE=<shell>)
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(error::Error::from)
        .and_then(|rt| rt.block_on(run(cli)));

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over the default filter
fn init_logging(debug: bool) {
    let default_filter = if debug { "fleetip=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("fleetip version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org(OrgCommands::List(args)) => cli::org::list(&opts, &args).await,
        Commands::Audit(args) => cli::audit::run(&opts, &args).await,
        Commands::Completion { shell } => cli::completions::generate(shell),
    }
}
