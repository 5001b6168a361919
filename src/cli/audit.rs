//! Audit command implementation

use colored::Colorize;
use log::debug;

use crate::audit::{self, OrgFilter};
use crate::cli::args::{AuditArgs, GlobalOptions};
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::report::{ConsoleSink, JsonFileSink, SinkSet};

/// Run the audit command
pub async fn run(opts: &GlobalOptions, args: &AuditArgs) -> Result<()> {
    // Reject bad filters before touching the API
    let filter = OrgFilter::parse(&args.org)?;
    let ctx = CommandContext::new(opts)?;

    let mut console = ConsoleSink::stdout(ctx.format);
    if !args.quiet && ctx.format != OutputFormat::Json {
        console = console.with_progress();
    }

    let mut sinks = SinkSet::new().with(Box::new(console));
    if let Some(path) = &args.output {
        sinks.push(Box::new(JsonFileSink::new(path)));
    }
    debug!(
        "Auditing {} via {} with {} report sinks",
        filter,
        ctx.config.api_base_url(),
        sinks.len()
    );

    let summary = audit::run(&ctx.client, &filter, &mut sinks).await?;
    debug!("{} requests were paced", ctx.client.paced_requests());

    if ctx.format == OutputFormat::Json {
        return Ok(());
    }

    eprintln!(
        "\n{} Audited {} organizations, {} devices",
        "✓".green(),
        summary.organizations,
        summary.devices
    );
    if summary.empty_organizations > 0 {
        eprintln!(
            "{} {} organizations had no switches, appliances or access points",
            "○".dimmed(),
            summary.empty_organizations
        );
    }
    if summary.failed_organizations > 0 {
        eprintln!(
            "{} {} organizations skipped after API errors, see warnings above",
            "⚠".yellow(),
            summary.failed_organizations
        );
    }
    if summary.sink_failures > 0 {
        eprintln!(
            "{} {} report errors, see warnings above",
            "⚠".yellow(),
            summary.sink_failures
        );
    } else if let Some(path) = &args.output {
        eprintln!("{} Report saved to: {}", "✓".green(), path.display());
    }

    Ok(())
}
