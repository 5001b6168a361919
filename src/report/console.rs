//! Terminal report sink

use std::io::{self, Write};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use super::ReportSink;
use crate::audit::{AssignmentResult, Organization, ResolvedOrigin};
use crate::cli::OutputFormat;
use crate::error::SinkError;
use crate::models::AssignmentDisplay;
use crate::output::{json, table};

/// Note printed for organizations without switches or access points
pub const NO_DEVICES: &str = "No applicable devices";

#[derive(Serialize)]
struct OrgReport<'a> {
    organization: &'a Organization,
    devices: &'a [AssignmentResult],
}

/// Prints each organization's results as it completes.
pub struct ConsoleSink<W: Write = io::Stdout> {
    format: OutputFormat,
    out: W,
    progress: Option<ProgressBar>,
}

impl ConsoleSink {
    /// Print to stdout.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out,
            progress: None,
        }
    }

    /// Show a spinner on stderr while an organization is being audited.
    pub fn with_progress(mut self) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        self.progress = Some(pb);
        self
    }

    fn render(&self, org: &Organization, results: &[AssignmentResult]) -> Result<String, SinkError> {
        match self.format {
            OutputFormat::Json => json::format_json(&OrgReport {
                organization: org,
                devices: results,
            })
            .map_err(|e| SinkError::Render(e.to_string())),
            OutputFormat::Table => {
                let rows: Vec<AssignmentDisplay> = results.iter().map(AssignmentDisplay::from).collect();
                Ok(format!(
                    "{}\n{}",
                    org.name,
                    table::format_table_or(&rows, NO_DEVICES)
                ))
            }
            OutputFormat::Pretty => {
                let rows: Vec<AssignmentDisplay> = results.iter().map(AssignmentDisplay::from).collect();
                let heading = format!("{}. {}", org.ordinal, org.name).bold();
                if rows.is_empty() {
                    return Ok(format!("\n{}\n{}", heading, NO_DEVICES.dimmed()));
                }
                Ok(format!(
                    "\n{}\n{}\n{}",
                    heading,
                    table::format_table(&rows),
                    tally(results)
                ))
            }
        }
    }
}

/// One-line breakdown of origins, e.g. `12 devices: 4 static, 6 DHCP, 2 unknown`.
fn tally(results: &[AssignmentResult]) -> String {
    let count = |origin: ResolvedOrigin| results.iter().filter(|r| r.origin == origin).count();

    let reserved = count(ResolvedOrigin::DhcpReserved);
    let unreserved = count(ResolvedOrigin::DhcpUnreserved);
    let unknown = count(ResolvedOrigin::UnknownNoIp);

    let mut line = format!(
        "{} devices: {} static, {} DHCP ({} reserved)",
        results.len(),
        count(ResolvedOrigin::Static),
        reserved + unreserved,
        reserved
    );
    if unknown > 0 {
        line.push_str(&format!(", {} {}", unknown, "without IP".yellow()));
    }
    line
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn begin(&mut self, org: &Organization) {
        if let Some(pb) = &self.progress {
            pb.set_message(format!("Auditing {}...", org.name));
            pb.enable_steady_tick(Duration::from_millis(100));
        }
    }

    fn emit(&mut self, org: &Organization, results: &[AssignmentResult]) -> Result<(), SinkError> {
        let rendered = self.render(org, results)?;

        let out = &mut self.out;
        let written = match &self.progress {
            Some(pb) => pb.suspend(|| writeln!(out, "{}", rendered)),
            None => writeln!(out, "{}", rendered),
        };
        written.map_err(|e| SinkError::Render(e.to_string()))
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
        self.out.flush().map_err(|e| SinkError::Render(e.to_string()))
    }
}

impl<W: Write> Drop for ConsoleSink<W> {
    fn drop(&mut self) {
        // An aborted run never reaches finish()
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }
}
