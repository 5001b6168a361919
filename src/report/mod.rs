//! Report sinks for per-organization audit results
//!
//! The audit runner hands every finished organization to a [`ReportSink`].
//! Sinks decide how results are rendered or persisted; a failing sink never
//! changes what the runner does next.

use log::warn;

use crate::audit::{AssignmentResult, Organization};
use crate::error::SinkError;

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::JsonFileSink;

/// Longest sheet name kept in persisted reports
pub const MAX_SHEET_NAME: usize = 24;

/// Consumer of per-organization audit results.
pub trait ReportSink {
    /// Called before an organization is processed.
    fn begin(&mut self, _org: &Organization) {}

    /// Consume the results of one organization, in device order.
    fn emit(&mut self, org: &Organization, results: &[AssignmentResult]) -> Result<(), SinkError>;

    /// Called once after the last organization.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Short section name for an organization: word characters only, at most
/// [`MAX_SHEET_NAME`] characters.
pub fn sheet_name(org_name: &str) -> String {
    org_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .take(MAX_SHEET_NAME)
        .collect()
}

/// Fans results out to several sinks.
///
/// Every sink sees every call; the first failure is returned once all sinks
/// have run.
#[derive(Default)]
pub struct SinkSet {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl SinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sink: Box<dyn ReportSink>) {
        self.sinks.push(sink);
    }

    pub fn with(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    fn each(
        &mut self,
        mut f: impl FnMut(&mut dyn ReportSink) -> Result<(), SinkError>,
    ) -> Result<(), SinkError> {
        let mut first = None;
        for sink in self.sinks.iter_mut() {
            if let Err(e) = f(sink.as_mut()) {
                if first.is_some() {
                    warn!("{}", e);
                } else {
                    first = Some(e);
                }
            }
        }
        first.map_or(Ok(()), Err)
    }
}

impl ReportSink for SinkSet {
    fn begin(&mut self, org: &Organization) {
        for sink in self.sinks.iter_mut() {
            sink.begin(org);
        }
    }

    fn emit(&mut self, org: &Organization, results: &[AssignmentResult]) -> Result<(), SinkError> {
        self.each(|sink| sink.emit(org, results))
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.each(|sink| sink.finish())
    }
}
