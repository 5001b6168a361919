//! JSON report file sink

use std::path::PathBuf;

use chrono::Utc;
use log::debug;
use serde::Serialize;

use super::{ReportSink, sheet_name};
use crate::audit::{AssignmentResult, Organization};
use crate::error::SinkError;

#[derive(Debug, Serialize)]
struct ReportDocument {
    generated_at: String,
    organizations: Vec<Sheet>,
}

/// One organization section of the report
#[derive(Debug, Serialize)]
struct Sheet {
    ordinal: usize,
    name: String,
    sheet: String,
    devices: Vec<AssignmentResult>,
}

/// Persists the whole report after every organization.
///
/// The file always holds a complete document, so an aborted run still leaves
/// the organizations finished so far on disk.
pub struct JsonFileSink {
    path: PathBuf,
    document: ReportDocument,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: ReportDocument {
                generated_at: Utc::now().to_rfc3339(),
                organizations: Vec::new(),
            },
        }
    }

    fn persist(&self) -> Result<(), SinkError> {
        let failed = |reason: String| SinkError::Persist {
            path: self.path.display().to_string(),
            reason,
        };

        let contents =
            serde_json::to_string_pretty(&self.document).map_err(|e| failed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
        }
        std::fs::write(&self.path, contents).map_err(|e| failed(e.to_string()))?;

        debug!(
            "Saved {} organizations to {}",
            self.document.organizations.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl ReportSink for JsonFileSink {
    fn emit(&mut self, org: &Organization, results: &[AssignmentResult]) -> Result<(), SinkError> {
        if results.is_empty() {
            debug!("Leaving {} out of the report: no devices", org.name);
            return Ok(());
        }

        self.document.organizations.push(Sheet {
            ordinal: org.ordinal,
            name: org.name.clone(),
            sheet: sheet_name(&org.name),
            devices: results.to_vec(),
        });
        self.persist()
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.persist()
    }
}
