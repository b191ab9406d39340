//! Report generation for diff results.
//!
//! Three output formats are available:
//! - Text: the line-oriented change listing
//! - JSON: structured data for programmatic integration
//! - Summary: compact shell-friendly counts

mod json;
mod summary;
mod text;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use text::{
    DIFFERENCES_HEADER, NO_DIFFERENCES, TextReporter, render_change_lines, render_change_listing,
};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}
