//! Report output stage.

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::reports::{ReportConfig, ReportFormat, create_reporter_with_options, render_change_listing};
use anyhow::{Context, Result};

use super::{OutputTarget, should_use_color, write_output};

/// Render a report for the configured format.
///
/// Color is only used for terminal output.
pub fn render_report(config: &DiffConfig, result: &DiffResult) -> Result<String> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color) && output_target.is_terminal();

    let report_config = ReportConfig::for_paths(
        config.paths.old.to_string_lossy(),
        config.paths.new.to_string_lossy(),
    );

    let reporter = create_reporter_with_options(config.output.format, use_color);
    reporter
        .generate_diff_report(result, &report_config)
        .with_context(|| format!("Failed to generate {} report", config.output.format))
}

/// Output a diff report to the configured destination.
///
/// A text report written to a file holds only the change listing; the full
/// report with its banner goes to the console unless `quiet` is set.
pub fn output_report(config: &DiffConfig, result: &DiffResult) -> Result<()> {
    let report = render_report(config, result)?;
    let quiet = config.behavior.quiet;
    match OutputTarget::from_option(config.output.file.clone()) {
        target @ OutputTarget::File(_) if config.output.format == ReportFormat::Text => {
            if !quiet {
                write_output(&report, &OutputTarget::Stdout, quiet)?;
            }
            write_output(&render_change_listing(&result.changes), &target, quiet)
        }
        target => write_output(&report, &target, quiet),
    }
}
