//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two SBOMs.

use crate::config::{DiffConfig, Validatable};
use crate::diff::DiffResult;
use crate::error::SbomDiffError;
use crate::pipeline::{compute_diff, exit_codes, output_report, parse_sbom_with_context};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let errors = config.validate();
    if let Some(first) = errors.first() {
        for error in &errors {
            tracing::error!("{error}");
        }
        return Err(SbomDiffError::validation(first.to_string()).into());
    }

    let quiet = config.behavior.quiet;

    let old_sbom = parse_sbom_with_context(&config.paths.old, quiet)?;
    let new_sbom = parse_sbom_with_context(&config.paths.new, quiet)?;

    let result = compute_diff(&config, &old_sbom, &new_sbom);
    let exit_code = determine_exit_code(&config, &result);

    output_report(&config, &result)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.summary.total_changes > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
