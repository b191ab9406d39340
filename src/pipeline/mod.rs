//! Pipeline orchestration for SBOM operations.
//!
//! Shared parse → diff → report logic used by the CLI command handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::{build_engine, compute_diff};
pub use output::{OutputTarget, should_use_color, write_output};
pub use parse::parse_sbom_with_context;
pub use report_stage::{output_report, render_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or --fail-on-change not set)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
