//! Diff computation stage.
//!
//! Builds the engine from the configuration and runs it over two parsed
//! documents.

use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult, TracingSink};
use crate::model::SbomDocument;

/// Build a diff engine for the given configuration.
#[must_use]
pub fn build_engine(config: &DiffConfig) -> DiffEngine {
    let engine = DiffEngine::new();
    if config.lookup.trace {
        engine.with_lookup_sink(Box::new(TracingSink))
    } else {
        engine
    }
}

/// Run the comparison between two SBOMs.
pub fn compute_diff(
    config: &DiffConfig,
    old_sbom: &SbomDocument,
    new_sbom: &SbomDocument,
) -> DiffResult {
    let quiet = config.behavior.quiet;

    if !quiet {
        tracing::info!("Comparing components...");
    }

    let result = build_engine(config).diff(old_sbom, new_sbom);

    if !quiet {
        let summary = &result.summary;
        tracing::info!(
            "Diff complete: {} changes ({} removed, {} added, {} identity, {} field) across {} keys",
            summary.total_changes,
            summary.removed,
            summary.added,
            summary.identity_changed,
            summary.field_changed,
            summary.changed_keys
        );
    }

    result
}
