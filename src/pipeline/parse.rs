//! SBOM loading stage.

use crate::model::SbomDocument;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse an SBOM with context for error messages
pub fn parse_sbom_with_context(path: &Path, quiet: bool) -> Result<SbomDocument> {
    if !quiet {
        tracing::info!("Parsing SBOM: {:?}", path);
    }

    let raw_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read SBOM file: {}", path.display()))?;
    let document = crate::parsers::parse_sbom_str(&raw_content)
        .with_context(|| format!("Failed to parse SBOM: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Parsed {} components ({} lines)",
            document.component_count(),
            document.lines().len()
        );
    }

    Ok(document)
}
