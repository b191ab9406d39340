//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeRecord, DiffResult, DiffSummary};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator: metadata, summary counts and every change record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                title: config.title.as_deref(),
                generated_at: Utc::now().to_rfc3339(),
                old_sbom: SbomInfo {
                    file_path: config.metadata.old_sbom_path.as_deref(),
                    component_count: result.summary.old_components,
                    key_count: result.summary.old_keys,
                },
                new_sbom: SbomInfo {
                    file_path: config.metadata.new_sbom_path.as_deref(),
                    component_count: result.summary.new_components,
                    key_count: result.summary.new_keys,
                },
            },
            summary: &result.summary,
            changes: &result.changes,
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: &'a DiffSummary,
    changes: &'a [ChangeRecord],
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    generated_at: String,
    old_sbom: SbomInfo<'a>,
    new_sbom: SbomInfo<'a>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct SbomInfo<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_path: Option<&'a str>,
    component_count: usize,
    key_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::parsers::parse_sbom_str;
    use serde_json::Value;

    fn sample_result() -> DiffResult {
        let old = parse_sbom_str(
            r#"{"components": [{"bom-ref": "a@1", "version": "1"}, {"bom-ref": "gone@1"}]}"#,
        )
        .unwrap();
        let new = parse_sbom_str(r#"{"components": [{"bom-ref": "a@1", "version": "2"}]}"#)
            .unwrap();
        DiffEngine::new().diff(&old, &new)
    }

    #[test]
    fn test_json_report_structure() {
        let config = ReportConfig::for_paths("old.json", "new.json");
        let report = JsonReporter::new()
            .generate_diff_report(&sample_result(), &config)
            .unwrap();
        let value: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["metadata"]["old_sbom"]["file_path"], "old.json");
        assert_eq!(value["metadata"]["old_sbom"]["component_count"], 2);
        assert_eq!(value["summary"]["removed"], 1);
        assert_eq!(value["summary"]["field_changed"], 1);

        let changes = value["changes"].as_array().unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0]["kind"], "removed");
        // Compact single-line input: both records sit on line 1.
        assert_eq!(changes[0]["line"], 1);
        assert_eq!(changes[1]["kind"], "field_changed");
        assert_eq!(changes[1]["field"], "version");
    }

    #[test]
    fn test_report_always_lists_changes() {
        let report = JsonReporter::new()
            .generate_diff_report(&DiffResult::new(), &ReportConfig::default())
            .unwrap();
        assert!(report.contains('\n'));

        let value: Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["changes"], serde_json::json!([]));
        assert_eq!(value["summary"]["total_changes"], 0);
    }
}
