//! Line-oriented text report.
//!
//! Each change renders as a blank separator line, a header, and detail lines:
//!
//! ```text
//!
//! Changed: libbar.licenses
//!    Old Value (Line 12): MIT
//!    New Value (Line 14): Apache-2.0
//! ```

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeRecord, DiffResult, SourceLine};
use crate::model::{FieldValue, IDENTIFIER_FIELD, LogicalKey};
use serde_json::Value;

/// Banner printed when there is nothing to report.
pub const NO_DIFFERENCES: &str = "No differences found.";

/// Banner printed above the change listing.
pub const DIFFERENCES_HEADER: &str = "=== Differences ===";

/// Render change records as text lines, in record order.
#[must_use]
pub fn render_change_lines(changes: &[ChangeRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    for change in changes {
        lines.push(String::new());
        match change {
            ChangeRecord::Removed {
                key, record, line, ..
            } => push_one_sided(&mut lines, "Removed", key, record, *line),
            ChangeRecord::Added {
                key, record, line, ..
            } => push_one_sided(&mut lines, "Added", key, record, *line),
            ChangeRecord::IdentityChanged {
                key,
                old_identifier,
                new_identifier,
                old_line,
                new_line,
            } => {
                lines.push(format!("Changed: Package '{key}'"));
                lines.push(format!(
                    "   Old {IDENTIFIER_FIELD} (Line {old_line}): {}",
                    identifier_text(old_identifier.as_deref())
                ));
                lines.push(format!(
                    "   New {IDENTIFIER_FIELD} (Line {new_line}): {}",
                    identifier_text(new_identifier.as_deref())
                ));
            }
            ChangeRecord::FieldChanged {
                key,
                field,
                old_value,
                new_value,
                old_line,
                new_line,
            } => {
                lines.push(format!("Changed: {key}.{field}"));
                push_value(&mut lines, &format!("   Old Value (Line {old_line}): "), old_value);
                push_value(&mut lines, &format!("   New Value (Line {new_line}): "), new_value);
            }
        }
    }
    lines
}

/// The change listing as written to an output file: one line per entry,
/// each newline-terminated. Empty when there are no changes.
#[must_use]
pub fn render_change_listing(changes: &[ChangeRecord]) -> String {
    render_change_lines(changes)
        .into_iter()
        .fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
}

fn push_one_sided(
    lines: &mut Vec<String>,
    label: &str,
    key: &LogicalKey,
    record: &Value,
    line: SourceLine,
) {
    lines.push(format!("{label}: Package '{key}' (Line: {line})"));
    lines.push("Details:".to_string());
    let dump = serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string());
    lines.extend(dump.lines().map(str::to_string));
}

/// A labelled value; multi-line renderings continue unindented below the label.
fn push_value(lines: &mut Vec<String>, label: &str, value: &FieldValue) {
    let text = value.to_string();
    let mut parts = text.lines();
    lines.push(format!("{label}{}", parts.next().unwrap_or_default()));
    lines.extend(parts.map(str::to_string));
}

fn identifier_text(identifier: Option<&str>) -> &str {
    identifier.unwrap_or(FieldValue::ABSENT_TEXT)
}

/// Plain text reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        if !result.has_changes() {
            return Ok(format!("{NO_DIFFERENCES}\n"));
        }

        Ok(format!(
            "{DIFFERENCES_HEADER}\n{}",
            render_change_listing(&result.changes)
        ))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackedField;
    use serde_json::json;

    #[test]
    fn test_field_change_lines() {
        let lines = render_change_lines(&[ChangeRecord::FieldChanged {
            key: LogicalKey::from("libbar"),
            field: TrackedField::Licenses,
            old_value: FieldValue::Present(json!("MIT")),
            new_value: FieldValue::Present(json!("Apache-2.0")),
            old_line: SourceLine::at(12),
            new_line: SourceLine::at(14),
        }]);

        assert_eq!(
            lines,
            vec![
                "",
                "Changed: libbar.licenses",
                "   Old Value (Line 12): MIT",
                "   New Value (Line 14): Apache-2.0",
            ]
        );
    }

    #[test]
    fn test_absent_value_and_missing_line() {
        let lines = render_change_lines(&[ChangeRecord::FieldChanged {
            key: LogicalKey::from("a"),
            field: TrackedField::Copyright,
            old_value: FieldValue::Absent,
            new_value: FieldValue::Present(json!(["x", 1])),
            old_line: SourceLine::NOT_FOUND,
            new_line: SourceLine::at(3),
        }]);

        assert_eq!(
            lines,
            vec![
                "",
                "Changed: a.copyright",
                "   Old Value (Line -1): Not Present",
                "   New Value (Line 3): [",
                "  \"x\",",
                "  1",
                "]",
            ]
        );
    }

    #[test]
    fn test_null_and_boolean_values() {
        let lines = render_change_lines(&[ChangeRecord::FieldChanged {
            key: LogicalKey::from("a"),
            field: TrackedField::Authors,
            old_value: FieldValue::Present(json!(null)),
            new_value: FieldValue::Present(json!(false)),
            old_line: SourceLine::at(2),
            new_line: SourceLine::at(2),
        }]);

        assert_eq!(lines[2], "   Old Value (Line 2): ");
        assert_eq!(lines[3], "   New Value (Line 2): False");
    }

    #[test]
    fn test_identity_change_lines() {
        let lines = render_change_lines(&[ChangeRecord::IdentityChanged {
            key: LogicalKey::from("libfoo"),
            old_identifier: Some("libfoo@1.0".to_string()),
            new_identifier: None,
            old_line: SourceLine::at(4),
            new_line: SourceLine::NOT_FOUND,
        }]);

        assert_eq!(
            lines,
            vec![
                "",
                "Changed: Package 'libfoo'",
                "   Old bom-ref (Line 4): libfoo@1.0",
                "   New bom-ref (Line -1): Not Present",
            ]
        );
    }

    #[test]
    fn test_removed_dump_spans_lines() {
        let lines = render_change_lines(&[ChangeRecord::Removed {
            key: LogicalKey::from("libbaz"),
            identifier: Some("libbaz@2.0".to_string()),
            record: json!({"bom-ref": "libbaz@2.0", "name": "libbaz"}),
            line: SourceLine::at(20),
        }]);

        assert_eq!(
            lines,
            vec![
                "",
                "Removed: Package 'libbaz' (Line: 20)",
                "Details:",
                "{",
                "  \"bom-ref\": \"libbaz@2.0\",",
                "  \"name\": \"libbaz\"",
                "}",
            ]
        );
    }

    #[test]
    fn test_change_listing_has_no_banner() {
        assert_eq!(render_change_listing(&[]), "");

        let listing = render_change_listing(&[ChangeRecord::Added {
            key: LogicalKey::from("x"),
            identifier: None,
            record: json!({}),
            line: SourceLine::NOT_FOUND,
        }]);
        assert_eq!(listing, "\nAdded: Package 'x' (Line: -1)\nDetails:\n{}\n");
    }

    #[test]
    fn test_banner_without_changes() {
        let report = TextReporter::new()
            .generate_diff_report(&DiffResult::new(), &ReportConfig::default())
            .unwrap();
        assert_eq!(report, "No differences found.\n");
    }

    #[test]
    fn test_banner_with_changes() {
        let mut result = DiffResult::new();
        result.changes.push(ChangeRecord::Added {
            key: LogicalKey::from("x"),
            identifier: None,
            record: json!({}),
            line: SourceLine::NOT_FOUND,
        });
        result.calculate_summary();

        let report = TextReporter::new()
            .generate_diff_report(&result, &ReportConfig::default())
            .unwrap();
        assert_eq!(
            report,
            "=== Differences ===\n\nAdded: Package 'x' (Line: -1)\nDetails:\n{}\n"
        );
    }
}
