//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable count of changes for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn count_line(&self, count: usize, sign: char, color: &str, what: &str) -> String {
        format!(
            "  {} {} {what}",
            self.color(&format!("{sign}{count}"), color),
            plural(count, "component", "components"),
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let summary = &result.summary;
        let mut lines = Vec::new();

        // Header
        let title = config.title.as_deref().unwrap_or("SBOM Diff Summary");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        // File info
        let old_name = config.metadata.old_sbom_path.as_deref().unwrap_or("old");
        let new_name = config.metadata.new_sbom_path.as_deref().unwrap_or("new");
        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            old_name,
            new_name
        ));

        lines.push(format!(
            "{}  {} → {} components ({} → {} keys, {} shared)",
            self.color("Size:", "cyan"),
            summary.old_components,
            summary.new_components,
            summary.old_keys,
            summary.new_keys,
            summary.shared_keys
        ));

        lines.push(String::new());
        lines.push(self.color("Changes:", "bold"));

        if summary.added > 0 {
            lines.push(self.count_line(summary.added, '+', "green", "added"));
        }
        if summary.removed > 0 {
            lines.push(self.count_line(summary.removed, '-', "red", "removed"));
        }
        if summary.identity_changed > 0 {
            lines.push(self.count_line(
                summary.identity_changed,
                '~',
                "yellow",
                "with a new bom-ref",
            ));
        }
        if summary.field_changed > 0 {
            lines.push(format!(
                "  {} {} changed",
                self.color(&format!("~{}", summary.field_changed), "yellow"),
                plural(summary.field_changed, "field", "fields"),
            ));
        }
        if !result.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
