//! Diff result structures.

use super::SourceLine;
use crate::model::{FieldValue, LogicalKey, TrackedField};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Complete result of comparing two documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Change records in report order
    pub changes: Vec<ChangeRecord>,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Recount the per-kind totals from `changes`.
    pub fn calculate_summary(&mut self) {
        let count = |kind: ChangeKind| self.changes.iter().filter(|c| c.kind() == kind).count();
        self.summary.removed = count(ChangeKind::Removed);
        self.summary.added = count(ChangeKind::Added);
        self.summary.identity_changed = count(ChangeKind::IdentityChanged);
        self.summary.field_changed = count(ChangeKind::FieldChanged);
        self.summary.total_changes = self.changes.len();
        self.summary.changed_keys = self
            .changes
            .iter()
            .map(ChangeRecord::key)
            .collect::<HashSet<_>>()
            .len();
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Records of one kind, in report order.
    pub fn of_kind(&self, kind: ChangeKind) -> impl Iterator<Item = &ChangeRecord> {
        self.changes.iter().filter(move |c| c.kind() == kind)
    }

    /// All records for a logical key, in report order.
    pub fn for_key<'r>(&'r self, key: &'r LogicalKey) -> impl Iterator<Item = &'r ChangeRecord> {
        self.changes.iter().filter(move |c| c.key() == key)
    }
}

/// Summary statistics for the diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub total_changes: usize,
    pub removed: usize,
    pub added: usize,
    pub identity_changed: usize,
    pub field_changed: usize,
    /// Distinct logical keys with at least one record
    pub changed_keys: usize,
    /// Raw component counts, before identity resolution
    pub old_components: usize,
    pub new_components: usize,
    /// Distinct logical keys per side
    pub old_keys: usize,
    pub new_keys: usize,
    /// Keys present on both sides
    pub shared_keys: usize,
}

/// Discriminant of a [`ChangeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Removed,
    Added,
    IdentityChanged,
    FieldChanged,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed => write!(f, "Removed"),
            Self::Added => write!(f, "Added"),
            Self::IdentityChanged => write!(f, "Identity changed"),
            Self::FieldChanged => write!(f, "Field changed"),
        }
    }
}

/// One reported difference between the two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeRecord {
    /// Key present only in the old document.
    Removed {
        key: LogicalKey,
        identifier: Option<String>,
        /// Full dump of the old representative
        record: Value,
        line: SourceLine,
    },
    /// Key present only in the new document.
    Added {
        key: LogicalKey,
        identifier: Option<String>,
        /// Full dump of the new representative
        record: Value,
        line: SourceLine,
    },
    /// Shared key whose raw identifier string differs.
    IdentityChanged {
        key: LogicalKey,
        old_identifier: Option<String>,
        new_identifier: Option<String>,
        old_line: SourceLine,
        new_line: SourceLine,
    },
    /// Shared key whose tracked attribute differs.
    ///
    /// Lines point at the component's `bom-ref` line, not the attribute's.
    FieldChanged {
        key: LogicalKey,
        field: TrackedField,
        old_value: FieldValue,
        new_value: FieldValue,
        old_line: SourceLine,
        new_line: SourceLine,
    },
}

impl ChangeRecord {
    #[must_use]
    pub const fn key(&self) -> &LogicalKey {
        match self {
            Self::Removed { key, .. }
            | Self::Added { key, .. }
            | Self::IdentityChanged { key, .. }
            | Self::FieldChanged { key, .. } => key,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        match self {
            Self::Removed { .. } => ChangeKind::Removed,
            Self::Added { .. } => ChangeKind::Added,
            Self::IdentityChanged { .. } => ChangeKind::IdentityChanged,
            Self::FieldChanged { .. } => ChangeKind::FieldChanged,
        }
    }

    /// The tracked attribute, for field changes.
    #[must_use]
    pub const fn field(&self) -> Option<TrackedField> {
        match self {
            Self::FieldChanged { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Resolved lines as `(old, new)`; the side a record does not cover is `None`.
    #[must_use]
    pub const fn lines(&self) -> (Option<SourceLine>, Option<SourceLine>) {
        match self {
            Self::Removed { line, .. } => (Some(*line), None),
            Self::Added { line, .. } => (None, Some(*line)),
            Self::IdentityChanged {
                old_line, new_line, ..
            }
            | Self::FieldChanged {
                old_line, new_line, ..
            } => (Some(*old_line), Some(*new_line)),
        }
    }
}
