//! Diff engine implementation.

use super::changes::{MembershipChangeComputer, SharedComponentChangeComputer};
use super::traits::{ChangeComputer, DiffContext};
use super::{DiffResult, IdentityMapping, LineLocator, LookupSink};
use crate::model::SbomDocument;

/// Component-level diff engine.
///
/// Runs the change computers in a fixed order: removed, added, then identity
/// and field changes for shared keys.
pub struct DiffEngine {
    lookup_sink: Option<Box<dyn LookupSink>>,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self { lookup_sink: None }
    }

    /// Report every line lookup to `sink`.
    #[must_use]
    pub fn with_lookup_sink(mut self, sink: Box<dyn LookupSink>) -> Self {
        self.lookup_sink = Some(sink);
        self
    }

    /// Check if a lookup sink is configured
    #[must_use]
    pub fn has_lookup_sink(&self) -> bool {
        self.lookup_sink.is_some()
    }

    /// Compare two parsed documents.
    pub fn diff(&self, old: &SbomDocument, new: &SbomDocument) -> DiffResult {
        let old_map = IdentityMapping::from_document(old);
        let new_map = IdentityMapping::from_document(new);

        if old.content_hash() == new.content_hash() && old.lines() == new.lines() {
            tracing::debug!("Documents are textually identical, skipping comparison");
            let mut result = DiffResult::new();
            Self::count_keys(&mut result, &old_map, &new_map);
            return result;
        }

        self.diff_mappings(&old_map, &new_map, old.lines(), new.lines())
    }

    /// Compare two identity mappings, resolving lines against the given raw text.
    pub fn diff_mappings(
        &self,
        old: &IdentityMapping<'_>,
        new: &IdentityMapping<'_>,
        old_lines: &[String],
        new_lines: &[String],
    ) -> DiffResult {
        let mut old_locator = LineLocator::new(old_lines);
        let mut new_locator = LineLocator::new(new_lines);
        if let Some(sink) = self.lookup_sink.as_deref() {
            old_locator = old_locator.with_sink(sink);
            new_locator = new_locator.with_sink(sink);
        }

        let ctx = DiffContext {
            old,
            new,
            old_lines: old_locator,
            new_lines: new_locator,
        };

        let computers: [&dyn ChangeComputer; 2] =
            [&MembershipChangeComputer, &SharedComponentChangeComputer];

        let mut result = DiffResult::new();
        for computer in computers {
            let before = result.changes.len();
            computer.compute(&ctx, &mut result.changes);
            tracing::debug!(
                computer = computer.name(),
                records = result.changes.len() - before,
                "Computed changes"
            );
        }

        result.calculate_summary();
        Self::count_keys(&mut result, old, new);
        result
    }

    fn count_keys(result: &mut DiffResult, old: &IdentityMapping<'_>, new: &IdentityMapping<'_>) {
        let summary = &mut result.summary;
        summary.old_components = old.len() + old.discarded();
        summary.new_components = new.len() + new.discarded();
        summary.old_keys = old.len();
        summary.new_keys = new.len();
        summary.shared_keys = old.keys().filter(|k| new.contains_key(k)).count();
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiffEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffEngine")
            .field("lookup_sink", &self.lookup_sink.is_some())
            .finish()
    }
}
