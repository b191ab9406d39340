//! Identity resolution: collapsing a component list into one record per logical key.

use crate::model::{Component, LogicalKey, SbomDocument};
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Mapping from logical key to the representative component of one document.
///
/// Keys keep their first-seen order. When several records share a key, the
/// first one encountered is the representative and the others are dropped
/// from comparison.
#[derive(Debug, Clone, Default)]
pub struct IdentityMapping<'a> {
    entries: IndexMap<LogicalKey, Component<'a>>,
    discarded: usize,
}

impl<'a> IdentityMapping<'a> {
    /// Group components by logical key, keeping the first record per key.
    pub fn resolve<I>(components: I) -> Self
    where
        I: IntoIterator<Item = Component<'a>>,
    {
        let mut entries = IndexMap::new();
        let mut discarded = 0;

        for component in components {
            match entries.entry(component.logical_key()) {
                Entry::Vacant(slot) => {
                    slot.insert(component);
                }
                Entry::Occupied(slot) => {
                    tracing::debug!(key = %slot.key(), "Duplicate logical key, keeping first record");
                    discarded += 1;
                }
            }
        }

        Self { entries, discarded }
    }

    /// Resolve the components of a parsed document.
    pub fn from_document(document: &'a SbomDocument) -> Self {
        Self::resolve(document.components())
    }

    #[must_use]
    pub fn get(&self, key: &LogicalKey) -> Option<&Component<'a>> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &LogicalKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &LogicalKey> {
        self.entries.keys()
    }

    /// Key/representative pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&LogicalKey, &Component<'a>)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records dropped because an earlier record had the same key.
    #[must_use]
    pub const fn discarded(&self) -> usize {
        self.discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn records(value: &Value) -> impl Iterator<Item = Component<'_>> {
        value.as_array().into_iter().flatten().map(Component::new)
    }

    #[test]
    fn test_groups_by_logical_key() {
        let list = json!([
            {"bom-ref": "libfoo@1.0"},
            {"bom-ref": "libbar@2.0"},
        ]);
        let mapping = IdentityMapping::resolve(records(&list));

        assert_eq!(mapping.len(), 2);
        assert!(mapping.contains_key(&LogicalKey::from("libfoo")));
        assert!(mapping.contains_key(&LogicalKey::from("libbar")));
        assert_eq!(mapping.discarded(), 0);
    }

    #[test]
    fn test_first_record_wins() {
        let list = json!([
            {"bom-ref": "libfoo@1.0", "version": "1.0"},
            {"bom-ref": "libfoo@2.0", "version": "2.0"},
            {"bom-ref": "libfoo@3.0", "version": "3.0"},
        ]);
        let mapping = IdentityMapping::resolve(records(&list));

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.discarded(), 2);
        let rep = mapping.get(&LogicalKey::from("libfoo")).unwrap();
        assert_eq!(rep.identifier().as_deref(), Some("libfoo@1.0"));
    }

    #[test]
    fn test_keys_keep_encounter_order() {
        let list = json!([
            {"bom-ref": "zeta@1"},
            {"bom-ref": "alpha@1"},
            {"bom-ref": "zeta@2"},
            {"bom-ref": "mid@1"},
        ]);
        let mapping = IdentityMapping::resolve(records(&list));
        let keys: Vec<_> = mapping.keys().map(LogicalKey::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_degenerate_keys_collapse() {
        let list = json!([
            {"name": "no-ref"},
            {"bom-ref": ""},
            {"bom-ref": "@1.0"},
            {"bom-ref": null},
        ]);
        let mapping = IdentityMapping::resolve(records(&list));

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.discarded(), 3);
        let rep = mapping.get(&LogicalKey::default()).unwrap();
        assert_eq!(rep.record(), &json!({"name": "no-ref"}));
    }

    #[test]
    fn test_empty_input() {
        let mapping = IdentityMapping::resolve(std::iter::empty());
        assert!(mapping.is_empty());
    }
}
