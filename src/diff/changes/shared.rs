//! Identity and field changes for components present in both documents.

use crate::diff::traits::{ChangeComputer, DiffContext};
use crate::diff::ChangeRecord;
use crate::model::{Component, FieldValue, LogicalKey, TrackedField};

/// Compares the representatives of every shared key, in old document order.
///
/// Per key, an identity change (raw identifier strings differ) comes first,
/// followed by one field change per differing tracked attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedComponentChangeComputer;

impl SharedComponentChangeComputer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Tracked attributes whose values differ, in tracked-field order.
    ///
    /// Values are compared structurally: list order matters, and an absent
    /// attribute differs from an explicit `null` or empty value.
    #[must_use]
    pub fn differing_fields(old: &Component<'_>, new: &Component<'_>) -> Vec<TrackedField> {
        TrackedField::ALL
            .into_iter()
            .filter(|&field| old.field(field) != new.field(field))
            .collect()
    }

    fn compare(
        ctx: &DiffContext<'_>,
        key: &LogicalKey,
        old: &Component<'_>,
        new: &Component<'_>,
        out: &mut Vec<ChangeRecord>,
    ) {
        let old_id = old.identifier();
        let new_id = new.identifier();

        if old_id != new_id {
            out.push(ChangeRecord::IdentityChanged {
                key: key.clone(),
                old_line: ctx.old_lines.find_identifier(old_id.as_deref()),
                new_line: ctx.new_lines.find_identifier(new_id.as_deref()),
                old_identifier: old_id.as_deref().map(str::to_string),
                new_identifier: new_id.as_deref().map(str::to_string),
            });
        }

        for field in Self::differing_fields(old, new) {
            out.push(ChangeRecord::FieldChanged {
                key: key.clone(),
                field,
                old_value: FieldValue::from(old.field(field)),
                new_value: FieldValue::from(new.field(field)),
                old_line: ctx.old_lines.find_anchor(old_id.as_deref()),
                new_line: ctx.new_lines.find_anchor(new_id.as_deref()),
            });
        }
    }
}

impl ChangeComputer for SharedComponentChangeComputer {
    fn compute(&self, ctx: &DiffContext<'_>, out: &mut Vec<ChangeRecord>) {
        for (key, old) in ctx.old.iter() {
            if let Some(new) = ctx.new.get(key) {
                Self::compare(ctx, key, old, new, out);
            }
        }
    }

    fn name(&self) -> &'static str {
        "SharedComponentChangeComputer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{IdentityMapping, LineLocator, SourceLine};
    use serde_json::{Value, json};

    fn mapping(list: &Value) -> IdentityMapping<'_> {
        IdentityMapping::resolve(list.as_array().into_iter().flatten().map(Component::new))
    }

    fn run(old: &Value, new: &Value, old_lines: &[String], new_lines: &[String]) -> Vec<ChangeRecord> {
        let (old_map, new_map) = (mapping(old), mapping(new));
        let ctx = DiffContext {
            old: &old_map,
            new: &new_map,
            old_lines: LineLocator::new(old_lines),
            new_lines: LineLocator::new(new_lines),
        };
        let mut out = Vec::new();
        SharedComponentChangeComputer::new().compute(&ctx, &mut out);
        out
    }

    #[test]
    fn test_identical_components_produce_nothing() {
        let list = json!([{"bom-ref": "a@1", "name": "a", "licenses": ["MIT"]}]);
        assert!(run(&list, &list, &[], &[]).is_empty());
    }

    #[test]
    fn test_identity_change_without_field_change() {
        let old = json!([{"bom-ref": "libfoo@1.0", "licenses": "MIT"}]);
        let new = json!([{"bom-ref": "libfoo@1.1", "licenses": "MIT"}]);
        let old_lines = vec![r#"  "bom-ref": "libfoo@1.0","#.to_string()];
        let new_lines = vec![String::new(), r#"  "bom-ref": "libfoo@1.1","#.to_string()];

        let out = run(&old, &new, &old_lines, &new_lines);
        assert_eq!(
            out,
            vec![ChangeRecord::IdentityChanged {
                key: LogicalKey::from("libfoo"),
                old_identifier: Some("libfoo@1.0".to_string()),
                new_identifier: Some("libfoo@1.1".to_string()),
                old_line: SourceLine::at(1),
                new_line: SourceLine::at(2),
            }]
        );
    }

    #[test]
    fn test_list_change_is_order_sensitive() {
        let old = json!([{"bom-ref": "a@1", "licenses": ["MIT", "Apache-2.0"]}]);
        let new = json!([{"bom-ref": "a@1", "licenses": ["Apache-2.0", "MIT"]}]);
        let out = run(&old, &new, &[], &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].field(), Some(TrackedField::Licenses));
    }

    #[test]
    fn test_absent_differs_from_empty_and_null() {
        let old = json!([{"bom-ref": "a@1"}]);
        let new = json!([{"bom-ref": "a@1", "authors": [], "copyright": null}]);
        let out = run(&old, &new, &[], &[]);
        let fields: Vec<_> = out.iter().filter_map(ChangeRecord::field).collect();
        assert_eq!(fields, vec![TrackedField::Authors, TrackedField::Copyright]);

        match &out[1] {
            ChangeRecord::FieldChanged {
                old_value,
                new_value,
                ..
            } => {
                assert!(old_value.is_absent());
                assert_eq!(*new_value, FieldValue::Present(Value::Null));
            }
            other => panic!("Expected FieldChanged, got {other:?}"),
        }
    }

    #[test]
    fn test_untracked_fields_are_ignored() {
        let old = json!([{"bom-ref": "a@1", "description": "old", "purl": "pkg:x/a@1"}]);
        let new = json!([{"bom-ref": "a@1", "description": "new", "purl": "pkg:x/a@2"}]);
        assert!(run(&old, &new, &[], &[]).is_empty());
    }

    #[test]
    fn test_field_lines_use_anchor() {
        let old = json!([{"bom-ref": "a@1", "version": "1"}]);
        let new = json!([{"bom-ref": "a@1", "version": "2"}]);
        let lines: Vec<String> = vec![
            r#"{"dependsOn": ["a@1"]},"#.to_string(),
            r#"{"bom-ref": "a@1","#.to_string(),
        ];
        let out = run(&old, &new, &lines, &lines);
        assert_eq!(out[0].lines(), (Some(SourceLine::at(2)), Some(SourceLine::at(2))));
    }

    #[test]
    fn test_identity_and_fields_interleave_per_key() {
        let old = json!([
            {"bom-ref": "a@1", "version": "1"},
            {"bom-ref": "b@1", "version": "1"},
        ]);
        let new = json!([
            {"bom-ref": "b@2", "version": "2"},
            {"bom-ref": "a@2", "version": "2"},
        ]);
        let out = run(&old, &new, &[], &[]);
        let order: Vec<_> = out
            .iter()
            .map(|c| (c.key().as_str().to_string(), c.kind()))
            .collect();
        use crate::diff::ChangeKind::{FieldChanged, IdentityChanged};
        assert_eq!(
            order,
            vec![
                ("a".to_string(), IdentityChanged),
                ("a".to_string(), FieldChanged),
                ("b".to_string(), IdentityChanged),
                ("b".to_string(), FieldChanged),
            ]
        );
    }
}
