//! Property-based tests for the diff engine.

use proptest::prelude::*;
use sbom_refdiff::{ChangeKind, ChangeRecord, DiffEngine, LogicalKey, TrackedField, parse_sbom_str};
use serde_json::{Value, json};
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

fn arb_component() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]),
        prop::sample::select(vec!["1.0", "1.1", "2.0"]),
        prop::option::of(prop::sample::select(vec!["MIT", "Apache-2.0", "BSD-3-Clause"])),
        prop::option::of("[a-z ]{0,12}"),
    )
        .prop_map(|(name, version, license, copyright)| {
            let mut record = json!({
                "bom-ref": format!("{name}@{version}"),
                "name": name,
                "version": version,
            });
            if let Some(license) = license {
                record["licenses"] = json!([license]);
            }
            if let Some(copyright) = copyright {
                record["copyright"] = json!(copyright);
            }
            record
        })
}

fn arb_components() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_component(), 0..8)
}

fn document(components: &[Value]) -> String {
    serde_json::to_string_pretty(&json!({
        "bomFormat": "CycloneDX",
        "components": components,
    }))
    .expect("serializable")
}

fn diff(old: &[Value], new: &[Value]) -> sbom_refdiff::DiffResult {
    let old = parse_sbom_str(&document(old)).expect("old parses");
    let new = parse_sbom_str(&document(new)).expect("new parses");
    DiffEngine::new().diff(&old, &new)
}

fn keys(components: &[Value]) -> BTreeSet<String> {
    components
        .iter()
        .filter_map(|c| c["bom-ref"].as_str())
        .map(|id| id.split('@').next().unwrap_or_default().to_string())
        .collect()
}

fn keys_of(result: &sbom_refdiff::DiffResult, kind: ChangeKind) -> BTreeSet<String> {
    result
        .of_kind(kind)
        .map(|c| c.key().as_str().to_string())
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn diff_is_deterministic(old in arb_components(), new in arb_components()) {
        prop_assert_eq!(diff(&old, &new), diff(&old, &new));
    }

    #[test]
    fn self_diff_is_empty(components in arb_components()) {
        let result = diff(&components, &components);
        prop_assert!(!result.has_changes());
    }

    #[test]
    fn membership_is_set_difference(old in arb_components(), new in arb_components()) {
        let result = diff(&old, &new);
        let (old_keys, new_keys) = (keys(&old), keys(&new));

        let removed: BTreeSet<_> = old_keys.difference(&new_keys).cloned().collect();
        let added: BTreeSet<_> = new_keys.difference(&old_keys).cloned().collect();

        prop_assert_eq!(keys_of(&result, ChangeKind::Removed), removed);
        prop_assert_eq!(keys_of(&result, ChangeKind::Added), added);
        prop_assert_eq!(result.summary.shared_keys, old_keys.intersection(&new_keys).count());
    }

    #[test]
    fn records_are_grouped_by_kind(old in arb_components(), new in arb_components()) {
        let result = diff(&old, &new);
        let rank = |c: &ChangeRecord| match c.kind() {
            ChangeKind::Removed => 0,
            ChangeKind::Added => 1,
            ChangeKind::IdentityChanged | ChangeKind::FieldChanged => 2,
        };
        let ranks: Vec<_> = result.changes.iter().map(rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ranks, sorted);
    }

    #[test]
    fn summary_matches_records(old in arb_components(), new in arb_components()) {
        let result = diff(&old, &new);
        let summary = &result.summary;
        prop_assert_eq!(summary.total_changes, result.changes.len());
        prop_assert_eq!(
            summary.removed + summary.added + summary.identity_changed + summary.field_changed,
            summary.total_changes
        );
    }

    #[test]
    fn copyright_change_is_isolated(
        components in prop::collection::vec(arb_component(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        // Keep one record per key so the edited record is the representative.
        let mut seen = BTreeSet::new();
        let old: Vec<Value> = components
            .into_iter()
            .filter(|c| seen.insert(c["name"].as_str().map(str::to_string)))
            .collect();

        let idx = pick.index(old.len());
        let mut new = old.clone();
        new[idx]["copyright"] = json!("Copyright 2099 Someone Else");

        let result = diff(&old, &new);
        let expected_key = LogicalKey::from(old[idx]["name"].as_str().unwrap_or_default());

        prop_assert_eq!(result.changes.len(), 1);
        prop_assert_eq!(result.changes[0].key(), &expected_key);
        prop_assert_eq!(result.changes[0].field(), Some(TrackedField::Copyright));
    }
}
