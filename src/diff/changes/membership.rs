//! Removed and added components.

use crate::diff::traits::{ChangeComputer, DiffContext};
use crate::diff::{ChangeRecord, IdentityMapping, LineLocator, SourceLine};
use crate::model::LogicalKey;
use serde_json::Value;

/// Reports keys present on only one side: removed keys first (old document
/// order), then added keys (new document order).
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipChangeComputer;

impl MembershipChangeComputer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// A component present on one side only, with its identifier line.
struct OneSided {
    key: LogicalKey,
    identifier: Option<String>,
    record: Value,
    line: SourceLine,
}

/// Keys of `side` missing from `other`, in `side` order.
fn one_sided(
    side: &IdentityMapping<'_>,
    other: &IdentityMapping<'_>,
    locator: LineLocator<'_>,
) -> Vec<OneSided> {
    side.iter()
        .filter(|(key, _)| !other.contains_key(key))
        .map(|(key, component)| {
            let identifier = component.identifier();
            OneSided {
                key: key.clone(),
                line: locator.find_identifier(identifier.as_deref()),
                identifier: identifier.map(|id| id.into_owned()),
                record: component.record().clone(),
            }
        })
        .collect()
}

impl ChangeComputer for MembershipChangeComputer {
    fn compute(&self, ctx: &DiffContext<'_>, out: &mut Vec<ChangeRecord>) {
        for entry in one_sided(ctx.old, ctx.new, ctx.old_lines) {
            out.push(ChangeRecord::Removed {
                key: entry.key,
                identifier: entry.identifier,
                record: entry.record,
                line: entry.line,
            });
        }

        for entry in one_sided(ctx.new, ctx.old, ctx.new_lines) {
            out.push(ChangeRecord::Added {
                key: entry.key,
                identifier: entry.identifier,
                record: entry.record,
                line: entry.line,
            });
        }
    }

    fn name(&self) -> &'static str {
        "MembershipChangeComputer"
    }
}
