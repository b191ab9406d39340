//! Trait definitions for diff computation strategies.
//!
//! Each change computer covers one category of records. The engine runs them
//! in a fixed order, which fixes the order of the report.

use super::{ChangeRecord, IdentityMapping, LineLocator};

/// Inputs shared by all change computers for one comparison.
#[derive(Debug, Clone, Copy)]
pub struct DiffContext<'a> {
    pub old: &'a IdentityMapping<'a>,
    pub new: &'a IdentityMapping<'a>,
    /// Locator over the old document's raw lines
    pub old_lines: LineLocator<'a>,
    /// Locator over the new document's raw lines
    pub new_lines: LineLocator<'a>,
}

/// Trait for computing a specific category of change between two documents.
pub trait ChangeComputer: Send + Sync {
    /// Append the records this computer is responsible for, in report order.
    fn compute(&self, ctx: &DiffContext<'_>, out: &mut Vec<ChangeRecord>);

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &'static str;
}
