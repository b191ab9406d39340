//! Component-level diff engine for SBOMs.
//!
//! Comparison runs in three stages:
//!
//! 1. [`IdentityMapping`] collapses each document's component list into one
//!    representative per logical key (the `bom-ref` prefix before `@`).
//! 2. Change computers (see [`changes`]) walk the two mappings and emit
//!    [`ChangeRecord`]s in report order.
//! 3. A [`LineLocator`] per document resolves each record to a line in the
//!    original text.
//!
//! # Example
//!
//! ```
//! use sbom_refdiff::diff::{ChangeKind, DiffEngine};
//! use sbom_refdiff::parsers::parse_sbom_str;
//!
//! let old = parse_sbom_str(r#"{"components": [{"bom-ref": "libfoo@1.0"}]}"#).unwrap();
//! let new = parse_sbom_str(r#"{"components": [{"bom-ref": "libfoo@1.1"}]}"#).unwrap();
//!
//! let result = DiffEngine::new().diff(&old, &new);
//! assert_eq!(result.of_kind(ChangeKind::IdentityChanged).count(), 1);
//! ```

pub mod changes;
mod engine;
mod identity;
mod locate;
mod result;
pub mod traits;

pub use engine::DiffEngine;
pub use identity::IdentityMapping;
pub use locate::{LineLocator, LookupEvent, LookupSink, LookupStrategy, SourceLine, TracingSink};
pub use result::{ChangeKind, ChangeRecord, DiffResult, DiffSummary};
pub use traits::{ChangeComputer, DiffContext};
