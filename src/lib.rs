//! **Component-level diffing for Software Bills of Materials (SBOMs), with source line locations.**
//!
//! `sbom-refdiff` compares the `components` section of two CycloneDX-style JSON
//! documents. Components are matched by a *logical key*: the part of their
//! `bom-ref` before the first `@`, so `libfoo@1.0` and `libfoo@1.1` are the same
//! package at different versions. For every difference the library reports an
//! approximate line number in the original text, so a reviewer can jump straight
//! to the entry.
//!
//! Four kinds of change are reported, in this order:
//!
//! 1. **Removed**: keys only present in the old document.
//! 2. **Added**: keys only present in the new document.
//! 3. **Identity changed**: shared keys whose full `bom-ref` differs.
//! 4. **Field changed**: shared keys whose `name`, `version`, `licenses`,
//!    `authors` or `copyright` differ.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`SbomDocument`] (parsed tree plus raw lines) and the
//!   component view types ([`LogicalKey`], [`TrackedField`], [`FieldValue`]).
//! - **[`diff`]**: the [`DiffEngine`], identity resolution and line lookup.
//! - **[`parsers`]**: loading a document from a string or a file.
//! - **[`reports`]**: text, JSON and summary renderers.
//! - **[`pipeline`]** and **[`cli`]**: the parse → diff → report flow used by
//!   the `sbom-refdiff` binary.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Diffing Two SBOMs
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_refdiff::{parse_sbom, DiffEngine};
//! use sbom_refdiff::reports::render_change_lines;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old_sbom = parse_sbom(Path::new("path/to/old-sbom.json"))?;
//!     let new_sbom = parse_sbom(Path::new("path/to/new-sbom.json"))?;
//!
//!     let diff = DiffEngine::new().diff(&old_sbom, &new_sbom);
//!
//!     println!("Removed: {}", diff.summary.removed);
//!     println!("Added: {}", diff.summary.added);
//!
//!     for line in render_change_lines(&diff.changes) {
//!         println!("{line}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `sbom-refdiff` binary wraps
//! it: `sbom-refdiff diff old.json new.json [-O differences.txt]`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, LookupConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, DiffConfigBuilder};
pub use diff::{
    ChangeKind, ChangeRecord, DiffEngine, DiffResult, DiffSummary, IdentityMapping, LineLocator,
    LookupSink, SourceLine,
};
pub use error::{ErrorContext, Result, SbomDiffError};
pub use model::{Component, FieldValue, LogicalKey, SbomDocument, TrackedField};
pub use parsers::{parse_sbom, parse_sbom_str};
pub use reports::{ReportFormat, ReportGenerator};
