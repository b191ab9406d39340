//! A parsed SBOM document together with the text it was parsed from.

use super::Component;
use serde_json::Value;
use xxhash_rust::xxh3::xxh3_64;

/// JSON key of the component list section.
pub const COMPONENTS_SECTION: &str = "components";

/// A parsed SBOM and its original text lines.
///
/// The tree is used for structural comparison, the lines only for locating
/// entries in the source. Both must describe the same text.
#[derive(Debug, Clone)]
pub struct SbomDocument {
    tree: Value,
    lines: Vec<String>,
    content_hash: u64,
}

impl SbomDocument {
    /// Build a document from a parsed tree and the raw text it came from.
    #[must_use]
    pub fn new(tree: Value, raw_content: &str) -> Self {
        Self {
            tree,
            lines: raw_content.lines().map(str::to_string).collect(),
            content_hash: xxh3_64(raw_content.as_bytes()),
        }
    }

    /// Build a document from a parsed tree and pre-split lines.
    #[must_use]
    pub fn from_parts(tree: Value, lines: Vec<String>) -> Self {
        let content_hash = xxh3_64(lines.join("\n").as_bytes());
        Self {
            tree,
            lines,
            content_hash,
        }
    }

    /// The parsed document tree.
    #[must_use]
    pub const fn tree(&self) -> &Value {
        &self.tree
    }

    /// Original text lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Hash of the raw text, for quick identity checks.
    #[must_use]
    pub const fn content_hash(&self) -> u64 {
        self.content_hash
    }

    /// Components in document order.
    ///
    /// A missing `components` section, or one that is not a list, yields no
    /// components.
    pub fn components(&self) -> impl Iterator<Item = Component<'_>> {
        self.tree
            .get(COMPONENTS_SECTION)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(Component::new)
    }

    #[must_use]
    pub fn component_count(&self) -> usize {
        self.tree
            .get(COMPONENTS_SECTION)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
