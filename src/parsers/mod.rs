//! Loading SBOM documents.
//!
//! Parsing is deliberately shallow: the JSON text becomes a
//! [`serde_json::Value`] tree and the raw lines are kept alongside it for line
//! lookup. No schema is enforced beyond requiring an object at the root.
//!
//! ```no_run
//! use sbom_refdiff::parsers::parse_sbom;
//! use std::path::Path;
//!
//! let doc = parse_sbom(Path::new("bom.json")).unwrap();
//! println!("{} components", doc.component_count());
//! ```

use crate::error::{ErrorContext, ParseErrorKind, Result, SbomDiffError};
use crate::model::SbomDocument;
use serde_json::Value;
use std::path::Path;

/// Parse an SBOM from its JSON text.
pub fn parse_sbom_str(content: &str) -> Result<SbomDocument> {
    let tree: Value = serde_json::from_str(content)?;
    if !tree.is_object() {
        return Err(SbomDiffError::parse(
            "document root",
            ParseErrorKind::NotAnObject(json_type_name(&tree)),
        ));
    }
    Ok(SbomDocument::new(tree, content))
}

/// Read and parse an SBOM file.
pub fn parse_sbom(path: &Path) -> Result<SbomDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| SbomDiffError::io(path, e))?;
    parse_sbom_str(&content).with_context(|| format!("parsing {}", path.display()))
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
