//! Component records and the identity vocabulary used to compare them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// JSON key holding a component's identifier.
pub const IDENTIFIER_FIELD: &str = "bom-ref";

/// Literal token marking the identity-bearing line of a component in source text.
pub const ANCHOR_MARKER: &str = IDENTIFIER_FIELD;

/// Separator between the logical name and the version qualifier of an identifier.
pub const KEY_SEPARATOR: char = '@';

/// Borrowed view over one entry of a document's `components` list.
///
/// The record is kept as the raw JSON value so that attribute comparison is a
/// deep structural comparison of whatever the document contains. Entries that
/// are not JSON objects simply have no fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component<'a> {
    record: &'a Value,
}

impl<'a> Component<'a> {
    /// Wrap a raw component record.
    #[must_use]
    pub const fn new(record: &'a Value) -> Self {
        Self { record }
    }

    /// The underlying JSON record.
    #[must_use]
    pub const fn record(&self) -> &'a Value {
        self.record
    }

    /// The raw identifier string (`bom-ref`).
    ///
    /// Numbers and booleans are stringified; `null`, arrays and objects count
    /// as no identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<Cow<'a, str>> {
        match self.record.get(IDENTIFIER_FIELD)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// The version-independent key used to join this component across documents.
    #[must_use]
    pub fn logical_key(&self) -> LogicalKey {
        LogicalKey::from_identifier(self.identifier().as_deref())
    }

    /// Look up a tracked attribute. `None` means the attribute is absent,
    /// which is distinct from an explicit `null` or an empty value.
    #[must_use]
    pub fn field(&self, field: TrackedField) -> Option<&'a Value> {
        self.record.get(field.as_str())
    }

    /// Pretty-printed JSON dump of the whole record.
    #[must_use]
    pub fn dump(&self) -> String {
        serde_json::to_string_pretty(self.record).unwrap_or_else(|_| self.record.to_string())
    }
}

/// Version-independent identity of a component.
///
/// Derived from the identifier's prefix before the first `@`. Components
/// without an identifier, or whose identifier starts with `@`, share the
/// empty (degenerate) key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogicalKey(String);

impl LogicalKey {
    /// Derive the key from an identifier string.
    #[must_use]
    pub fn from_identifier(identifier: Option<&str>) -> Self {
        let prefix = identifier.map_or("", |id| {
            id.split_once(KEY_SEPARATOR).map_or(id, |(name, _)| name)
        });
        Self(prefix.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty key shared by components with no usable identifier.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogicalKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The fixed allow-list of attributes compared between representatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackedField {
    Name,
    Version,
    Licenses,
    Authors,
    Copyright,
}

impl TrackedField {
    /// All tracked fields, in comparison order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Version,
        Self::Licenses,
        Self::Authors,
        Self::Copyright,
    ];

    /// The JSON key of this attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Version => "version",
            Self::Licenses => "licenses",
            Self::Authors => "authors",
            Self::Copyright => "copyright",
        }
    }
}

impl fmt::Display for TrackedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owned attribute value captured in a change record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// The attribute does not exist on the record.
    Absent,
    /// The attribute exists, possibly as `null` or an empty value.
    Present(Value),
}

impl FieldValue {
    /// Text used when an attribute is missing.
    pub const ABSENT_TEXT: &'static str = "Not Present";

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<&Value>> for FieldValue {
    fn from(value: Option<&Value>) -> Self {
        value.map_or(Self::Absent, |v| Self::Present(v.clone()))
    }
}

impl fmt::Display for FieldValue {
    /// Strings render bare, `null` as nothing and booleans as `True`/`False`.
    /// Arrays and objects render as indented JSON over several lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Absent => return f.write_str(Self::ABSENT_TEXT),
            Self::Present(value) => value,
        };
        match value {
            Value::Null => Ok(()),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(_) | Value::Object(_) => {
                let text = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}
