//! Document and component model.
//!
//! Components are not normalized into a fixed schema: a [`Component`] is a
//! borrowed view over the JSON record of the [`SbomDocument`] it came from, so
//! tracked attributes can be compared exactly as the document spells them.

mod component;
mod document;

pub use component::{
    ANCHOR_MARKER, Component, FieldValue, IDENTIFIER_FIELD, KEY_SEPARATOR, LogicalKey,
    TrackedField,
};
pub use document::{COMPONENTS_SECTION, SbomDocument};
