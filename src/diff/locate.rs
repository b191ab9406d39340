//! Mapping components back to line numbers in the original text.
//!
//! Lookups are plain substring scans over the raw lines with no structural
//! awareness, so results are advisory: a lookup may miss (`-1`), or hit a line
//! belonging to another entity that happens to contain the same substring.

use crate::model::ANCHOR_MARKER;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;

/// A 1-based source line number, or "not found".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceLine(Option<NonZeroUsize>);

impl SourceLine {
    /// Sentinel for a lookup that matched nothing.
    pub const NOT_FOUND: Self = Self(None);

    /// Numeric rendering of [`Self::NOT_FOUND`].
    pub const NOT_FOUND_VALUE: i64 = -1;

    /// A found line. `0` is treated as not found.
    #[must_use]
    pub const fn at(line: usize) -> Self {
        Self(NonZeroUsize::new(line))
    }

    #[must_use]
    pub fn get(self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }

    /// The line as a signed number, `-1` when not found.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.get()
            .and_then(|n| i64::try_from(n).ok())
            .unwrap_or(Self::NOT_FOUND_VALUE)
    }
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for SourceLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl<'de> Deserialize<'de> for SourceLine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(deserializer)?;
        Ok(usize::try_from(n).map_or(Self::NOT_FOUND, Self::at))
    }
}

/// Which scan produced a lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// First line containing the identifier.
    Identifier,
    /// First line containing both the identifier and the anchor marker.
    Anchor,
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => f.write_str("identifier"),
            Self::Anchor => f.write_str("anchor"),
        }
    }
}

/// One completed lookup, reported to a [`LookupSink`].
#[derive(Debug, Clone, Copy)]
pub struct LookupEvent<'e> {
    pub strategy: LookupStrategy,
    /// The identifier searched for, if the component had one.
    pub identifier: Option<&'e str>,
    pub line: SourceLine,
    /// Text of the matched line.
    pub matched: Option<&'e str>,
}

/// Observer for line lookups.
pub trait LookupSink: Send + Sync {
    fn record(&self, event: &LookupEvent<'_>);
}

/// Sink that forwards lookup events to `tracing` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LookupSink for TracingSink {
    fn record(&self, event: &LookupEvent<'_>) {
        let identifier = event.identifier.unwrap_or_default();
        match event.line.get() {
            Some(line) => tracing::trace!(
                strategy = %event.strategy,
                identifier,
                line,
                text = event.matched.unwrap_or_default(),
                "Located identifier"
            ),
            None => tracing::trace!(
                strategy = %event.strategy,
                identifier,
                "Identifier not found"
            ),
        }
    }
}

/// Scans the raw lines of one document.
#[derive(Clone, Copy)]
pub struct LineLocator<'a> {
    lines: &'a [String],
    sink: Option<&'a dyn LookupSink>,
}

impl<'a> LineLocator<'a> {
    #[must_use]
    pub const fn new(lines: &'a [String]) -> Self {
        Self { lines, sink: None }
    }

    /// Report every lookup to `sink`.
    #[must_use]
    pub const fn with_sink(mut self, sink: &'a dyn LookupSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// First line containing `identifier`.
    #[must_use]
    pub fn find_identifier(&self, identifier: Option<&str>) -> SourceLine {
        self.scan(LookupStrategy::Identifier, identifier, |line, id| {
            line.contains(id)
        })
    }

    /// First line containing both `identifier` and the `bom-ref` anchor marker.
    #[must_use]
    pub fn find_anchor(&self, identifier: Option<&str>) -> SourceLine {
        self.scan(LookupStrategy::Anchor, identifier, |line, id| {
            let line = line.trim();
            line.contains(id) && line.contains(ANCHOR_MARKER)
        })
    }

    fn scan<F>(&self, strategy: LookupStrategy, identifier: Option<&str>, matches: F) -> SourceLine
    where
        F: Fn(&str, &str) -> bool,
    {
        // No identifier means nothing to search for. An empty one is still a
        // substring of every line.
        let hit = identifier.and_then(|id| {
            self.lines
                .iter()
                .enumerate()
                .find(|(_, line)| matches(line, id))
        });

        let line = hit.map_or(SourceLine::NOT_FOUND, |(idx, _)| SourceLine::at(idx + 1));

        if let Some(sink) = self.sink {
            sink.record(&LookupEvent {
                strategy,
                identifier,
                line,
                matched: hit.map(|(_, text)| text.as_str()),
            });
        }

        line
    }
}

impl fmt::Debug for LineLocator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLocator")
            .field("lines", &self.lines.len())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
