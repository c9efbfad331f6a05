use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseEventKind {
    HeaderSkipped,
    ContextStarted,
    ItemBuffered,
    ItemDiscarded,
    OrphanDropped,
    Flushed,
}

/// One structured event recorded while walking the line stream.
///
/// `line` is the 0-based index in the sequence being walked at the time:
/// the raw input for HeaderSkipped, the deduplicated sequence for the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseEvent {
    pub line: usize,
    pub kind: ParseEventKind,
    pub detail: String,
}

/// Structured record of what the extractor did and what it threw away.
///
/// Rides on the extraction result; recording events never changes what is
/// extracted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseTrace {
    pub events: Vec<ParseEvent>,
}

impl ParseTrace {
    pub(crate) fn push(&mut self, line: usize, kind: ParseEventKind, detail: impl Into<String>) {
        self.events.push(ParseEvent {
            line,
            kind,
            detail: detail.into(),
        });
    }

    /// Number of recorded events of the given kind.
    pub fn count(&self, kind: ParseEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}
