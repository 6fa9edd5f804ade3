//! Core domain types for structured log events and their exception payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single structured log event, one NDJSON line on the wire.
///
/// Only the exception payload is modeled; every other event field is carried
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// Exception payload attached by the enrichment pipeline, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<ExceptionInfo>,

    /// All remaining event fields (timestamp, level, message, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// An exception instance as it appears inside a structured log event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionInfo {
    /// Exception type name, e.g. "SqlTimeoutException".
    #[serde(rename = "type")]
    pub type_name: String,

    /// Exception message.
    #[serde(default)]
    pub message: String,

    /// Property bag extracted from the exception by the enrichment pipeline.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,

    /// Chained source exception, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Box<ExceptionInfo>>,
}

/// Per-event scrub counters, used for debug logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubOutcome {
    /// Properties that survived filtering.
    pub kept: usize,
    /// Properties suppressed by the filter.
    pub suppressed: usize,
}

impl ScrubOutcome {
    /// Fold counters from a chained exception into this outcome.
    pub fn absorb(&mut self, other: ScrubOutcome) {
        self.kept += other.kept;
        self.suppressed += other.suppressed;
    }
}
