//! Event format adapters.
//!
//! This module provides line parsing and re-serialization for:
//! - Plain JSON events (default)
//! - CLEF (Compact Log Event Format)

use anyhow::{anyhow, Result};
use serde_json::{Map, Value};

use crate::cli::Format;
use crate::domain::{ExceptionInfo, LogEvent};

/// Reified keys of a CLEF "ExceptionDetail" object; everything else in the
/// object is the exception's property bag.
const CLEF_DETAIL_KEY: &str = "ExceptionDetail";
const CLEF_TYPE_KEY: &str = "Type";
const CLEF_MESSAGE_KEY: &str = "Message";
const CLEF_SOURCE_KEY: &str = "Source";

/// Adapter for converting between wire-format lines and internal events.
pub struct EventAdapter {
    format: Format,
}

impl EventAdapter {
    /// Create a new adapter for the specified format.
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Parse one NDJSON line into a LogEvent based on format.
    pub fn parse_event(&self, line: &str) -> Result<LogEvent> {
        match self.format {
            Format::Json => self.parse_json_event(line),
            Format::Clef => self.parse_clef_event(line),
        }
    }

    /// Serialize a (scrubbed) event back to one line in the same format.
    pub fn format_event(&self, event: &LogEvent) -> Result<String> {
        match self.format {
            Format::Json => self.format_json_event(event),
            Format::Clef => self.format_clef_event(event),
        }
    }

    // === Plain JSON format ===

    fn parse_json_event(&self, line: &str) -> Result<LogEvent> {
        serde_json::from_str(line).map_err(|e| anyhow!("Failed to parse JSON event: {}", e))
    }

    fn format_json_event(&self, event: &LogEvent) -> Result<String> {
        serde_json::to_string(event).map_err(|e| anyhow!("Failed to serialize JSON event: {}", e))
    }

    // === CLEF format ===

    fn parse_clef_event(&self, line: &str) -> Result<LogEvent> {
        let mut fields: Map<String, Value> = serde_json::from_str(line)
            .map_err(|e| anyhow!("Failed to parse CLEF event: {}", e))?;

        let exception = match fields.remove(CLEF_DETAIL_KEY) {
            Some(detail) => Some(exception_from_detail(detail)?),
            None => None,
        };

        Ok(LogEvent { exception, fields })
    }

    fn format_clef_event(&self, event: &LogEvent) -> Result<String> {
        let mut fields = event.fields.clone();
        if let Some(exception) = &event.exception {
            fields.insert(CLEF_DETAIL_KEY.to_string(), detail_from_exception(exception));
        }

        serde_json::to_string(&fields).map_err(|e| anyhow!("Failed to serialize CLEF event: {}", e))
    }
}

/// Convert a CLEF ExceptionDetail object into an ExceptionInfo, recursing
/// through chained Source objects.
fn exception_from_detail(detail: Value) -> Result<ExceptionInfo> {
    let Value::Object(mut map) = detail else {
        return Err(anyhow!("ExceptionDetail must be a JSON object"));
    };

    let type_name = take_string(&mut map, CLEF_TYPE_KEY);
    let message = take_string(&mut map, CLEF_MESSAGE_KEY);
    let source = match map.remove(CLEF_SOURCE_KEY) {
        Some(Value::Null) | None => None,
        Some(inner) => Some(Box::new(exception_from_detail(inner)?)),
    };

    Ok(ExceptionInfo {
        type_name,
        message,
        properties: map,
        source,
    })
}

fn detail_from_exception(exception: &ExceptionInfo) -> Value {
    let mut map = Map::new();
    map.insert(
        CLEF_TYPE_KEY.to_string(),
        Value::String(exception.type_name.clone()),
    );
    map.insert(
        CLEF_MESSAGE_KEY.to_string(),
        Value::String(exception.message.clone()),
    );

    for (name, value) in &exception.properties {
        map.insert(name.clone(), value.clone());
    }

    if let Some(source) = &exception.source {
        map.insert(CLEF_SOURCE_KEY.to_string(), detail_from_exception(source));
    }

    Value::Object(map)
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> String {
    match map.remove(key) {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
