//! Value pattern filter implementation.

use std::borrow::Cow;

use regex::Regex;
use serde_json::Value;

use super::PropertyFilter;
use crate::domain::ExceptionInfo;

/// Filter that suppresses properties whose value matches a regex.
///
/// String values are matched as-is; other values are matched against their
/// compact JSON rendering. Null never matches.
pub struct ValuePatternFilter {
    pattern: Regex,
}

impl ValuePatternFilter {
    /// Create a new ValuePatternFilter.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self { pattern: regex })
    }

    fn render(value: &Value) -> Option<Cow<'_, str>> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl PropertyFilter for ValuePatternFilter {
    fn should_filter_property(
        &self,
        _exception: &ExceptionInfo,
        _property_name: &str,
        value: &Value,
    ) -> bool {
        match Self::render(value) {
            Some(text) => self.pattern.is_match(&text),
            None => false,
        }
    }
}
