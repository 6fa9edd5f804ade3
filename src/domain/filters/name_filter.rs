//! Property name filter implementation.

use serde_json::Value;

use super::PropertyFilter;
use crate::domain::ExceptionInfo;

/// Filter that suppresses properties by exact name match.
///
/// The exception and the property value play no part in the decision.
pub struct PropertyNameFilter {
    names: Vec<String>,
}

impl PropertyNameFilter {
    /// Create a new PropertyNameFilter for the given names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl PropertyFilter for PropertyNameFilter {
    fn should_filter_property(
        &self,
        _exception: &ExceptionInfo,
        property_name: &str,
        _value: &Value,
    ) -> bool {
        self.names.iter().any(|name| name == property_name)
    }
}
