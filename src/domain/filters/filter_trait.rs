//! Property filter trait definition.

use serde_json::Value;

use crate::domain::ExceptionInfo;

/// Trait for exception property filters.
///
/// A filter inspects one property of one exception and decides whether that
/// property should be excluded from the structured log event. Implementations
/// must be safe to call concurrently; the composite relies on this when the
/// surrounding pipeline evaluates from multiple threads.
pub trait PropertyFilter: Send + Sync {
    /// Decide whether the named property of `exception` should be suppressed.
    ///
    /// `value` may be `Value::Null`; `property_name` is passed through opaque
    /// and is not validated here.
    fn should_filter_property(
        &self,
        exception: &ExceptionInfo,
        property_name: &str,
        value: &Value,
    ) -> bool;
}

/// Plain functions and closures are filters too.
impl<F> PropertyFilter for F
where
    F: Fn(&ExceptionInfo, &str, &Value) -> bool + Send + Sync,
{
    fn should_filter_property(
        &self,
        exception: &ExceptionInfo,
        property_name: &str,
        value: &Value,
    ) -> bool {
        self(exception, property_name, value)
    }
}
