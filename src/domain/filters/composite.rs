//! Composite property filter.

use serde_json::Value;
use tracing::warn;

use super::{PropertyFilter, PropertyNameFilter, ValuePatternFilter};
use crate::config::PropertyFilterSpec;
use crate::domain::{CompositeFilterError, ExceptionInfo};

/// Combines an ordered set of property filters into a single filter that
/// suppresses a property if any constituent alone would suppress it. This is
/// OR over a set of booleans, evaluated in the order the constituents were
/// supplied at construction.
pub struct CompositeFilter {
    filters: Vec<Box<dyn PropertyFilter>>,
}

impl std::fmt::Debug for CompositeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl CompositeFilter {
    /// Create a composite from an ordered, fully-resolved filter list.
    ///
    /// # Errors
    ///
    /// Returns [`CompositeFilterError::EmptyCollection`] when `filters` has
    /// zero elements.
    pub fn new(filters: Vec<Box<dyn PropertyFilter>>) -> Result<Self, CompositeFilterError> {
        if filters.is_empty() {
            return Err(CompositeFilterError::EmptyCollection);
        }
        Ok(Self { filters })
    }

    /// Create a composite from per-entry resolution results, the shape
    /// produced when configured filter registrations are looked up one by
    /// one. `None` for the whole collection means no filter list was
    /// supplied; `None` at an index means that registration did not resolve.
    ///
    /// Validation is eager: a broken entry is reported here, during pipeline
    /// setup, rather than as a fault at first use inside exception-handling
    /// code.
    ///
    /// # Errors
    ///
    /// Returns [`CompositeFilterError::MissingCollection`],
    /// [`CompositeFilterError::EmptyCollection`], or
    /// [`CompositeFilterError::MissingFilter`] naming the offending index.
    pub fn from_resolved(
        entries: Option<Vec<Option<Box<dyn PropertyFilter>>>>,
    ) -> Result<Self, CompositeFilterError> {
        let entries = entries.ok_or(CompositeFilterError::MissingCollection)?;
        if entries.is_empty() {
            return Err(CompositeFilterError::EmptyCollection);
        }

        let mut filters = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Some(filter) => filters.push(filter),
                None => return Err(CompositeFilterError::MissingFilter(index)),
            }
        }

        Ok(Self { filters })
    }

    /// Build a composite from configuration, preserving declaration order.
    pub fn from_specs(specs: &[PropertyFilterSpec]) -> Result<Self, CompositeFilterError> {
        let resolved = specs.iter().map(resolve_spec).collect();
        Self::from_resolved(Some(resolved))
    }

    /// Number of constituent filters. Never zero.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }
}

impl PropertyFilter for CompositeFilter {
    /// Evaluate constituents in order and short-circuit on the first one
    /// that suppresses. A panicking constituent propagates unchanged; no
    /// fallback decision is substituted and remaining constituents are not
    /// consulted.
    fn should_filter_property(
        &self,
        exception: &ExceptionInfo,
        property_name: &str,
        value: &Value,
    ) -> bool {
        for filter in &self.filters {
            if filter.should_filter_property(exception, property_name, value) {
                return true;
            }
        }

        false
    }
}

/// Resolve one configured filter registration. Returns `None` when the
/// registration cannot produce a working filter, leaving the composite
/// constructor to report the index.
fn resolve_spec(spec: &PropertyFilterSpec) -> Option<Box<dyn PropertyFilter>> {
    match spec {
        PropertyFilterSpec::Name { names } => {
            Some(Box::new(PropertyNameFilter::new(names.clone())))
        }
        PropertyFilterSpec::ValuePattern { pattern } => {
            match ValuePatternFilter::new(pattern) {
                Ok(filter) => Some(Box::new(filter)),
                Err(e) => {
                    warn!("value-pattern filter '{}' did not compile: {}", pattern, e);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::{json, Map};

    use super::*;

    fn sample_exception() -> ExceptionInfo {
        ExceptionInfo {
            type_name: "SqlTimeoutException".to_string(),
            message: "connection timed out".to_string(),
            properties: Map::new(),
            source: None,
        }
    }

    fn always(verdict: bool) -> Box<dyn PropertyFilter> {
        Box::new(move |_: &ExceptionInfo, _: &str, _: &Value| verdict)
    }

    /// Filter that counts invocations before answering `verdict`.
    fn counting(verdict: bool, calls: &Arc<AtomicUsize>) -> Box<dyn PropertyFilter> {
        let calls = Arc::clone(calls);
        Box::new(move |_: &ExceptionInfo, _: &str, _: &Value| {
            calls.fetch_add(1, Ordering::SeqCst);
            verdict
        })
    }

    fn panicking() -> Box<dyn PropertyFilter> {
        Box::new(|_: &ExceptionInfo, _: &str, _: &Value| -> bool {
            panic!("filter backend unavailable")
        })
    }

    #[test]
    fn test_returns_false_when_no_constituent_matches() {
        let composite = CompositeFilter::new(vec![always(false), always(false)]).unwrap();
        let ex = sample_exception();

        assert!(!composite.should_filter_property(&ex, "Message", &json!("x")));
    }

    #[test]
    fn test_returns_true_when_any_constituent_matches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let composite =
            CompositeFilter::new(vec![always(false), counting(true, &calls)]).unwrap();
        let ex = sample_exception();

        assert!(composite.should_filter_property(&ex, "Message", &json!("x")));
        // second filter was reached because the first declined
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_short_circuits_after_first_match() {
        let calls = Arc::new(AtomicUsize::new(0));
        let composite =
            CompositeFilter::new(vec![always(true), counting(false, &calls)]).unwrap();
        let ex = sample_exception();

        assert!(composite.should_filter_property(&ex, "Message", &json!("x")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_matching_filter_shields_panicking_successor() {
        let composite = CompositeFilter::new(vec![always(true), panicking()]).unwrap();
        let ex = sample_exception();

        assert!(composite.should_filter_property(&ex, "Message", &json!("x")));
    }

    #[test]
    #[should_panic(expected = "filter backend unavailable")]
    fn test_constituent_panic_propagates() {
        let composite = CompositeFilter::new(vec![panicking(), always(true)]).unwrap();
        let ex = sample_exception();

        composite.should_filter_property(&ex, "Message", &json!("x"));
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let composite = CompositeFilter::new(vec![always(false), always(true)]).unwrap();
        let ex = sample_exception();
        let value = json!(42);

        for _ in 0..3 {
            assert!(composite.should_filter_property(&ex, "Timeout", &value));
        }
    }

    #[test]
    fn test_composites_nest() {
        let inner = CompositeFilter::new(vec![always(false), always(true)]).unwrap();
        let outer =
            CompositeFilter::new(vec![always(false), Box::new(inner)]).unwrap();
        let ex = sample_exception();

        assert_eq!(outer.filter_count(), 2);
        assert!(outer.should_filter_property(&ex, "Message", &json!("x")));
    }

    #[test]
    fn test_empty_collection_is_rejected() {
        let err = CompositeFilter::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CompositeFilterError::EmptyCollection));

        let err = CompositeFilter::from_resolved(Some(Vec::new())).unwrap_err();
        assert!(matches!(err, CompositeFilterError::EmptyCollection));
    }

    #[test]
    fn test_missing_collection_is_rejected() {
        let err = CompositeFilter::from_resolved(None).unwrap_err();
        assert!(matches!(err, CompositeFilterError::MissingCollection));
    }

    #[test]
    fn test_missing_entry_is_reported_with_its_index() {
        let err =
            CompositeFilter::from_resolved(Some(vec![Some(always(false)), None])).unwrap_err();

        assert!(matches!(err, CompositeFilterError::MissingFilter(1)));
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_from_specs_preserves_declaration_order() {
        let specs = vec![
            PropertyFilterSpec::Name {
                names: vec!["Password".to_string()],
            },
            PropertyFilterSpec::ValuePattern {
                pattern: "(?i)bearer ".to_string(),
            },
        ];

        let composite = CompositeFilter::from_specs(&specs).unwrap();
        let ex = sample_exception();

        assert_eq!(composite.filter_count(), 2);
        assert!(composite.should_filter_property(&ex, "Password", &json!("hunter2")));
        assert!(composite.should_filter_property(&ex, "Header", &json!("Bearer abc123")));
        assert!(!composite.should_filter_property(&ex, "Retries", &json!(3)));
    }

    #[test]
    fn test_from_specs_reports_unresolvable_registration() {
        let specs = vec![
            PropertyFilterSpec::Name {
                names: vec!["Password".to_string()],
            },
            PropertyFilterSpec::ValuePattern {
                pattern: "(unclosed".to_string(),
            },
        ];

        let err = CompositeFilter::from_specs(&specs).unwrap_err();
        assert!(matches!(err, CompositeFilterError::MissingFilter(1)));
    }
}
