//! Error types for filter construction.

use thiserror::Error;

/// Errors raised while assembling a composite property filter.
///
/// These are configuration errors, not filtering errors: they surface once,
/// during pipeline setup, and a composite that fails construction is never
/// usable in a degraded form.
#[derive(Debug, Error)]
pub enum CompositeFilterError {
    /// No filter collection was supplied at all.
    #[error("cannot build composite property filter: no filter collection was supplied")]
    MissingCollection,

    /// A collection was supplied but it contains zero filters. An empty
    /// composite could never suppress anything, which is very likely not
    /// what the caller intended.
    #[error("cannot build composite property filter: at least one constituent filter is required")]
    EmptyCollection,

    /// The entry at the given index did not resolve to a filter, so the
    /// caller can locate which filter registration is broken.
    #[error("cannot build composite property filter: filter at index {0} is missing")]
    MissingFilter(usize),
}
