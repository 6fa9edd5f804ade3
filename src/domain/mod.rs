//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Structured log event and exception payload types
//! - Property filter trait, composite combinator, and concrete filters
//! - Logger with rotation

mod error;
pub mod filters;
pub mod logger;
mod types;

pub use error::CompositeFilterError;
pub use filters::{CompositeFilter, PropertyFilter};
pub use types::{ExceptionInfo, LogEvent, ScrubOutcome};

// Allow unused for potential library API usage
#[allow(unused)]
pub use filters::{PropertyNameFilter, ValuePatternFilter};
