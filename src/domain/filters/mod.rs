//! Filter system for exception property suppression.

mod composite;
mod filter_trait;
mod name_filter;
mod pattern_filter;

pub use composite::CompositeFilter;
pub use filter_trait::PropertyFilter;
pub use name_filter::PropertyNameFilter;
pub use pattern_filter::ValuePatternFilter;
