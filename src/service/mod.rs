//! Service layer containing stream processing orchestration.

mod adapter;
mod scrub_service;

// Allow unused for potential library API usage
#[allow(unused)]
pub use adapter::EventAdapter;

pub use scrub_service::ScrubService;
