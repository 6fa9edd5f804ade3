//! Event scrubbing service.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use tracing::{debug, error, info};

use crate::cli::Format;
use crate::config::Config;
use crate::domain::{
    CompositeFilter, ExceptionInfo, LogEvent, PropertyFilter, ScrubOutcome,
};
use crate::service::adapter::EventAdapter;

/// Service that applies the configured composite filter to a stream of
/// structured log events.
pub struct ScrubService {
    config: Config,
    filter: Option<CompositeFilter>,
    adapter: EventAdapter,
}

impl ScrubService {
    /// Create a new ScrubService, assembling the composite filter from
    /// configuration. Assembly is eager: a broken filter registration fails
    /// here, at startup, never mid-stream.
    pub fn new(config: Config, format: Format) -> Result<Self> {
        let filter = if config.property_filters.is_empty() {
            // An empty composite is meaningless; run without one instead
            info!("no property filters configured; events pass through unmodified");
            None
        } else {
            let composite = CompositeFilter::from_specs(&config.property_filters)?;
            debug!("assembled composite of {} filter(s)", composite.filter_count());
            Some(composite)
        };

        Ok(Self {
            config,
            filter,
            adapter: EventAdapter::new(format),
        })
    }

    /// Run the scrubbing loop.
    ///
    /// Reads NDJSON events from stdin, scrubs each exception property bag,
    /// and writes the events to stdout. Lines that cannot be parsed are
    /// dropped rather than forwarded unchecked; if any were dropped, the run
    /// finishes with an error.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        let mut dropped = 0usize;

        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut event = match self.adapter.parse_event(&line) {
                Ok(event) => event,
                Err(e) => {
                    error!("dropping unparseable event line: {}", e);
                    dropped += 1;
                    continue;
                }
            };

            let outcome = self.scrub_event(&mut event);
            if outcome.suppressed > 0 {
                debug!(
                    suppressed = outcome.suppressed,
                    kept = outcome.kept,
                    "scrubbed exception properties"
                );
            }

            writeln!(stdout, "{}", self.adapter.format_event(&event)?)?;
        }

        if dropped > 0 {
            bail!("{} event line(s) could not be parsed and were dropped", dropped);
        }

        Ok(())
    }

    /// Apply the composite filter to the event's exception payload, removing
    /// suppressed properties in place.
    pub fn scrub_event(&self, event: &mut LogEvent) -> ScrubOutcome {
        match (&self.filter, event.exception.as_mut()) {
            (Some(filter), Some(exception)) => {
                scrub_exception(filter, exception, self.config.scrub_chained)
            }
            _ => ScrubOutcome::default(),
        }
    }
}

/// Ask the filter about every property in the exception's bag, drop the ones
/// it suppresses, and recurse through chained source exceptions when asked.
fn scrub_exception(
    filter: &CompositeFilter,
    exception: &mut ExceptionInfo,
    chained: bool,
) -> ScrubOutcome {
    let mut doomed = Vec::new();
    for (name, value) in &exception.properties {
        if filter.should_filter_property(exception, name, value) {
            doomed.push(name.clone());
        }
    }

    let mut outcome = ScrubOutcome {
        kept: exception.properties.len() - doomed.len(),
        suppressed: doomed.len(),
    };
    for name in &doomed {
        exception.properties.remove(name);
    }

    if chained {
        if let Some(source) = exception.source.as_deref_mut() {
            outcome.absorb(scrub_exception(filter, source, chained));
        }
    }

    outcome
}
