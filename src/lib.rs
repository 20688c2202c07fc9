// src/lib.rs
//! job-radar — aggregates job postings from heterogeneous board adapters,
//! filters them against a fixed growth/marketing interest profile, drops
//! stale and duplicate postings, and tracks which postings are new since
//! the previous run via a persisted seen registry.
//!
//! The crate is the pipeline core only: per-site HTML scraping lives
//! behind the [`SourceAdapter`] trait, and rendering the final report is
//! the caller's job, fed by [`pipeline::run`]'s `RunReport`.

pub mod adapters;
pub mod config;
pub mod dates;
pub mod dedup;
pub mod ingest;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod relevance;

// ---- Re-exports for stable public API ----
pub use config::RadarConfig;
pub use model::{JobPosting, RawCandidate, SourceAdapter};
pub use pipeline::{run, RunReport};
pub use registry::SeenRegistry;

/// Install a compact tracing subscriber, honoring `RUST_LOG` when set.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("job_radar=info,warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
