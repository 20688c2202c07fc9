// src/ingest.rs
//! Aggregator: runs every adapter in order, isolates per-adapter failures,
//! and keeps only candidates that pass the relevance gate and the recency
//! window.

use chrono::{DateTime, Utc};
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

use crate::config::RadarConfig;
use crate::dates::{is_recent, parse_posted_at};
use crate::model::{JobPosting, SourceAdapter};
use crate::relevance::is_relevant;

/// One-time metrics registration (so series show up wherever the embedder
/// exports them).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "radar_candidates_total",
            "Raw candidates produced by adapters."
        );
        describe_counter!(
            "radar_kept_total",
            "Candidates kept after relevance + recency filtering."
        );
        describe_counter!(
            "radar_filtered_total",
            "Candidates dropped by relevance/recency/empty-title."
        );
        describe_counter!(
            "radar_adapter_errors_total",
            "Adapter fetch/parse errors."
        );
    });
}

/// What one aggregation pass produced, with counts for observability and
/// the report builder.
#[derive(Debug, Default)]
pub struct AggregateOutcome {
    pub postings: Vec<JobPosting>,
    pub candidates: usize,
    pub filtered: usize,
    pub adapter_errors: usize,
}

/// Run all adapters once, sequentially, in the given order. A failing
/// adapter contributes zero candidates and never aborts the pass; output
/// order is adapter invocation order, each adapter's own order preserved.
pub async fn run_once(
    adapters: &[Box<dyn SourceAdapter>],
    cfg: &RadarConfig,
    now: DateTime<Utc>,
) -> AggregateOutcome {
    ensure_metrics_described();

    let mut out = AggregateOutcome::default();

    for (idx, adapter) in adapters.iter().enumerate() {
        if idx > 0 && cfg.adapter_delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(cfg.adapter_delay_ms)).await;
        }

        let candidates = match adapter.fetch().await {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = ?e, adapter = adapter.name(), "adapter failed, skipping");
                counter!("radar_adapter_errors_total").increment(1);
                out.adapter_errors += 1;
                continue;
            }
        };

        counter!("radar_candidates_total").increment(candidates.len() as u64);
        out.candidates += candidates.len();

        for c in candidates {
            if c.title.is_empty()
                || !is_relevant(&c.title, c.description.as_deref().unwrap_or(""))
            {
                out.filtered += 1;
                continue;
            }
            let posted_at = c
                .posted_hint
                .as_deref()
                .and_then(|raw| parse_posted_at(now, raw));
            if !is_recent(now, posted_at, cfg.max_age_days) {
                out.filtered += 1;
                continue;
            }
            out.postings
                .push(JobPosting::from_candidate(c, adapter.name(), posted_at));
        }
    }

    counter!("radar_kept_total").increment(out.postings.len() as u64);
    counter!("radar_filtered_total").increment(out.filtered as u64);

    out
}
