// src/pipeline.rs
//! End-to-end run: aggregate → dedupe → annotate novelty → persist the
//! registry. The returned `RunReport` is the crate's whole output surface;
//! rendering, grouping and sorting belong to the report builder downstream.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::RadarConfig;
use crate::dedup::dedupe;
use crate::ingest;
use crate::model::{JobPosting, SourceAdapter};
use crate::registry::SeenRegistry;

/// Final postings plus the aggregate counts the report builder needs.
#[derive(Debug, serde::Serialize)]
pub struct RunReport {
    pub postings: Vec<JobPosting>,
    pub total: usize,
    pub new: usize,
    pub previously_seen: usize,
    pub adapter_errors: usize,
}

/// Run the whole pipeline once. An empty result set is a normal outcome;
/// the only error path is failing to persist the registry at the end.
pub async fn run(adapters: &[Box<dyn SourceAdapter>], cfg: &RadarConfig) -> Result<RunReport> {
    let now = Utc::now();

    let outcome = ingest::run_once(adapters, cfg, now).await;
    let mut postings = dedupe(outcome.postings);

    let mut registry = SeenRegistry::load(&cfg.registry_path);
    let today = now.format("%Y-%m-%d").to_string();
    registry.annotate(&mut postings, &today);
    registry
        .save(&cfg.registry_path)
        .context("persisting seen registry")?;

    let total = postings.len();
    let new = postings.iter().filter(|p| p.is_new).count();
    tracing::info!(
        total,
        new,
        previously_seen = total - new,
        adapter_errors = outcome.adapter_errors,
        "job radar run complete"
    );

    Ok(RunReport {
        postings,
        total,
        new,
        previously_seen: total - new,
        adapter_errors: outcome.adapter_errors,
    })
}
