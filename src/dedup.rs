// src/dedup.rs
//! Deduplicator: collapse postings that share a url, keeping the first
//! occurrence in input order. Postings without a url are never collapsed.

use std::collections::HashSet;

use crate::model::{dedup_key, JobPosting};

/// Stable, order-preserving first-wins filter on the url identity key.
/// Idempotent: running it twice changes nothing.
pub fn dedupe(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut keep = Vec::with_capacity(postings.len());

    for p in postings {
        match dedup_key(&p) {
            Some(url) => {
                let url = url.to_owned();
                if seen_urls.insert(url) {
                    keep.push(p);
                }
            }
            None => keep.push(p),
        }
    }

    keep
}
