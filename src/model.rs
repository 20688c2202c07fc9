// src/model.rs
//! Core data model: the normalized `JobPosting`, the raw candidate shape
//! adapters emit, and the `SourceAdapter` contract.

use anyhow::Result;
use chrono::{DateTime, Utc};

/// Sentinel used when a board gives us no usable company name.
pub const UNKNOWN_COMPANY: &str = "Unknown";
/// Default location when a posting does not specify one.
pub const DEFAULT_LOCATION: &str = "Remote";

/// One normalized job posting, as handed to the report builder.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    /// Canonical identity when non-empty; may be empty for boards that
    /// never expose a stable link.
    pub url: String,
    pub location: String,
    /// Absent means "unknown, treat as recent".
    pub posted_at: Option<DateTime<Utc>>,
    pub description: String,
    /// Origin adapter/site, e.g. "cryptojobslist.com".
    pub source: String,
    pub salary: Option<String>,
    /// Preserved in the order the adapter produced them.
    pub tags: Vec<String>,
    /// Set by the novelty tracker; true until the identity key is found
    /// in a prior run's registry.
    pub is_new: bool,
    /// First-seen date string from the registry, only for non-new postings.
    pub first_seen: Option<String>,
}

impl JobPosting {
    /// Build a posting from an accepted raw candidate, applying the
    /// "Unknown"/"Remote" defaults for fields the board did not provide.
    pub fn from_candidate(
        c: RawCandidate,
        source: &str,
        posted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            title: c.title,
            company: c
                .company
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            url: c.url.unwrap_or_default(),
            location: c
                .location
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            posted_at,
            description: c.description.unwrap_or_default(),
            source: source.to_string(),
            salary: c.salary,
            tags: c.tags,
            is_new: true,
            first_seen: None,
        }
    }
}

/// Raw candidate tuple produced by a source adapter, before relevance and
/// recency filtering. Everything but the title is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCandidate {
    pub title: String,
    pub company: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    /// Unparsed date text exactly as the board rendered it ("2 days ago",
    /// "2026-08-15", ...). The date normalizer deals with it later.
    pub posted_hint: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub tags: Vec<String>,
}

/// One job source. Implementations self-limit their candidate count and
/// keep fetch/parse failures behind the `Result`; the aggregator treats
/// any error as "zero candidates from this source".
#[async_trait::async_trait]
pub trait SourceAdapter: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawCandidate>>;
    fn name(&self) -> &'static str;
}

/// Dedup identity: the url when non-empty, otherwise none — postings
/// without a url are never deduplicated against each other.
pub fn dedup_key(p: &JobPosting) -> Option<&str> {
    if p.url.is_empty() {
        None
    } else {
        Some(&p.url)
    }
}

/// Novelty identity: the url when non-empty, else a `title|company`
/// composite. Unlike `dedup_key` this always yields a key, so recurring
/// url-less postings are still recognized across runs (and may collide).
pub fn novelty_key(p: &JobPosting) -> String {
    if p.url.is_empty() {
        format!("{}|{}", p.title, p.company)
    } else {
        p.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str) -> RawCandidate {
        RawCandidate {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_applied_for_missing_fields() {
        let p = JobPosting::from_candidate(candidate("Growth Lead"), "test", None);
        assert_eq!(p.company, "Unknown");
        assert_eq!(p.location, "Remote");
        assert_eq!(p.url, "");
        assert!(p.is_new);
        assert_eq!(p.first_seen, None);
    }

    #[test]
    fn blank_company_counts_as_missing() {
        let mut c = candidate("Growth Lead");
        c.company = Some("   ".to_string());
        let p = JobPosting::from_candidate(c, "test", None);
        assert_eq!(p.company, "Unknown");
    }

    #[test]
    fn key_policies_diverge_for_url_less_postings() {
        let mut p = JobPosting::from_candidate(candidate("Growth Lead"), "test", None);
        assert_eq!(dedup_key(&p), None);
        assert_eq!(novelty_key(&p), "Growth Lead|Unknown");

        p.url = "https://example.test/j/1".to_string();
        assert_eq!(dedup_key(&p), Some("https://example.test/j/1"));
        assert_eq!(novelty_key(&p), "https://example.test/j/1");
    }
}
