// src/registry.rs
//! Cross-run seen registry: a persisted url/title|company → first-seen
//! mapping used to annotate each posting as new or previously seen.
//!
//! The registry only grows; there is no eviction or TTL. Known limitation,
//! kept deliberately: inventing a pruning policy would change which
//! postings count as "new".

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{novelty_key, JobPosting};

/// Sentinel first-seen value for registry entries that predate the field.
const UNKNOWN_FIRST_SEEN: &str = "Unknown";

/// One persisted record per identity key.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeenEntry {
    #[serde(default)]
    pub first_seen: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Default)]
pub struct SeenRegistry {
    entries: BTreeMap<String, SeenEntry>,
}

impl SeenRegistry {
    /// Load the registry from disk. A missing or unreadable file is not an
    /// error: every run must survive a lost registry, it just means every
    /// posting comes out marked new.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(error = ?e, path = %path.display(), "seen registry unreadable, starting empty");
                }
                return Self::default();
            }
        };
        match serde_json::from_str::<BTreeMap<String, SeenEntry>>(&content) {
            Ok(entries) => Self { entries },
            Err(e) => {
                tracing::warn!(error = ?e, path = %path.display(), "seen registry corrupt, starting empty");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SeenEntry> {
        self.entries.get(key)
    }

    /// Classify every posting against the pre-run state, then record the
    /// keys that were missing. Classification runs over the whole set
    /// before any insert, so two same-key postings in one run are both
    /// "new"; the insert step never touches existing entries, keeping the
    /// first-seen date immutable once recorded.
    pub fn annotate(&mut self, postings: &mut [JobPosting], today: &str) {
        for p in postings.iter_mut() {
            match self.entries.get(&novelty_key(p)) {
                Some(entry) => {
                    p.is_new = false;
                    p.first_seen = Some(
                        entry
                            .first_seen
                            .clone()
                            .unwrap_or_else(|| UNKNOWN_FIRST_SEEN.to_string()),
                    );
                }
                None => {
                    p.is_new = true;
                    p.first_seen = None;
                }
            }
        }

        for p in postings.iter() {
            self.entries
                .entry(novelty_key(p))
                .or_insert_with(|| SeenEntry {
                    first_seen: Some(today.to_string()),
                    title: p.title.clone(),
                    company: p.company.clone(),
                });
        }
    }

    /// Overwrite the registry wholesale: write a sibling temp file, then
    /// rename over the target so a crash never leaves a half-written file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .context("serializing seen registry")?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &json)
            .with_context(|| format!("writing seen registry temp file {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("replacing seen registry {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawCandidate;

    fn posting(title: &str, url: &str) -> JobPosting {
        JobPosting::from_candidate(
            RawCandidate {
                title: title.to_string(),
                url: (!url.is_empty()).then(|| url.to_string()),
                company: Some("Acme".to_string()),
                ..Default::default()
            },
            "test",
            None,
        )
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let reg = SeenRegistry::load(&dir.path().join("nope.json"));
        assert!(reg.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen_jobs.json");
        fs::write(&path, "{not json").unwrap();
        let reg = SeenRegistry::load(&path);
        assert!(reg.is_empty());
    }

    #[test]
    fn first_seen_is_immutable_across_annotations() {
        let mut reg = SeenRegistry::default();
        let mut day1 = vec![posting("Growth Lead", "https://x.test/1")];
        reg.annotate(&mut day1, "2026-08-01");
        let mut day2 = vec![posting("Growth Lead", "https://x.test/1")];
        reg.annotate(&mut day2, "2026-08-20");

        assert!(day1[0].is_new);
        assert!(!day2[0].is_new);
        assert_eq!(day2[0].first_seen.as_deref(), Some("2026-08-01"));
    }

    #[test]
    fn entry_without_first_seen_yields_unknown_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen_jobs.json");
        fs::write(
            &path,
            r#"{"https://x.test/1": {"title": "Growth Lead", "company": "Acme"}}"#,
        )
        .unwrap();
        let mut reg = SeenRegistry::load(&path);

        let mut run = vec![posting("Growth Lead", "https://x.test/1")];
        reg.annotate(&mut run, "2026-08-30");
        assert!(!run[0].is_new);
        assert_eq!(run[0].first_seen.as_deref(), Some("Unknown"));
    }

    #[test]
    fn save_replaces_file_atomically_via_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen_jobs.json");

        let mut reg = SeenRegistry::default();
        let mut run = vec![posting("Growth Lead", "https://x.test/1")];
        reg.annotate(&mut run, "2026-08-30");
        reg.save(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        let reloaded = SeenRegistry::load(&path);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(
            reloaded.get("https://x.test/1").unwrap().first_seen.as_deref(),
            Some("2026-08-30")
        );
    }
}
