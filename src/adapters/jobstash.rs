// src/adapters/jobstash.rs
//! jobstash.xyz adapter. Same tolerant JSON handling as cryptojobslist:
//! jobs under `data` or a bare array, company as object or string.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use super::{
    company_name, http_client, id_field, scrub_text, str_field, truncate_chars, CANDIDATE_CAP,
    DESCRIPTION_CAP,
};
use crate::model::{RawCandidate, SourceAdapter};

pub const API_URL: &str = "https://jobstash.xyz/api/jobs";

pub struct JobStashAdapter {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl JobStashAdapter {
    pub fn new() -> Self {
        Self::from_url(API_URL)
    }

    pub fn from_url(url: &str) -> Self {
        Self {
            mode: Mode::Http {
                url: url.to_string(),
                client: http_client(),
            },
        }
    }

    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    fn parse_body(body: &str) -> Result<Vec<RawCandidate>> {
        let root: Value = serde_json::from_str(body).context("parsing jobstash json")?;
        let jobs = root.get("data").unwrap_or(&root);
        let Some(items) = jobs.as_array() else {
            return Ok(Vec::new());
        };

        let mut out = Vec::new();
        for job in items.iter().take(CANDIDATE_CAP) {
            let Some(title) = str_field(job, &["title"]) else {
                continue;
            };
            let url = str_field(job, &["url"]).unwrap_or_else(|| {
                format!(
                    "https://jobstash.xyz/jobs/{}",
                    id_field(job, &["id"]).unwrap_or_default()
                )
            });
            let description = str_field(job, &["description"])
                .map(|d| truncate_chars(&scrub_text(&d), DESCRIPTION_CAP));

            out.push(RawCandidate {
                title,
                company: company_name(job),
                url: Some(url),
                location: str_field(job, &["location"]),
                posted_hint: str_field(job, &["postedAt", "created_at"]),
                description,
                salary: str_field(job, &["salary"]),
                tags: Vec::new(),
            });
        }
        Ok(out)
    }
}

impl Default for JobStashAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceAdapter for JobStashAdapter {
    async fn fetch(&self) -> Result<Vec<RawCandidate>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_body(s),
            Mode::Http { url, client } => {
                let body = client
                    .get(url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await
                    .context("jobstash http get")?
                    .text()
                    .await
                    .context("jobstash http body")?;
                Self::parse_body(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "jobstash.xyz"
    }
}
