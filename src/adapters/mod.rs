// src/adapters/mod.rs
//! Built-in adapters for boards that expose a JSON API. Everything that
//! needs per-site HTML guessing lives outside this crate behind the
//! `SourceAdapter` trait.

pub mod cryptojobslist;
pub mod jobstash;

use serde_json::Value;

/// Per-adapter candidate cap; boards routinely return more than anyone
/// wants to re-filter.
pub(crate) const CANDIDATE_CAP: usize = 100;
/// Descriptions are display snippets, not full postings.
pub(crate) const DESCRIPTION_CAP: usize = 200;

pub(crate) const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

/// Normalize a board-supplied text blob: decode HTML entities, strip tags,
/// collapse whitespace.
pub(crate) fn scrub_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, " ").to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        s.chars().take(max).collect()
    } else {
        s.to_string()
    }
}

/// First non-empty string value among the given keys.
pub(crate) fn str_field(v: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        v.get(k)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// String or number id-ish field, stringified.
pub(crate) fn id_field(v: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match v.get(k) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Boards disagree on whether `company` is an object or a plain string.
pub(crate) fn company_name(v: &Value) -> Option<String> {
    match v.get("company") {
        Some(Value::Object(obj)) => obj
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
