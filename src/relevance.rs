// src/relevance.rs
//! Relevance gate: decides whether a raw (title, description) pair matches
//! the fixed interest profile (growth/marketing/BD/community roles, no
//! engineering roles).
//!
//! Matching is substring-based, case-insensitive, with no word-boundary
//! requirement. A keyword hiding inside a longer word still matches; that
//! over-matching is a deliberate recall tradeoff and must stay as-is.

/// Role keywords that accept a posting.
pub const DESIRED_KEYWORDS: &[&str] = &[
    "growth",
    "community",
    "marketing",
    "communication",
    "bd",
    "business development",
    "partnerships",
    "partner",
    "relations",
    "social media",
    "content",
    "brand",
    "ambassador",
    "advocate",
    "engagement",
    "ecosystem",
    "strategy",
    "lead",
    "manager",
    "head of",
    "director",
    "defi",
    "dune",
    "analytics",
    "data analyst",
    "research",
    "writer",
    "editor",
    "pr",
    "public relations",
];

/// Role keywords that reject a posting (engineering/technical roles).
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "engineer",
    "engineering",
    "developer",
    "solidity",
    "rust",
    "backend",
    "frontend",
    "full stack",
    "fullstack",
    "smart contract",
    "devops",
    "sre",
    "infrastructure",
    "architect",
    "software",
    "python developer",
    "java",
    "golang",
    "node.js",
    "react developer",
    "blockchain developer",
    "protocol engineer",
    "security engineer",
    "qa engineer",
    "test engineer",
    "mobile developer",
    "ios",
    "android developer",
];

/// Terms that rescue an engineer-flavored exclusion hit when the posting
/// is clearly a non-technical role (e.g. "Growth Engineer").
const RESCUE_KEYWORDS: &[&str] = &["marketing", "growth", "community", "bd", "partnerships"];

/// Whether the posting matches the profile. Exclusions are checked first;
/// an engineer/engineering hit is waived when a rescue term is present
/// anywhere in the text, after which the inclusion set decides.
pub fn is_relevant(title: &str, description: &str) -> bool {
    let text = format!("{} {}", title, description).to_lowercase();

    for keyword in EXCLUDE_KEYWORDS {
        if text.contains(keyword) {
            if keyword.contains("engineer") && RESCUE_KEYWORDS.iter().any(|r| text.contains(r)) {
                continue;
            }
            return false;
        }
    }

    DESIRED_KEYWORDS.iter().any(|k| text.contains(k))
}
