// src/config.rs
//! Runtime knobs for a radar run. Loaded from TOML or JSON with an env-var
//! path override; a missing config is not an error, defaults apply.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

const ENV_PATH: &str = "JOB_RADAR_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Trailing recency window in days; postings older than this are dropped.
    pub max_age_days: i64,
    /// Courtesy pause between adapters. 0 disables the throttle.
    pub adapter_delay_ms: u64,
    /// Where the cross-run seen registry lives.
    pub registry_path: PathBuf,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_age_days: 30,
            adapter_delay_ms: 1000,
            registry_path: PathBuf::from("seen_jobs.json"),
        }
    }
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_from(path: &Path) -> Result<RadarConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, ext.as_str())
}

/// Load config using env var + fallbacks:
/// 1) $JOB_RADAR_CONFIG_PATH
/// 2) config/job_radar.toml
/// 3) config/job_radar.json
/// 4) built-in defaults
pub fn load_default() -> Result<RadarConfig> {
    if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_from(&pb);
        } else {
            return Err(anyhow!("JOB_RADAR_CONFIG_PATH points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from("config/job_radar.toml");
    if toml_p.exists() {
        return load_from(&toml_p);
    }
    let json_p = PathBuf::from("config/job_radar.json");
    if json_p.exists() {
        return load_from(&json_p);
    }
    Ok(RadarConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<RadarConfig> {
    // Try TOML first if hinted or content looks like toml.
    let try_toml = hint_ext == "toml" || s.contains('=');
    if try_toml {
        if let Ok(v) = toml::from_str(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = serde_json::from_str(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = toml::from_str(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported config format"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn toml_and_json_both_parse() {
        let toml = "max_age_days = 14\nadapter_delay_ms = 0\n";
        let cfg = parse_config(toml, "toml").unwrap();
        assert_eq!(cfg.max_age_days, 14);
        assert_eq!(cfg.adapter_delay_ms, 0);
        assert_eq!(cfg.registry_path, PathBuf::from("seen_jobs.json"));

        let json = r#"{"registry_path": "state/seen.json"}"#;
        let cfg = parse_config(json, "json").unwrap();
        assert_eq!(cfg.max_age_days, 30);
        assert_eq!(cfg.registry_path, PathBuf::from("state/seen.json"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_config("][ nope", "").is_err());
    }

    #[serial_test::serial]
    #[test]
    fn env_path_takes_precedence() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("radar.toml");
        fs::write(&p, "max_age_days = 7\n").unwrap();

        env::set_var(ENV_PATH, p.display().to_string());
        let cfg = load_default().unwrap();
        assert_eq!(cfg.max_age_days, 7);
        env::remove_var(ENV_PATH);
    }

    #[serial_test::serial]
    #[test]
    fn dangling_env_path_is_an_error() {
        env::set_var(ENV_PATH, "/definitely/not/here.toml");
        assert!(load_default().is_err());
        env::remove_var(ENV_PATH);
    }
}
