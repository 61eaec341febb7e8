//! Credential loading from the OpenClaw configuration file
//!
//! The Perplexity API key lives in `~/.openclaw/openclaw.json` under
//! `skills.entries.perplexity.apiKey`. A missing or malformed file is a hard
//! error: without credentials there is nothing useful to do.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Skill entry that holds the Perplexity credentials
pub const PERPLEXITY_SKILL: &str = "perplexity";

/// Loaded application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub config_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct OpenclawFile {
    skills: Skills,
}

#[derive(Debug, Deserialize)]
struct Skills {
    entries: HashMap<String, SkillEntry>,
}

#[derive(Debug, Deserialize)]
struct SkillEntry {
    #[serde(rename = "apiKey")]
    api_key: Option<String>,
}

/// Returns the user's home directory using common environment variables.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Default path to the OpenClaw config file
///
/// `OPENCLAW_CONFIG` overrides the location, otherwise
/// `$HOME/.openclaw/openclaw.json`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os("OPENCLAW_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let home = home_dir().context("Cannot resolve home directory (HOME not set)")?;
    Ok(home.join(".openclaw").join("openclaw.json"))
}

impl Config {
    /// Load configuration from the default OpenClaw location
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let api_key = parse_api_key(&raw)
            .with_context(|| format!("Invalid OpenClaw config {}", path.display()))?;

        Ok(Self {
            api_key,
            config_path: path.to_path_buf(),
        })
    }
}

/// Extract the Perplexity API key from raw OpenClaw config JSON
fn parse_api_key(raw: &str) -> Result<String> {
    let parsed: OpenclawFile =
        serde_json::from_str(raw).context("Config file is not valid JSON")?;

    let entry = parsed
        .skills
        .entries
        .get(PERPLEXITY_SKILL)
        .with_context(|| format!("No '{}' entry under skills.entries", PERPLEXITY_SKILL))?;

    entry
        .api_key
        .clone()
        .with_context(|| format!("Skill '{}' has no apiKey field", PERPLEXITY_SKILL))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"{
        "skills": {
            "entries": {
                "brave": {"apiKey": "bk-000"},
                "perplexity": {"apiKey": "pk-123"}
            }
        }
    }"#;

    #[test]
    fn test_parse_api_key_from_valid_config() {
        assert_eq!(parse_api_key(VALID_CONFIG).unwrap(), "pk-123");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_api_key("{not json").unwrap_err();
        assert!(format!("{err:#}").contains("not valid JSON"));
    }

    #[test]
    fn test_parse_rejects_missing_skill_entry() {
        let raw = r#"{"skills": {"entries": {"brave": {"apiKey": "bk-000"}}}}"#;
        let err = parse_api_key(raw).unwrap_err();
        assert!(format!("{err:#}").contains("perplexity"));
    }

    #[test]
    fn test_parse_rejects_entry_without_key() {
        let raw = r#"{"skills": {"entries": {"perplexity": {"enabled": true}}}}"#;
        let err = parse_api_key(raw).unwrap_err();
        assert!(format!("{err:#}").contains("apiKey"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("openclaw-test-{}.json", std::process::id()));
        std::fs::write(&path, VALID_CONFIG).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key, "pk-123");
        assert_eq!(config.config_path, path);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/openclaw.json");
        let err = Config::load_from(path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
