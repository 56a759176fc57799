use crate::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_INDEX_LIMIT: u32 = 1320;

/// Configuration for pokedex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokedexConfig {
    /// Base URL of the catalog API (index lives at `<base>/pokemon`)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Page size requested from the index endpoint; large enough for the whole catalog
    #[serde(default = "default_index_limit")]
    pub index_limit: u32,

    /// Upper bound on detail requests in flight. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_requests: Option<usize>,

    /// Per-request timeout in seconds. Requests never time out when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_index_limit() -> u32 {
    DEFAULT_INDEX_LIMIT
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            index_limit: DEFAULT_INDEX_LIMIT,
            max_concurrent_requests: None,
            request_timeout_secs: None,
        }
    }
}

impl PokedexConfig {
    pub const KEYS: [&'static str; 4] = [
        "api-base-url",
        "index-limit",
        "max-concurrent-requests",
        "request-timeout-secs",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PokedexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the positivity rules of `set` to values read from disk.
    fn validate(&self) -> Result<()> {
        let zero = [
            ("index-limit", self.index_limit == 0),
            ("max-concurrent-requests", self.max_concurrent_requests == Some(0)),
            ("request-timeout-secs", self.request_timeout_secs == Some(0)),
        ];
        match zero.iter().find(|(_, is_zero)| *is_zero) {
            Some((key, _)) => Err(PokedexError::Config(format!(
                "{} must be a positive integer, got 0",
                key
            ))),
            None => Ok(()),
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "api-base-url" => self.api_base_url.clone(),
            "index-limit" => self.index_limit.to_string(),
            "max-concurrent-requests" => display_optional(self.max_concurrent_requests),
            "request-timeout-secs" => display_optional(self.request_timeout_secs),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Sets a key from its string form. `none` clears the optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-base-url" => {
                url::Url::parse(value)
                    .map_err(|e| PokedexError::Config(format!("Invalid URL {}: {}", value, e)))?;
                self.api_base_url = value.trim_end_matches('/').to_string();
            }
            "index-limit" => self.index_limit = parse_positive(key, value)?,
            "max-concurrent-requests" => {
                self.max_concurrent_requests = parse_optional(key, value)?;
            }
            "request-timeout-secs" => self.request_timeout_secs = parse_optional(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn display_optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn unknown_key(key: &str) -> PokedexError {
    PokedexError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        PokedexConfig::KEYS.join(", ")
    ))
}

fn parse_positive<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match value.parse::<T>() {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(PokedexError::Config(format!(
            "{} must be a positive integer, got {}",
            key, value
        ))),
    }
}

fn parse_optional<T>(key: &str, value: &str) -> Result<Option<T>>
where
    T: std::str::FromStr + PartialEq + Default,
{
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    parse_positive(key, value).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PokedexConfig::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.index_limit, 1320);
        assert_eq!(config.max_concurrent_requests, None);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PokedexConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PokedexConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = PokedexConfig::default();
        config.set("max-concurrent-requests", "32").unwrap();
        config.save(&nested).unwrap();

        let loaded = PokedexConfig::load(&nested).unwrap();
        assert_eq!(loaded.max_concurrent_requests, Some(32));
        assert_eq!(loaded.index_limit, 1320);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"index_limit": 151}"#,
        )
        .unwrap();

        let config = PokedexConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.index_limit, 151);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();

        let err = PokedexConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, PokedexError::Serialization(_)));
    }

    #[test]
    fn test_zero_values_in_file_are_rejected() {
        for content in [
            r#"{"max_concurrent_requests": 0}"#,
            r#"{"index_limit": 0}"#,
            r#"{"request_timeout_secs": 0}"#,
        ] {
            let temp_dir = tempfile::tempdir().unwrap();
            fs::write(temp_dir.path().join(CONFIG_FILENAME), content).unwrap();

            let err = PokedexConfig::load(temp_dir.path()).unwrap_err();
            assert!(
                err.to_string().contains("must be a positive integer"),
                "{} gave {}",
                content,
                err
            );
        }
    }

    #[test]
    fn test_set_base_url_strips_trailing_slash() {
        let mut config = PokedexConfig::default();
        config.set("api-base-url", "http://localhost:8080/api/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
        assert!(config.set("api-base-url", "not a url").is_err());
    }

    #[test]
    fn test_set_rejects_zero_and_unknown_keys() {
        let mut config = PokedexConfig::default();
        assert!(config.set("index-limit", "0").is_err());
        assert!(config.set("index-limit", "abc").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_optional_keys_can_be_cleared() {
        let mut config = PokedexConfig::default();
        config.set("request-timeout-secs", "10").unwrap();
        assert_eq!(config.get("request-timeout-secs").unwrap(), "10");

        config.set("request-timeout-secs", "none").unwrap();
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.get("request-timeout-secs").unwrap(), "none");
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let listed = PokedexConfig::default().list_all();
        let keys: Vec<_> = listed.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, PokedexConfig::KEYS.to_vec());
    }
}
