//! Client configuration
//!
//! Embedded TOML defaults, optionally overridden by a
//! `<meta name="kindwords-config" content="...">` tag in the page head.

use serde::Deserialize;

pub const CONFIG_META_NAME: &str = "kindwords-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
api_base = ""
log_level = "debug"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path; empty means same origin.
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration
    ///
    /// Search order:
    /// 1. `<meta name="kindwords-config">` in the current document
    /// 2. Falls back to embedded default config
    ///
    /// An override that does not parse is returned as the error.
    pub fn load() -> Result<Self, toml::de::Error> {
        match read_meta_override() {
            Some(contents) => Self::parse(&contents),
            None => Self::parse(DEFAULT_CONFIG),
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.api_url("/api/history");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

fn read_meta_override() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let meta = document
        .query_selector(&selector)
        .ok()??
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_same_origin_api_url() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url("/api/history"), "/api/history");
    }

    #[test]
    fn test_api_base_override() {
        let config = ClientConfig::parse(
            r#"
            api_base = "http://127.0.0.1:5000/"
            log_level = "WARN"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url("/api/reset"), "http://127.0.0.1:5000/api/reset");
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = ClientConfig::parse("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(ClientConfig::parse("api_base = 42").is_err());
    }
}
