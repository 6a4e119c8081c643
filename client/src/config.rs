use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::congress::DEFAULT_BASE_URL;

/// Default YAML file consulted by [`ClientConfig::load`].
pub const CONFIG_FILE: &str = "congress.yaml";

/// Environment variable prefix, e.g. `CONGRESS_GOV_API_KEY`.
pub const ENV_PREFIX: &str = "CONGRESS_GOV_";

/// Client configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. congress.yaml file (if exists)
/// 3. Environment variables with `CONGRESS_GOV_` prefix (always wins)
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Congress.gov API key (required, no compiled-in default).
    #[serde(default)]
    pub api_key: String,

    /// API root every request path is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means no client-side timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("congress-gov-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl ClientConfig {
    /// Configuration with defaults and the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. congress.yaml file (if exists)
    /// 3. Environment variables with `CONGRESS_GOV_` prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api_key is required. Set CONGRESS_GOV_API_KEY environment variable or configure in congress.yaml.".into(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "base_url '{}' must start with http:// or https://",
                self.base_url
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "timeout_secs cannot be 0".into(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Validation("user_agent cannot be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ClientConfig {
        ClientConfig::with_api_key("test-key")
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, "https://api.congress.gov/v3/");
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("congress-gov-client/"));
    }

    #[test]
    fn test_validation_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_boundaries() {
        let cases: [(&str, fn(&mut ClientConfig), Option<&str>); 8] = [
            ("empty key", |c: &mut ClientConfig| c.api_key = String::new(), Some("api_key")),
            ("blank key", |c: &mut ClientConfig| c.api_key = "   ".into(), Some("api_key")),
            ("ftp base", |c: &mut ClientConfig| c.base_url = "ftp://example.com".into(), Some("base_url")),
            ("bare host", |c: &mut ClientConfig| c.base_url = "api.congress.gov".into(), Some("base_url")),
            ("http base", |c: &mut ClientConfig| c.base_url = "http://localhost:8080".into(), None),
            ("zero timeout", |c: &mut ClientConfig| c.timeout_secs = Some(0), Some("timeout_secs")),
            ("one second timeout", |c: &mut ClientConfig| c.timeout_secs = Some(1), None),
            ("empty user agent", |c: &mut ClientConfig| c.user_agent = String::new(), Some("user_agent")),
        ];

        for (name, mutate, expected) in cases {
            let mut config = valid_config();
            mutate(&mut config);
            let result = config.validate();
            match expected {
                Some(field) => {
                    let err = result.expect_err(name);
                    assert!(matches!(err, ConfigError::Validation(_)), "{name}");
                    assert!(err.to_string().contains(field), "{name}: {err}");
                }
                None => assert!(result.is_ok(), "{name}"),
            }
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::with_api_key("s3cret"));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_load_merges_file_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "congress.yaml",
                "api_key: file-key\nbase_url: http://localhost:9000/v3\ntimeout_secs: 30\n",
            )?;
            jail.set_env("CONGRESS_GOV_API_KEY", "env-key");

            let config = ClientConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.api_key, "env-key");
            assert_eq!(config.base_url, "http://localhost:9000/v3");
            assert_eq!(config.timeout_secs, Some(30));
            assert!(config.user_agent.starts_with("congress-gov-client/"));
            Ok(())
        });
    }

    #[test]
    fn test_load_without_key_fails_validation() {
        figment::Jail::expect_with(|_jail| {
            let result = ClientConfig::load();
            assert!(matches!(result, Err(ConfigError::Validation(_))));
            Ok(())
        });
    }

    #[test]
    fn test_load_from_custom_path() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.yaml", "api_key: custom-key\nuser_agent: my-tool/1.0\n")?;

            let config = ClientConfig::load_from("custom.yaml").map_err(|e| e.to_string())?;
            assert_eq!(config.api_key, "custom-key");
            assert_eq!(config.user_agent, "my-tool/1.0");
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
            Ok(())
        });
    }
}
