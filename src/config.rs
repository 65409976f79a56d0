/// Application configuration
///
/// Read from `<config_dir>/testgen-studio/config.toml` when that file exists:
/// - Linux: ~/.config/testgen-studio/config.toml
/// - macOS: ~/Library/Application Support/testgen-studio/config.toml
/// - Windows: %APPDATA%\testgen-studio\config.toml
///
/// `TESTGEN_CONFIG` points at a different file, which must exist.
/// `TESTGEN_ENDPOINT` overrides the endpoint from any file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/gen";

const CONFIG_ENV: &str = "TESTGEN_CONFIG";
const ENDPOINT_ENV: &str = "TESTGEN_ENDPOINT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("endpoint must not be empty")]
    EmptyEndpoint,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL the multipart form is POSTed to
    pub endpoint: String,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
    /// How long notifications stay on screen
    pub notice_seconds: u64,
    /// Optional request timeout; unset means wait indefinitely
    pub request_timeout_seconds: Option<u64>,
    /// File this config was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_filter: "info".to_string(),
            notice_seconds: 3,
            request_timeout_seconds: None,
            source: None,
        }
    }
}

impl AppConfig {
    /// Load config from the environment-selected or default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            Self::default_path(),
            std::env::var(ENDPOINT_ENV).ok(),
        )
    }

    /// Resolve the config from an explicitly named file or the default location
    ///
    /// An explicit file must exist. A missing default file is not an error;
    /// defaults are used instead.
    pub fn load_from(
        explicit: Option<PathBuf>,
        default: Option<PathBuf>,
        endpoint_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match (explicit, default) {
            (Some(path), _) => Self::from_file(&path)?,
            (None, Some(path)) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.with_endpoint_override(endpoint_override).validated()
    }

    /// Get the path where the config file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("testgen-studio");
        path.push("config.toml");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Replace the endpoint when an override is present and non-blank
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint, "http://localhost:8000/gen");
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let config = AppConfig::from_toml(
            r#"
            endpoint = "http://gen.internal:9000/gen"
            request_timeout_seconds = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://gen.internal:9000/gen");
        assert_eq!(config.request_timeout_seconds, Some(120));
        assert_eq!(config.notice_seconds, 3);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_bad_type_is_parse_error() {
        assert!(AppConfig::from_toml("notice_seconds = \"three\"").is_err());
    }

    #[test]
    fn test_endpoint_override() {
        let config = AppConfig::default()
            .with_endpoint_override(Some("http://127.0.0.1:1234/gen".to_string()));
        assert_eq!(config.endpoint, "http://127.0.0.1:1234/gen");

        let config = AppConfig::default().with_endpoint_override(Some("  ".to_string()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config = AppConfig {
            endpoint: String::new(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validated(), Err(ConfigError::EmptyEndpoint)));
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let result = AppConfig::load_from(
            Some(PathBuf::from("/nonexistent/testgen/explicit.toml")),
            None,
            None,
        );
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let config = AppConfig::load_from(
            None,
            Some(PathBuf::from("/nonexistent/testgen/config.toml")),
            Some("http://127.0.0.1:9/gen".to_string()),
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:9/gen");
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = AppConfig::from_file(Path::new("/nonexistent/testgen/config.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
