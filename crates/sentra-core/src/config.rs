//! Runtime configuration.
//!
//! Values come from built-in defaults, optionally overridden by a TOML file.
//! Command-line flags are layered on top by the CLI.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SentraError, SentraResult};
use crate::toxicity::{DEFAULT_MODEL_PATH, DEFAULT_VECTORIZER_PATH};

/// Default host to bind to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port to listen on.
pub const DEFAULT_PORT: u16 = 5000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SentraConfig {
    pub server: ServerConfig,
    pub models: ModelConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Locations of the analysis artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Sentiment lexicon; the embedded lexicon is used when unset.
    pub lexicon_path: Option<PathBuf>,
    pub vectorizer_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            vectorizer_path: PathBuf::from(DEFAULT_VECTORIZER_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl SentraConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> SentraResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SentraError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| SentraError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> SentraResult<Self> {
        toml::from_str(content).map_err(|e| SentraError::Config(e.to_string()))
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> SentraResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SentraConfig::load(None).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(config.models.lexicon_path.is_none());
        assert_eq!(config.models.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = SentraConfig::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.models.vectorizer_path, PathBuf::from(DEFAULT_VECTORIZER_PATH));
    }

    #[test]
    fn test_models_section() {
        let config = SentraConfig::from_toml(
            "[models]\nlexicon_path = \"lex.json\"\nmodel_path = \"/opt/m.json\"\n",
        )
        .unwrap();
        assert_eq!(config.models.lexicon_path, Some(PathBuf::from("lex.json")));
        assert_eq!(config.models.model_path, PathBuf::from("/opt/m.json"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = SentraConfig::from_toml("[server]\nthreads = 4\n").unwrap_err();
        assert!(matches!(err, SentraError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SentraConfig::load(Some(Path::new("/nonexistent/sentra.toml"))).unwrap_err();
        assert!(matches!(err, SentraError::Config(_)));
    }
}
