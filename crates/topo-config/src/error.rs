//! Error types for configuration access and loading

use std::path::PathBuf;

/// Errors raised while loading or reading a [`Config`](crate::Config)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required path is absent
    #[error("config path not found: '{path}'")]
    Missing {
        /// Dotted path that was requested
        path: String,
    },

    /// Value exists but has an unexpected shape
    #[error("config path '{path}' has wrong type: expected {expected}")]
    WrongType {
        /// Dotted path that was requested
        path: String,
        /// Human readable description of the expected shape
        expected: &'static str,
    },

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// IO error while reading a config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a supported config format
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl ConfigError {
    /// Create missing-path error
    pub fn missing(path: impl Into<String>) -> Self {
        Self::Missing { path: path.into() }
    }

    /// Create wrong-type error
    pub fn wrong_type(path: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            path: path.into(),
            expected,
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error reports an absent path
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
