//! Config loading from JSON, YAML and TOML documents

use std::path::Path;

use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Detect format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse a document in this format
    ///
    /// # Errors
    /// Returns the format-specific parse error
    pub fn parse(self, content: &str) -> ConfigResult<Config> {
        let value: JsonValue = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml if content.trim().is_empty() => JsonValue::Null,
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        };
        Config::from_value(value)
    }
}

impl Config {
    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or the root is not an object
    #[inline]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        ConfigFormat::Json.parse(json)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or the root is not a mapping
    #[inline]
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        ConfigFormat::Yaml.parse(yaml)
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid
    #[inline]
    pub fn from_toml(toml: &str) -> ConfigResult<Self> {
        ConfigFormat::Toml.parse(toml)
    }

    /// Load a config file, choosing the format from its extension
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for unknown extensions,
    /// [`ConfigError::Io`] if the file cannot be read, or a parse error
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        format.parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r"
topology:
  factory:
    topologyNames: local
    local:
      uri: fs:///local
      version: 2
";

    #[test]
    fn detect_format() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.conf")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("a")), None);
    }

    #[test]
    fn parse_yaml() {
        let config = Config::from_yaml(YAML).unwrap();
        assert_eq!(config.get_string("topology.factory.local.uri").unwrap(), "fs:///local");
        assert_eq!(config.get_string("topology.factory.local.version").unwrap(), "2");
    }

    #[test]
    fn parse_toml_dotted_keys() {
        let config = Config::from_toml(
            r#"
[topology.factory]
topologyNames = "local"

[topology.factory.local]
uri = "fs:///local"
"specExecutorInstanceProducer.class" = "inmemory"
"#,
        )
        .unwrap();
        assert_eq!(
            config
                .get_string("topology.factory.local.specExecutorInstanceProducer.class")
                .unwrap(),
            "inmemory"
        );
    }

    #[test]
    fn parse_json_invalid() {
        assert!(matches!(Config::from_json("not json"), Err(ConfigError::InvalidJson(_))));
    }

    #[test]
    fn empty_yaml_is_empty_config() {
        assert!(Config::from_yaml("").unwrap().is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(config.has_path("topology.factory.local"));
    }

    #[test]
    fn load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
