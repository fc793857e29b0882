//! Job specs submitted to executor producers

use serde::{Deserialize, Serialize};
use topo_config::Config;

use crate::error::SpecError;
use crate::spec::{require_uri, Spec, DEFAULT_DESCRIPTION, DEFAULT_VERSION};

/// Unit of work handed to a [`SpecExecutorProducer`](crate::SpecExecutorProducer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    uri: String,
    version: String,
    description: String,
    #[serde(default)]
    config: Config,
}

impl JobSpec {
    /// Start building a job spec with the given URI
    #[inline]
    #[must_use]
    pub fn builder(uri: impl Into<String>) -> JobSpecBuilder {
        JobSpecBuilder::new().with_uri(uri)
    }

    /// Job configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Same spec with a different version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl Spec for JobSpec {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for [`JobSpec`]
#[derive(Debug, Clone, Default)]
pub struct JobSpecBuilder {
    uri: Option<String>,
    version: Option<String>,
    description: Option<String>,
    config: Option<Config>,
}

impl JobSpecBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the job spec
    ///
    /// # Errors
    /// [`SpecError::MissingUri`] if no non-empty URI was supplied
    pub fn build(self) -> Result<JobSpec, SpecError> {
        Ok(JobSpec {
            uri: require_uri(self.uri)?,
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            config: self.config.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn builder_defaults() {
        let job = JobSpec::builder("job:///ingest").build().unwrap();
        assert_eq!(job.uri(), "job:///ingest");
        assert_eq!(job.version(), DEFAULT_VERSION);
        assert_eq!(job.description(), DEFAULT_DESCRIPTION);
        assert!(job.is_version_unset());
        assert!(job.config().is_empty());
    }

    #[test]
    fn builder_requires_uri() {
        assert_eq!(JobSpecBuilder::new().build(), Err(SpecError::MissingUri));
        assert_eq!(JobSpec::builder("  ").build(), Err(SpecError::MissingUri));
    }

    #[test]
    fn serde_shape() {
        let config = Config::from_value(json!({"schedule": "0 * * * *"})).unwrap();
        let job = JobSpec::builder("job:///ingest")
            .with_version("3")
            .with_config(config)
            .build()
            .unwrap();

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["uri"], json!("job:///ingest"));
        assert_eq!(value["config"]["schedule"], json!("0 * * * *"));

        let back: JobSpec = serde_json::from_value(value).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn with_version_replaces() {
        let job = JobSpec::builder("job:///a").build().unwrap().with_version("2");
        assert_eq!(job.version(), "2");
        assert!(!job.is_version_unset());
    }
}
