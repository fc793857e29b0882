//! Topology specs
//!
//! A [`TopologySpec`] binds a named execution target to the executor producer
//! that talks to it. Specs are immutable once built.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use topo_config::Config;

use crate::error::SpecError;
use crate::producer::SpecExecutorProducer;
use crate::spec::{require_uri, Spec, DEFAULT_DESCRIPTION, DEFAULT_VERSION};

/// Immutable description of one deployment target
///
/// Equality is structural: two specs are equal when their URI, version,
/// description, config and producer identity match, even if they hold
/// different producer instances.
#[derive(Clone)]
pub struct TopologySpec {
    uri: String,
    version: String,
    description: String,
    config: Config,
    producer: Arc<dyn SpecExecutorProducer>,
}

impl TopologySpec {
    /// Start building a topology spec with the given URI
    #[inline]
    #[must_use]
    pub fn builder(uri: impl Into<String>) -> TopologySpecBuilder {
        TopologySpecBuilder::new().with_uri(uri)
    }

    /// Topology configuration subtree
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Configuration flattened into dotted properties
    #[must_use]
    pub fn config_as_properties(&self) -> BTreeMap<String, String> {
        self.config.to_properties()
    }

    /// Executor producer bound to this topology
    #[inline]
    #[must_use]
    pub fn producer(&self) -> &Arc<dyn SpecExecutorProducer> {
        &self.producer
    }
}

impl Spec for TopologySpec {
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

impl PartialEq for TopologySpec {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
            && self.version == other.version
            && self.description == other.description
            && self.config == other.config
            && self.producer.identity() == other.producer.identity()
    }
}

impl fmt::Debug for TopologySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopologySpec")
            .field("uri", &self.uri)
            .field("version", &self.version)
            .field("description", &self.description)
            .field("producer", &self.producer.identity())
            .finish_non_exhaustive()
    }
}

/// Builder for [`TopologySpec`]
#[derive(Default)]
pub struct TopologySpecBuilder {
    uri: Option<String>,
    version: Option<String>,
    description: Option<String>,
    config: Option<Config>,
    producer: Option<Arc<dyn SpecExecutorProducer>>,
}

impl TopologySpecBuilder {
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
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_producer(mut self, producer: Arc<dyn SpecExecutorProducer>) -> Self {
        self.producer = Some(producer);
        self
    }

    /// Build the topology spec
    ///
    /// # Errors
    /// [`SpecError::MissingUri`] without a non-empty URI,
    /// [`SpecError::MissingProducer`] without a producer
    pub fn build(self) -> Result<TopologySpec, SpecError> {
        let uri = require_uri(self.uri)?;
        let producer = self
            .producer
            .ok_or_else(|| SpecError::MissingProducer { uri: uri.clone() })?;
        Ok(TopologySpec {
            uri,
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            config: self.config.unwrap_or_default(),
            producer,
        })
    }
}

impl fmt::Debug for TopologySpecBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopologySpecBuilder")
            .field("uri", &self.uri)
            .field("has_producer", &self.producer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::error::ProducerError;
    use crate::job::JobSpec;
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Debug)]
    struct NullProducer(&'static str);

    #[async_trait]
    impl SpecExecutorProducer for NullProducer {
        fn identity(&self) -> &str {
            self.0
        }

        async fn add_spec(&self, _spec: JobSpec) -> Result<(), ProducerError> {
            Ok(())
        }

        async fn update_spec(&self, _spec: JobSpec) -> Result<(), ProducerError> {
            Ok(())
        }

        async fn delete_spec(&self, _uri: &str) -> Result<(), ProducerError> {
            Ok(())
        }

        async fn list_specs(&self) -> Result<Vec<JobSpec>, ProducerError> {
            Ok(Vec::new())
        }
    }

    fn producer(identity: &'static str) -> Arc<dyn SpecExecutorProducer> {
        Arc::new(NullProducer(identity))
    }

    #[test]
    fn builder_defaults() {
        let spec = TopologySpec::builder("fs:///cluster")
            .with_producer(producer("null"))
            .build()
            .unwrap();

        assert_eq!(spec.uri(), "fs:///cluster");
        assert_eq!(spec.description(), DEFAULT_DESCRIPTION);
        assert_eq!(spec.version(), DEFAULT_VERSION);
        assert!(spec.is_version_unset());
        assert!(spec.config().is_empty());
    }

    #[test]
    fn builder_requires_uri() {
        let err = TopologySpecBuilder::new()
            .with_producer(producer("null"))
            .build()
            .unwrap_err();
        assert_eq!(err, SpecError::MissingUri);
    }

    #[test]
    fn builder_requires_producer() {
        let err = TopologySpec::builder("fs:///cluster").build().unwrap_err();
        assert!(matches!(err, SpecError::MissingProducer { .. }));
    }

    #[test]
    fn equality_ignores_instance() {
        let config = Config::from_value(json!({"uri": "fs:///cluster"})).unwrap();
        let a = TopologySpec::builder("fs:///cluster")
            .with_config(config.clone())
            .with_version("1")
            .with_producer(producer("null"))
            .build()
            .unwrap();
        let b = TopologySpec::builder("fs:///cluster")
            .with_config(config)
            .with_version("1")
            .with_producer(producer("null"))
            .build()
            .unwrap();

        assert_eq!(a, b);
        assert!(!Arc::ptr_eq(a.producer(), b.producer()));
    }

    #[test]
    fn equality_checks_producer_identity() {
        let a = TopologySpec::builder("fs:///x")
            .with_producer(producer("one"))
            .build()
            .unwrap();
        let b = TopologySpec::builder("fs:///x")
            .with_producer(producer("two"))
            .build()
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn config_as_properties() {
        let config = Config::from_value(json!({"uri": "fs:///x", "limits": {"jobs": 4}})).unwrap();
        let spec = TopologySpec::builder("fs:///x")
            .with_config(config)
            .with_producer(producer("null"))
            .build()
            .unwrap();

        let props = spec.config_as_properties();
        assert_eq!(props.get("limits.jobs").map(String::as_str), Some("4"));
    }

    #[test]
    fn debug_names_producer() {
        let spec = TopologySpec::builder("fs:///x")
            .with_producer(producer("null"))
            .build()
            .unwrap();
        let debug = format!("{spec:?}");
        assert!(debug.contains("TopologySpec"));
        assert!(debug.contains("null"));
    }

    #[tokio::test]
    async fn producer_reachable_through_spec() {
        let spec = TopologySpec::builder("fs:///x")
            .with_producer(producer("null"))
            .build()
            .unwrap();
        let job = JobSpec::builder("job:///a").build().unwrap();
        spec.producer().add_spec(job).await.unwrap();
        assert!(spec.producer().list_specs().await.unwrap().is_empty());
    }
}
