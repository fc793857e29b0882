//! Config-based topology spec factory
//!
//! Reads the declared topology names from configuration and turns each one
//! into a [`TopologySpec`] bound to a freshly constructed executor producer.

use std::sync::Arc;

use topo_api::{TopologySpec, TopologySpecBuilder, DEFAULT_DESCRIPTION, DEFAULT_VERSION};
use topo_config::Config;
use topo_executor::{default_registry, ProducerRegistry, DEFAULT_SPEC_EXECUTOR_PRODUCER};
use tracing::Span;

use crate::error::{FactoryError, FactoryResult};
use crate::keys::{
    topology_path, SPEC_EXECUTOR_PRODUCER_KEY, TOPOLOGYSPEC_DESCRIPTION_KEY,
    TOPOLOGYSPEC_URI_KEY, TOPOLOGYSPEC_VERSION_KEY, TOPOLOGY_FACTORY_TOPOLOGY_NAMES_KEY,
};

/// Source of topology specs
pub trait TopologySpecFactory {
    /// Produce every configured topology
    ///
    /// # Errors
    /// Any failure aborts the whole call
    fn topologies(&self) -> FactoryResult<Vec<TopologySpec>>;
}

/// Topology factory driven by `topology.factory.*` configuration
///
/// Holds no state between calls: every call to
/// [`topologies`](TopologySpecFactory::topologies) re-reads the configuration
/// and constructs new producer instances.
#[derive(Debug, Clone)]
pub struct ConfigBasedTopologySpecFactory {
    config: Config,
    span: Span,
    registry: Arc<ProducerRegistry>,
}

impl ConfigBasedTopologySpecFactory {
    /// Create factory over `config` using the default registry
    #[inline]
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_span(config, None)
    }

    /// Create factory recording diagnostics under `span`
    ///
    /// Without a span a `topology_spec_factory` span is created.
    #[must_use]
    pub fn with_span(config: Config, span: Option<Span>) -> Self {
        Self {
            config,
            span: span.unwrap_or_else(|| tracing::info_span!("topology_spec_factory")),
            registry: default_registry(),
        }
    }

    /// Resolve producers through `registry` instead of the default one
    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<ProducerRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Root configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registry used for producer resolution
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ProducerRegistry {
        &self.registry
    }

    /// Declared topology names, in declaration order
    ///
    /// The comma separated value is split into trimmed tokens; empty tokens
    /// are ignored.
    ///
    /// # Errors
    /// [`FactoryError::Config`] if the names key is neither a string nor a list
    pub fn topology_names(&self) -> FactoryResult<Vec<String>> {
        if !self.config.has_path(TOPOLOGY_FACTORY_TOPOLOGY_NAMES_KEY) {
            return Ok(Vec::new());
        }
        Ok(self.config.get_string_list(TOPOLOGY_FACTORY_TOPOLOGY_NAMES_KEY)?)
    }

    fn build_topology(&self, name: &str) -> FactoryResult<TopologySpec> {
        let path = topology_path(name);
        if !self.config.has_path(&path) {
            return Err(FactoryError::MissingTopologyConfig {
                name: name.to_string(),
            });
        }
        let topology_config = self.config.get_config(&path)?;
        let description =
            topology_config.get_string_or(TOPOLOGYSPEC_DESCRIPTION_KEY, DEFAULT_DESCRIPTION)?;
        let version = topology_config.get_string_or(TOPOLOGYSPEC_VERSION_KEY, DEFAULT_VERSION)?;

        let identity = if topology_config.has_path(SPEC_EXECUTOR_PRODUCER_KEY) {
            topology_config.get_string(SPEC_EXECUTOR_PRODUCER_KEY)?
        } else {
            DEFAULT_SPEC_EXECUTOR_PRODUCER.to_string()
        };

        tracing::info!(
            "Using SpecExecutorProducer class name/alias {} for topology {}",
            identity,
            name
        );
        let producer = self
            .registry
            .instantiate(&identity, &topology_config)
            .map_err(|source| FactoryError::Producer {
                topology: name.to_string(),
                identity: identity.clone(),
                source,
            })?;

        let mut builder = TopologySpecBuilder::new();
        match topology_config.get_string(TOPOLOGYSPEC_URI_KEY) {
            Ok(uri) => builder = builder.with_uri(uri),
            // Absence is reported by the builder
            Err(e) if e.is_missing() => {}
            Err(e) => return Err(e.into()),
        }

        builder
            .with_config(topology_config)
            .with_description(description)
            .with_version(version)
            .with_producer(producer)
            .build()
            .map_err(|source| FactoryError::Spec {
                topology: name.to_string(),
                source,
            })
    }
}

impl TopologySpecFactory for ConfigBasedTopologySpecFactory {
    fn topologies(&self) -> FactoryResult<Vec<TopologySpec>> {
        let _entered = self.span.enter();

        let names = self.topology_names()?;
        let topologies = names
            .iter()
            .map(|name| self.build_topology(name))
            .collect::<FactoryResult<Vec<_>>>()?;

        tracing::debug!("Produced {} topology specs", topologies.len());
        Ok(topologies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use topo_api::{ProducerError, Spec};

    fn factory(value: serde_json::Value) -> ConfigBasedTopologySpecFactory {
        ConfigBasedTopologySpecFactory::new(Config::from_value(value).unwrap())
    }

    #[test]
    fn names_are_trimmed_in_order() {
        let factory = factory(json!({"topology.factory.topologyNames": " b , ,a,b "}));
        assert_eq!(factory.topology_names().unwrap(), vec!["b", "a", "b"]);
    }

    proptest! {
        #[test]
        fn prop_topologies_follow_declaration_order(
            names in prop::collection::hash_set("[a-z]{1,6}", 0..6)
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let mut tree = serde_json::Map::new();
            tree.insert(
                TOPOLOGY_FACTORY_TOPOLOGY_NAMES_KEY.to_string(),
                json!(names.join(" , ")),
            );
            for name in &names {
                tree.insert(topology_path(name), json!({ "uri": format!("fs:///{name}") }));
            }

            let specs = factory(serde_json::Value::Object(tree)).topologies().unwrap();
            let uris: Vec<String> = specs.iter().map(|s| s.uri().to_string()).collect();
            let expected: Vec<String> = names.iter().map(|n| format!("fs:///{n}")).collect();
            prop_assert_eq!(uris, expected);
        }
    }

    #[test]
    fn absent_names_key_is_empty() {
        let factory = factory(json!({"other": "value"}));
        assert!(factory.topology_names().unwrap().is_empty());
        assert!(factory.topologies().unwrap().is_empty());
    }

    #[test]
    fn names_key_must_be_scalar() {
        let factory = factory(json!({"topology": {"factory": {"topologyNames": {"a": 1}}}}));
        assert!(matches!(factory.topologies(), Err(FactoryError::Config(_))));
    }

    #[test]
    fn builds_with_defaults() {
        let factory = factory(json!({
            "topology": { "factory": {
                "topologyNames": "local",
                "local": { "uri": "fs:///local" }
            }}
        }));

        let topologies = factory.topologies().unwrap();
        assert_eq!(topologies.len(), 1);
        let spec = &topologies[0];
        assert_eq!(spec.uri(), "fs:///local");
        assert_eq!(spec.description(), DEFAULT_DESCRIPTION);
        assert_eq!(spec.version(), DEFAULT_VERSION);
        assert_eq!(spec.producer().identity(), DEFAULT_SPEC_EXECUTOR_PRODUCER);
        assert_eq!(spec.config().get_string("uri").unwrap(), "fs:///local");
    }

    #[test]
    fn missing_subtree_fails() {
        let factory = factory(json!({
            "topology": { "factory": {
                "topologyNames": "local,remote",
                "local": { "uri": "fs:///local" }
            }}
        }));

        let err = factory.topologies().unwrap_err();
        assert!(matches!(err, FactoryError::MissingTopologyConfig { ref name } if name == "remote"));
    }

    #[test]
    fn subtree_must_be_object() {
        let factory = factory(json!({
            "topology": { "factory": { "topologyNames": "local", "local": "fs:///local" } }
        }));
        assert!(matches!(factory.topologies(), Err(FactoryError::Config(_))));
    }

    #[test]
    fn missing_uri_fails_in_builder() {
        let factory = factory(json!({
            "topology": { "factory": {
                "topologyNames": "local",
                "local": { "description": "no uri" }
            }}
        }));

        let err = factory.topologies().unwrap_err();
        assert!(matches!(
            err,
            FactoryError::Spec { source: topo_api::SpecError::MissingUri, .. }
        ));
    }

    #[test]
    fn unknown_producer_fails() {
        let factory = factory(json!({
            "topology": { "factory": {
                "topologyNames": "local",
                "local": {
                    "uri": "fs:///local",
                    "specExecutorInstanceProducer": { "class": "com.example.DoesNotExist" }
                }
            }}
        }));

        let err = factory.topologies().unwrap_err();
        match err {
            FactoryError::Producer { topology, identity, source } => {
                assert_eq!(topology, "local");
                assert_eq!(identity, "com.example.DoesNotExist");
                assert!(matches!(source, ProducerError::UnknownProducer(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_registry_used() {
        let registry = Arc::new(ProducerRegistry::new());
        let factory = factory(json!({
            "topology": { "factory": {
                "topologyNames": "local",
                "local": { "uri": "fs:///local" }
            }}
        }))
        .with_registry(registry);

        assert!(factory.registry().is_empty());
        assert!(matches!(factory.topologies(), Err(FactoryError::Producer { .. })));
    }

    #[test]
    fn custom_span_accepted() {
        let span = tracing::info_span!("service_startup");
        let factory = ConfigBasedTopologySpecFactory::with_span(Config::empty(), Some(span));
        assert!(factory.topologies().unwrap().is_empty());
        assert!(factory.config().is_empty());
    }
}
