//! Testing utilities for the topology workspace
//!
//! Shared config fixtures and producer registries.

#![allow(missing_docs)]

use std::sync::Arc;

use topo_api::ProducerError;
use topo_config::Config;
use topo_executor::ProducerRegistry;

/// Identity registered by [`registry_with_failing_producer`]
pub const FAILING_PRODUCER: &str = "tests::FailingSpecExecutorProducer";

/// Builds `topology.factory.*` configuration as flat key/value pairs
#[derive(Debug, Clone, Default)]
pub struct TopologyConfigBuilder {
    names: Option<String>,
    pairs: Vec<(String, String)>,
}

impl TopologyConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a topology with a URI and append it to the names list
    #[must_use]
    pub fn topology(self, name: &str, uri: &str) -> Self {
        self.declare(name).set(name, "uri", uri)
    }

    /// Declare a topology subtree without a URI
    #[must_use]
    pub fn topology_without_uri(self, name: &str) -> Self {
        self.declare(name).set(name, "description", "no uri")
    }

    /// Override the raw names list
    #[must_use]
    pub fn names(mut self, raw: &str) -> Self {
        self.names = Some(raw.to_string());
        self
    }

    #[must_use]
    pub fn description(self, name: &str, description: &str) -> Self {
        self.set(name, "description", description)
    }

    #[must_use]
    pub fn version(self, name: &str, version: &str) -> Self {
        self.set(name, "version", version)
    }

    #[must_use]
    pub fn producer(self, name: &str, class: &str) -> Self {
        self.set(name, "specExecutorInstanceProducer.class", class)
    }

    /// Set an arbitrary key inside a topology subtree
    #[must_use]
    pub fn set(mut self, name: &str, key: &str, value: &str) -> Self {
        self.pairs
            .push((format!("topology.factory.{name}.{key}"), value.to_string()));
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        let names = self
            .names
            .map(|names| ("topology.factory.topologyNames".to_string(), names));
        Config::from_pairs(names.into_iter().chain(self.pairs))
    }

    fn declare(mut self, name: &str) -> Self {
        self.names = Some(match self.names.take() {
            Some(existing) if !existing.is_empty() => format!("{existing},{name}"),
            _ => name.to_string(),
        });
        self
    }
}

/// Config declaring topologies `a` and `b` with complete subtrees
pub fn two_topology_config() -> Config {
    TopologyConfigBuilder::new()
        .topology("a", "fs:///a")
        .topology("b", "fs:///b")
        .build()
}

/// Default registry plus a producer whose constructor always fails
pub fn registry_with_failing_producer() -> Arc<ProducerRegistry> {
    let mut registry = ProducerRegistry::with_defaults();
    registry.register(FAILING_PRODUCER, &["failing"], |_config| {
        Err(ProducerError::construction(FAILING_PRODUCER, "constructor failure"))
    });
    Arc::new(registry)
}
