//! Error types for the topology factory

use topo_api::{ProducerError, SpecError};
use topo_config::ConfigError;

/// Errors aborting a call to produce topologies
///
/// Every variant is fatal for the whole call; no partial topology list is
/// returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Declared topology has no configuration subtree
    #[error("config does not contain topology factory descriptor for topology '{name}'")]
    MissingTopologyConfig {
        /// Declared topology name
        name: String,
    },

    /// Producer could not be resolved or constructed
    #[error("failed to create spec executor producer '{identity}' for topology '{topology}'")]
    Producer {
        topology: String,
        identity: String,
        #[source]
        source: ProducerError,
    },

    /// Topology spec builder rejected the topology
    #[error("failed to build topology spec '{topology}'")]
    Spec {
        topology: String,
        #[source]
        source: SpecError,
    },

    /// Configuration could not be read
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl FactoryError {
    /// Topology the error refers to, if any
    #[must_use]
    pub fn topology(&self) -> Option<&str> {
        match self {
            Self::MissingTopologyConfig { name } => Some(name.as_str()),
            Self::Producer { topology, .. } | Self::Spec { topology, .. } => {
                Some(topology.as_str())
            }
            Self::Config(_) => None,
        }
    }
}

/// Result type alias for factory operations
pub type FactoryResult<T> = Result<T, FactoryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn missing_topology_display() {
        let err = FactoryError::MissingTopologyConfig { name: "local".to_string() };
        assert!(err.to_string().contains("'local'"));
        assert_eq!(err.topology(), Some("local"));
    }

    #[test]
    fn producer_error_keeps_source() {
        let err = FactoryError::Producer {
            topology: "local".to_string(),
            identity: "nope".to_string(),
            source: ProducerError::UnknownProducer("nope".to_string()),
        };
        let source = err.source().unwrap();
        assert!(source.to_string().contains("unknown spec executor producer"));
    }

    #[test]
    fn config_error_converts() {
        let err: FactoryError = ConfigError::missing("x").into();
        assert!(matches!(err, FactoryError::Config(_)));
        assert_eq!(err.topology(), None);
    }
}
