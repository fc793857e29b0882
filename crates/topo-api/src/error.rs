//! Error types for spec construction and executor producers

use topo_config::ConfigError;

/// Errors raised by spec builders
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// URI is required for every spec
    #[error("spec URI is missing or empty")]
    MissingUri,

    /// Topology specs must carry an executor producer
    #[error("topology spec '{uri}' has no executor producer")]
    MissingProducer {
        /// URI of the spec being built
        uri: String,
    },
}

/// Errors raised while resolving, constructing or driving an executor producer
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    /// Alias or fully-qualified name is not registered
    #[error("unknown spec executor producer: '{0}'")]
    UnknownProducer(String),

    /// Producer constructor rejected its configuration
    #[error("failed to construct spec executor producer '{identity}': {message}")]
    Construction {
        /// Resolved producer identity
        identity: String,
        /// Reason reported by the constructor
        message: String,
    },

    /// Producer configuration could not be read
    #[error("producer config error: {0}")]
    Config(#[from] ConfigError),

    /// Spec with this URI was already added
    #[error("spec already exists: {0}")]
    DuplicateSpec(String),

    /// Spec with this URI is not known to the producer
    #[error("spec not found: {0}")]
    SpecNotFound(String),

    /// Producer refuses more specs
    #[error("producer capacity of {0} specs exceeded")]
    CapacityExceeded(usize),
}

impl ProducerError {
    /// Create construction error
    pub fn construction(identity: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Construction {
            identity: identity.into(),
            message: message.into(),
        }
    }
}
