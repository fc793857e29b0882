//! Producer registry
//!
//! Maps producer identities to constructors. Each implementation is
//! registered under its fully-qualified name plus any number of short
//! aliases; resolution is a plain lookup, so an unknown identity is reported
//! as [`ProducerError::UnknownProducer`] rather than failing later.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use topo_api::{ProducerError, SpecExecutorProducer};
use topo_config::Config;

use crate::logging::LoggingSpecExecutorProducer;
use crate::memory::InMemorySpecExecutorProducer;

/// Constructor invoked with a topology's configuration subtree
pub type ProducerConstructor = Arc<
    dyn Fn(&Config) -> Result<Arc<dyn SpecExecutorProducer>, ProducerError> + Send + Sync,
>;

/// Producer that can be built from a configuration subtree
///
/// Implementing this trait lets [`ProducerRegistry::register_producer`]
/// register the type under its identity and aliases.
pub trait ConfiguredProducer: SpecExecutorProducer + Sized + 'static {
    /// Fully-qualified identity
    const IDENTITY: &'static str;

    /// Short aliases (matched case-insensitively)
    const ALIASES: &'static [&'static str];

    /// Construct from the topology configuration subtree
    ///
    /// # Errors
    /// Returns error if the configuration is unusable
    fn from_config(config: &Config) -> Result<Self, ProducerError>;
}

/// Registry of available executor producers
#[derive(Clone, Default)]
pub struct ProducerRegistry {
    constructors: IndexMap<String, ProducerConstructor>,
    aliases: HashMap<String, String>,
}

impl ProducerRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: IndexMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Create registry with built-in producers
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_producer::<InMemorySpecExecutorProducer>();
        registry.register_producer::<LoggingSpecExecutorProducer>();
        registry
    }

    /// Register a constructor under a fully-qualified name and aliases
    ///
    /// Registering an existing name or alias replaces the earlier entry.
    pub fn register<F>(&mut self, identity: &str, aliases: &[&str], constructor: F)
    where
        F: Fn(&Config) -> Result<Arc<dyn SpecExecutorProducer>, ProducerError>
            + Send
            + Sync
            + 'static,
    {
        self.constructors
            .insert(identity.to_string(), Arc::new(constructor));
        for alias in aliases {
            self.aliases
                .insert(alias.to_ascii_lowercase(), identity.to_string());
        }
    }

    /// Register a [`ConfiguredProducer`] implementation
    pub fn register_producer<P: ConfiguredProducer>(&mut self) {
        self.register(P::IDENTITY, P::ALIASES, |config| {
            let producer: Arc<dyn SpecExecutorProducer> = Arc::new(P::from_config(config)?);
            Ok(producer)
        });
    }

    /// Resolve an alias or fully-qualified name to the registered identity
    ///
    /// # Errors
    /// [`ProducerError::UnknownProducer`] if nothing matches
    pub fn resolve(&self, identity: &str) -> Result<&str, ProducerError> {
        let identity = identity.trim();
        if let Some(target) = self.aliases.get(&identity.to_ascii_lowercase()) {
            return Ok(target.as_str());
        }
        self.constructors
            .get_key_value(identity)
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| ProducerError::UnknownProducer(identity.to_string()))
    }

    /// Resolve `identity` and construct a fresh producer from `config`
    ///
    /// # Errors
    /// Resolution errors, or whatever the constructor reports
    pub fn instantiate(
        &self,
        identity: &str,
        config: &Config,
    ) -> Result<Arc<dyn SpecExecutorProducer>, ProducerError> {
        let resolved = self.resolve(identity)?;
        let constructor = self
            .constructors
            .get(resolved)
            .ok_or_else(|| ProducerError::UnknownProducer(resolved.to_string()))?;
        constructor(config)
    }

    /// Check if an alias or name resolves
    #[inline]
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.resolve(identity).is_ok()
    }

    /// Registered fully-qualified names, in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Number of registered implementations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for ProducerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProducerRegistry")
            .field("producers", &self.names())
            .field("aliases", &self.aliases)
            .finish()
    }
}

static DEFAULT_REGISTRY: Lazy<Arc<ProducerRegistry>> =
    Lazy::new(|| Arc::new(ProducerRegistry::with_defaults()));

/// Process-wide registry holding the built-in producers
#[must_use]
pub fn default_registry() -> Arc<ProducerRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}
