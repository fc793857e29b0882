//! In-memory executor producer
//!
//! Keeps submitted job specs in insertion order. Used as the default producer
//! and for wiring tests without a live execution target.

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;
use topo_api::{JobSpec, ProducerError, Spec, SpecExecutorProducer};
use topo_config::Config;

use crate::registry::ConfiguredProducer;

/// Config key bounding the number of stored specs
pub const CAPACITY_KEY: &str = "capacity";

/// Producer that stores job specs in process memory
#[derive(Debug, Default)]
pub struct InMemorySpecExecutorProducer {
    specs: Mutex<IndexMap<String, JobSpec>>,
    capacity: Option<usize>,
}

impl InMemorySpecExecutorProducer {
    /// Create unbounded producer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create producer holding at most `capacity` specs
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            specs: Mutex::new(IndexMap::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    /// Configured capacity, if bounded
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of stored specs
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.lock().len()
    }

    /// Check if no specs are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.lock().is_empty()
    }
}

impl ConfiguredProducer for InMemorySpecExecutorProducer {
    const IDENTITY: &'static str = "topo_executor::InMemorySpecExecutorProducer";
    const ALIASES: &'static [&'static str] = &["inmemory", "memory"];

    fn from_config(config: &Config) -> Result<Self, ProducerError> {
        if !config.has_path(CAPACITY_KEY) {
            return Ok(Self::new());
        }
        let capacity = config.get_u64(CAPACITY_KEY)?;
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| {
                ProducerError::construction(Self::IDENTITY, format!("invalid capacity {capacity}"))
            })?;
        Ok(Self::with_capacity(capacity))
    }
}

#[async_trait]
impl SpecExecutorProducer for InMemorySpecExecutorProducer {
    fn identity(&self) -> &str {
        Self::IDENTITY
    }

    async fn add_spec(&self, spec: JobSpec) -> Result<(), ProducerError> {
        let mut specs = self.specs.lock();
        if specs.contains_key(spec.uri()) {
            return Err(ProducerError::DuplicateSpec(spec.uri().to_string()));
        }
        if let Some(capacity) = self.capacity {
            if specs.len() >= capacity {
                return Err(ProducerError::CapacityExceeded(capacity));
            }
        }
        tracing::debug!("Adding job spec {}", spec.uri());
        specs.insert(spec.uri().to_string(), spec);
        Ok(())
    }

    async fn update_spec(&self, spec: JobSpec) -> Result<(), ProducerError> {
        let mut specs = self.specs.lock();
        match specs.get_mut(spec.uri()) {
            Some(existing) => {
                tracing::debug!("Updating job spec {}", spec.uri());
                *existing = spec;
                Ok(())
            }
            None => Err(ProducerError::SpecNotFound(spec.uri().to_string())),
        }
    }

    async fn delete_spec(&self, uri: &str) -> Result<(), ProducerError> {
        tracing::debug!("Deleting job spec {}", uri);
        self.specs
            .lock()
            .shift_remove(uri)
            .map(|_| ())
            .ok_or_else(|| ProducerError::SpecNotFound(uri.to_string()))
    }

    async fn list_specs(&self) -> Result<Vec<JobSpec>, ProducerError> {
        Ok(self.specs.lock().values().cloned().collect())
    }
}
