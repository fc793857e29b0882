//! Topology Executor Producers
//!
//! Alias resolution and built-in executor producers.
//!
//! # Core Concepts
//!
//! - [`ProducerRegistry`]: maps aliases and fully-qualified names to constructors
//! - [`ConfiguredProducer`]: producers constructible from a config subtree
//! - [`InMemorySpecExecutorProducer`]: default producer, stores specs in memory
//! - [`LoggingSpecExecutorProducer`]: dry-run producer that only logs
//!
//! # Example
//!
//! ```rust,ignore
//! use topo_executor::ProducerRegistry;
//!
//! let registry = ProducerRegistry::with_defaults();
//! let producer = registry.instantiate("inmemory", &topology_config)?;
//! producer.add_spec(job).await?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod logging;
mod memory;
mod registry;

pub use logging::{LogLevel, LoggingSpecExecutorProducer, LEVEL_KEY};
pub use memory::{InMemorySpecExecutorProducer, CAPACITY_KEY};
pub use registry::{default_registry, ConfiguredProducer, ProducerConstructor, ProducerRegistry};

/// Producer used when a topology does not name one
pub const DEFAULT_SPEC_EXECUTOR_PRODUCER: &str =
    <InMemorySpecExecutorProducer as ConfiguredProducer>::IDENTITY;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
