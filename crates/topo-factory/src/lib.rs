//! Topology Spec Factory
//!
//! Turns `topology.factory.*` configuration into [`TopologySpec`]s, each bound
//! to an executor producer resolved by alias or fully-qualified name.
//!
//! # Configuration
//!
//! ```text
//! topology.factory.topologyNames = "name1,name2"
//! topology.factory.<name>.uri = "..."                                  (required)
//! topology.factory.<name>.description = "..."                          (default "NA")
//! topology.factory.<name>.version = "..."                              (default "-1")
//! topology.factory.<name>.specExecutorInstanceProducer.class = "..."   (default in-memory)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use topo_factory::{ConfigBasedTopologySpecFactory, TopologySpecFactory};
//!
//! let factory = ConfigBasedTopologySpecFactory::new(Config::load("service.yaml")?);
//! for spec in factory.topologies()? {
//!     println!("{} -> {}", spec.uri(), spec.producer().identity());
//! }
//! ```
//!
//! [`TopologySpec`]: topo_api::TopologySpec

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod factory;
pub mod keys;

pub use error::{FactoryError, FactoryResult};
pub use factory::{ConfigBasedTopologySpecFactory, TopologySpecFactory};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for producing topologies
    pub use crate::{ConfigBasedTopologySpecFactory, FactoryError, TopologySpecFactory};
    pub use topo_api::{Spec, SpecExecutorProducer, TopologySpec};
    pub use topo_config::Config;
    pub use topo_executor::{ProducerRegistry, DEFAULT_SPEC_EXECUTOR_PRODUCER};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
