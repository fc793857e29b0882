//! Topology API
//!
//! Spec model shared by the topology factory, producer implementations and
//! downstream orchestration.
//!
//! # Core Concepts
//!
//! - [`Spec`]: URI, version and description common to every spec
//! - [`TopologySpec`]: immutable binding of a deployment target to its producer
//! - [`JobSpec`]: unit of work submitted to a target
//! - [`SpecExecutorProducer`]: pluggable capability that submits job specs
//!
//! # Example
//!
//! ```rust,ignore
//! use topo_api::{Spec, TopologySpec};
//!
//! let spec = TopologySpec::builder("fs:///cluster")
//!     .with_config(config)
//!     .with_description("local cluster")
//!     .with_producer(producer)
//!     .build()?;
//!
//! assert_eq!(spec.uri(), "fs:///cluster");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod job;
mod producer;
mod spec;
mod topology;

pub use error::{ProducerError, SpecError};
pub use job::{JobSpec, JobSpecBuilder};
pub use producer::SpecExecutorProducer;
pub use spec::{Spec, DEFAULT_DESCRIPTION, DEFAULT_VERSION};
pub use topology::{TopologySpec, TopologySpecBuilder};

/// Re-exported so implementors do not need a direct dependency
pub use async_trait::async_trait;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
