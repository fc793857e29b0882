//! Topology Configuration
//!
//! Read-only hierarchical configuration with dotted-path access.
//!
//! # Core Concepts
//!
//! - [`Config`]: shared, immutable key/value tree
//! - [`ConfigFormat`]: JSON, YAML and TOML document loading
//! - [`ConfigError`]: distinguishable missing-path and wrong-type errors
//!
//! # Example
//!
//! ```rust,ignore
//! use topo_config::Config;
//!
//! let config = Config::load("service.yaml")?;
//! if config.has_path("topology.factory.topologyNames") {
//!     let names = config.get_string("topology.factory.topologyNames")?;
//! }
//! let local = config.get_config("topology.factory.local")?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod error;
mod loader;

pub use config::{split_list, Config, PATH_SEPARATOR};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigFormat;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
