//! Configuration keys read by the topology factory

/// Namespace holding one subtree per topology
pub const TOPOLOGY_FACTORY_PREFIX: &str = "topology.factory.";

/// Comma separated list of declared topology names
pub const TOPOLOGY_FACTORY_TOPOLOGY_NAMES_KEY: &str = "topology.factory.topologyNames";

/// Optional description, relative to a topology subtree
pub const TOPOLOGYSPEC_DESCRIPTION_KEY: &str = "description";

/// Optional version, relative to a topology subtree
pub const TOPOLOGYSPEC_VERSION_KEY: &str = "version";

/// Required URI, relative to a topology subtree
pub const TOPOLOGYSPEC_URI_KEY: &str = "uri";

/// Optional producer alias or fully-qualified name, relative to a topology subtree
pub const SPEC_EXECUTOR_PRODUCER_KEY: &str = "specExecutorInstanceProducer.class";

/// Path of the subtree for topology `name`
#[inline]
#[must_use]
pub fn topology_path(name: &str) -> String {
    format!("{TOPOLOGY_FACTORY_PREFIX}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_key_under_prefix() {
        assert!(TOPOLOGY_FACTORY_TOPOLOGY_NAMES_KEY.starts_with(TOPOLOGY_FACTORY_PREFIX));
    }

    #[test]
    fn topology_path_joins_prefix() {
        assert_eq!(topology_path("local"), "topology.factory.local");
    }
}
