//! Rendering of produced topologies

use std::io::Write;

use serde::Serialize;
use topo_api::{Spec, TopologySpec};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Printable view of one topology spec
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TopologySummary {
    pub(crate) uri: String,
    pub(crate) version: String,
    pub(crate) description: String,
    pub(crate) producer: String,
}

impl From<&TopologySpec> for TopologySummary {
    fn from(spec: &TopologySpec) -> Self {
        Self {
            uri: spec.uri().to_string(),
            version: spec.version().to_string(),
            description: spec.description().to_string(),
            producer: spec.producer().identity().to_string(),
        }
    }
}

pub(crate) fn write_topologies(
    out: &mut impl Write,
    specs: &[TopologySpec],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let summaries: Vec<TopologySummary> = specs.iter().map(TopologySummary::from).collect();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summaries)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for s in &summaries {
                writeln!(
                    out,
                    "{}\tversion={}\tproducer={}\t{}",
                    s.uri, s.version, s.producer, s.description
                )?;
            }
        }
    }
    Ok(())
}

pub(crate) fn write_names(
    out: &mut impl Write,
    names: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, names)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use topo_factory::{ConfigBasedTopologySpecFactory, TopologySpecFactory};
    use topo_test_utils::TopologyConfigBuilder;

    fn specs() -> Vec<TopologySpec> {
        let config = TopologyConfigBuilder::new()
            .topology("local", "fs:///local")
            .description("local", "Local cluster")
            .version("local", "2")
            .producer("local", "logging")
            .build();
        ConfigBasedTopologySpecFactory::new(config).topologies().unwrap()
    }

    #[test]
    fn text_output() {
        let mut out = Vec::new();
        write_topologies(&mut out, &specs(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "fs:///local\tversion=2\tproducer=topo_executor::LoggingSpecExecutorProducer\tLocal cluster\n"
        );
    }

    #[test]
    fn json_output() {
        let mut out = Vec::new();
        write_topologies(&mut out, &specs(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["uri"], "fs:///local");
        assert_eq!(value[0]["version"], "2");
    }

    #[test]
    fn names_output() {
        let names = vec!["a".to_string(), "b".to_string()];
        let mut out = Vec::new();
        write_names(&mut out, &names, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
    }
}
