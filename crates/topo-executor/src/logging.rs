//! Logging executor producer
//!
//! Records every submission as a tracing event and keeps no state. Useful as a
//! dry-run target.

use async_trait::async_trait;
use topo_api::{JobSpec, ProducerError, Spec, SpecExecutorProducer};
use topo_config::Config;

use crate::registry::ConfiguredProducer;

/// Config key selecting the event level
pub const LEVEL_KEY: &str = "level";

/// Level at which submissions are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// Producer that only logs submissions
#[derive(Debug, Default)]
pub struct LoggingSpecExecutorProducer {
    level: LogLevel,
}

impl LoggingSpecExecutorProducer {
    /// Create producer logging at `level`
    #[inline]
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Configured level
    #[inline]
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn record(&self, operation: &str, uri: &str) {
        match self.level {
            LogLevel::Trace => tracing::trace!("{} job spec {}", operation, uri),
            LogLevel::Debug => tracing::debug!("{} job spec {}", operation, uri),
            LogLevel::Info => tracing::info!("{} job spec {}", operation, uri),
            LogLevel::Warn => tracing::warn!("{} job spec {}", operation, uri),
            LogLevel::Error => tracing::error!("{} job spec {}", operation, uri),
        }
    }
}

impl ConfiguredProducer for LoggingSpecExecutorProducer {
    const IDENTITY: &'static str = "topo_executor::LoggingSpecExecutorProducer";
    const ALIASES: &'static [&'static str] = &["logging"];

    fn from_config(config: &Config) -> Result<Self, ProducerError> {
        let level = config.get_string_or(LEVEL_KEY, "info")?;
        let level = level
            .parse()
            .map_err(|e: String| ProducerError::construction(Self::IDENTITY, e))?;
        Ok(Self::new(level))
    }
}

#[async_trait]
impl SpecExecutorProducer for LoggingSpecExecutorProducer {
    fn identity(&self) -> &str {
        Self::IDENTITY
    }

    async fn add_spec(&self, spec: JobSpec) -> Result<(), ProducerError> {
        self.record("Adding", spec.uri());
        Ok(())
    }

    async fn update_spec(&self, spec: JobSpec) -> Result<(), ProducerError> {
        self.record("Updating", spec.uri());
        Ok(())
    }

    async fn delete_spec(&self, uri: &str) -> Result<(), ProducerError> {
        self.record("Deleting", uri);
        Ok(())
    }

    async fn list_specs(&self) -> Result<Vec<JobSpec>, ProducerError> {
        Ok(Vec::new())
    }
}
