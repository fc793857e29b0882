//! Executor producer contract
//!
//! An executor producer is the pluggable component that submits job specs to
//! one execution target. Each topology owns exactly one producer instance,
//! constructed from that topology's configuration subtree.

use async_trait::async_trait;

use crate::error::ProducerError;
use crate::job::JobSpec;

/// Submits and manages job specs on an execution target
///
/// Implement this trait and register a constructor with the producer registry
/// to add a new kind of execution target.
#[async_trait]
pub trait SpecExecutorProducer: Send + Sync + std::fmt::Debug {
    /// Fully-qualified identity of the implementation
    fn identity(&self) -> &str;

    /// Submit a new job spec
    async fn add_spec(&self, spec: JobSpec) -> Result<(), ProducerError>;

    /// Replace a previously submitted job spec with the same URI
    async fn update_spec(&self, spec: JobSpec) -> Result<(), ProducerError>;

    /// Withdraw a job spec by URI
    async fn delete_spec(&self, uri: &str) -> Result<(), ProducerError>;

    /// Job specs currently known to the target
    async fn list_specs(&self) -> Result<Vec<JobSpec>, ProducerError>;
}
