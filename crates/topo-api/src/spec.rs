//! Common spec contract

/// Description used when none is configured
pub const DEFAULT_DESCRIPTION: &str = "NA";

/// Version used when none is configured; marks the version as unset
pub const DEFAULT_VERSION: &str = "-1";

/// Identity and descriptive metadata shared by every spec
pub trait Spec {
    /// Unique identity of the spec
    fn uri(&self) -> &str;

    /// Version string; [`DEFAULT_VERSION`] when unset
    fn version(&self) -> &str;

    /// Human readable description; [`DEFAULT_DESCRIPTION`] when unset
    fn description(&self) -> &str;

    /// Check if the version is the unset marker
    fn is_version_unset(&self) -> bool {
        self.version() == DEFAULT_VERSION
    }
}

/// Validate a URI supplied to a builder
pub(crate) fn require_uri(uri: Option<String>) -> Result<String, crate::SpecError> {
    match uri {
        Some(uri) if !uri.trim().is_empty() => Ok(uri),
        _ => Err(crate::SpecError::MissingUri),
    }
}
