//! Declarative middleware pipeline configuration.
//!
//! Configuration documents carry middleware specifications as plain
//! strings; deserialization turns each into [`CompilerSpec::Source`],
//! leaving parsing and loading to resolution time.

use serde::Deserialize;

use crate::error::ResolveError;
use crate::spec::CompilerSpec;

/// A middleware pipeline as it appears in configuration: an ordered list
/// of middleware specifications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    /// Middleware specifications, in the order they should run.
    #[serde(default)]
    pub middleware: Vec<CompilerSpec>,
}

impl PipelineConfig {
    /// Deserialize a pipeline configuration from a JSON document.
    ///
    /// Fails with [`ResolveError::InvalidConfig`] when the document does
    /// not have the expected shape.
    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        serde_json::from_str(json).map_err(|e| ResolveError::InvalidConfig(e.to_string()))
    }
}
