//! Error types for middleware specification resolution.

use thiserror::Error;

/// Errors surfaced while resolving a middleware specification.
///
/// Every variant represents a static configuration mistake detected once at
/// resolution time. Nothing here is transient, so callers should surface
/// these rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The specification string does not match the grammar.
    #[error("Failed to parse middleware spec: {0}")]
    InvalidSpec(String),

    /// The named module is not installed in the registry.
    #[error("Middleware module not found: {0}")]
    ModuleNotFound(String),

    /// The named export is absent on the loaded module.
    #[error("Module `{module}` has no export named `{export}`")]
    ExportNotFound {
        /// Name of the module the export was looked up on.
        module: String,
        /// Name of the missing export.
        export: String,
    },

    /// The spec named no export, but the module has no default export.
    #[error("Module `{0}` has no default export")]
    NoDefaultExport(String),

    /// The spec carried a `()` marker, but the selected export is plain
    /// middleware and cannot be invoked as a factory.
    #[error("Export selected by `{0}` is not a factory function")]
    NotFactory(String),

    /// The selected export is a factory, but the spec carried no `()`
    /// marker to invoke it.
    #[error("Export selected by `{0}` is a factory and must be invoked with `()`")]
    UnexpectedFactory(String),

    /// A pipeline configuration document failed to deserialize.
    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfig(String),
}
