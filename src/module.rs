//! Middleware modules and their exported values.
//!
//! A [`Module`] is the unit the registry hands out by name: an optional
//! top-level (default) export plus a map of named exports. Each export is
//! either middleware used directly or a factory invoked once with a request
//! context to produce middleware.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::context::Context;

/// The callable a middleware specification resolves to.
pub type MiddlewareFn = Arc<dyn Fn(&mut Context) + Send + Sync>;

/// A factory export: invoked once with the request context to produce the
/// actual middleware function.
pub type FactoryFn = Arc<dyn Fn(&Context) -> MiddlewareFn + Send + Sync>;

/// Wrap a closure in the [`MiddlewareFn`] arc type.
pub fn middleware_fn<F>(f: F) -> MiddlewareFn
where
    F: Fn(&mut Context) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A value a module exposes under a name, or as its top-level value.
#[derive(Clone)]
pub enum Export {
    /// Middleware used directly, without invocation.
    Middleware(MiddlewareFn),
    /// A factory that must be invoked with a context to produce middleware.
    Factory(FactoryFn),
}

impl Export {
    /// Wrap a closure as a plain middleware export.
    pub fn middleware<F>(f: F) -> Self
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        Self::Middleware(Arc::new(f))
    }

    /// Wrap a closure as a factory export.
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&Context) -> MiddlewareFn + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(f))
    }

    /// True when this export is a factory.
    pub const fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Middleware(_) => f.write_str("Export::Middleware"),
            Self::Factory(_) => f.write_str("Export::Factory"),
        }
    }
}

/// A registered middleware module.
///
/// Mirrors the shape of a loaded module in a dynamic host: a top-level
/// value (the default export) and a namespace of named exports. Either side
/// may be absent; a module that is "just a function" is built with
/// [`Module::from_export`].
#[derive(Debug, Clone, Default)]
pub struct Module {
    default: Option<Export>,
    exports: HashMap<String, Export>,
}

impl Module {
    /// Create an empty module.
    pub fn new() -> Self {
        Self::default()
    }

    /// A module whose top-level value is the export itself.
    pub fn from_export(export: Export) -> Self {
        Self {
            default: Some(export),
            exports: HashMap::new(),
        }
    }

    /// Add a named export, builder style.
    pub fn with_export(mut self, name: impl Into<String>, export: Export) -> Self {
        self.exports.insert(name.into(), export);
        self
    }

    /// The module's top-level value, if it has one.
    pub const fn default_export(&self) -> Option<&Export> {
        self.default.as_ref()
    }

    /// Look a named export up.
    pub fn export(&self, name: &str) -> Option<&Export> {
        self.exports.get(name)
    }

    /// Names of all named exports, in arbitrary order.
    pub fn export_names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }
}
