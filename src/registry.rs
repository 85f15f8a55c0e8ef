//! Name-keyed registry of middleware modules.
//!
//! The registry stands in for a host module loader: the embedding
//! application installs modules under their package names during setup,
//! and the resolver looks them up by name at resolution time. Lookup is a
//! read-only operation; installation is a setup-phase concern, so callers
//! needing shared access after setup wrap the registry themselves.

use std::collections::HashMap;

use tracing::debug;

use crate::error::ResolveError;
use crate::module::Module;

/// Process-wide mapping from module names to their exported values.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Module>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a module under a name, replacing and returning any module
    /// previously installed under that name.
    pub fn install(&mut self, name: impl Into<String>, module: Module) -> Option<Module> {
        let name = name.into();
        debug!("Installing middleware module: {name}");
        self.modules.insert(name, module)
    }

    /// Look a module up by name.
    ///
    /// Fails with [`ResolveError::ModuleNotFound`] when no module is
    /// installed under the name.
    pub fn load(&self, name: &str) -> Result<&Module, ResolveError> {
        self.modules
            .get(name)
            .ok_or_else(|| ResolveError::ModuleNotFound(name.to_string()))
    }

    /// True when a module is installed under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Number of installed modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when no modules are installed.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
