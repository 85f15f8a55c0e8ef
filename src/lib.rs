//! Middleware specification resolution.
//!
//! This crate turns textual middleware specifications like
//! `"some-package/exportName()"` into callable middleware functions. A
//! specification names a module installed in a [`ModuleRegistry`], an
//! optional named export within that module, and an optional trailing `()`
//! marking the export as a factory that must be invoked with a
//! request-scoped [`Context`] to produce the actual middleware.
//!
//! # Specification grammar
//!
//! ```text
//! MODULE[/EXPORT][()]
//! ```
//!
//! `MODULE` is either a scoped identifier (`@scope/name`) or a single
//! unscoped segment. The whole string must match; there is no whitespace
//! tolerance and no escaping for the separator characters.
//!
//! # Example
//!
//! ```
//! use middleware_compiler::{
//!     Context, CompilerSpec, Export, Module, ModuleRegistry, middleware_fn, resolve_compiler,
//! };
//!
//! let mut registry = ModuleRegistry::new();
//! registry.install(
//!     "compress",
//!     Module::new().with_export(
//!         "createHandler",
//!         Export::factory(|_ctx| middleware_fn(|_req| {})),
//!     ),
//! );
//!
//! let spec = CompilerSpec::from("compress/createHandler()");
//! let middleware = resolve_compiler(&registry, &spec, &Context::new()).unwrap();
//! let mut request = Context::new();
//! middleware(&mut request);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod module;
pub mod registry;
pub mod resolver;
pub mod spec;

pub use config::PipelineConfig;
pub use context::Context;
pub use error::ResolveError;
pub use module::{Export, FactoryFn, MiddlewareFn, Module, middleware_fn};
pub use registry::ModuleRegistry;
pub use resolver::{resolve_compiler, resolve_pipeline};
pub use spec::{CompilerSpec, ParsedSpec, parse_middleware_spec};
