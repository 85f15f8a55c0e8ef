//! Resolution of middleware specifications into middleware functions.

use tracing::debug;

use crate::config::PipelineConfig;
use crate::context::Context;
use crate::error::ResolveError;
use crate::module::{Export, MiddlewareFn};
use crate::registry::ModuleRegistry;
use crate::spec::{CompilerSpec, parse_middleware_spec};

/// Resolve a middleware specification into a middleware function.
///
/// An already-resolved spec is returned unchanged, without touching the
/// registry. A source string is parsed, its module loaded from the
/// registry, and the export selected; a factory export is invoked once
/// with `ctx` and its product returned.
///
/// Resolution is synchronous and performs no caching of its own. Every
/// failure is a configuration mistake surfaced once, never retried.
pub fn resolve_compiler(
    registry: &ModuleRegistry,
    spec: &CompilerSpec,
    ctx: &Context,
) -> Result<MiddlewareFn, ResolveError> {
    // Already a function, no resolution to do.
    let source = match spec {
        CompilerSpec::Resolved(middleware) => return Ok(middleware.clone()),
        CompilerSpec::Source(source) => source,
    };

    let parsed = parse_middleware_spec(source)?;
    let module = registry.load(&parsed.module_name)?;

    let export = match parsed.export_name.as_deref() {
        Some(name) => module
            .export(name)
            .ok_or_else(|| ResolveError::ExportNotFound {
                module: parsed.module_name.clone(),
                export: name.to_string(),
            })?,
        None => module
            .default_export()
            .ok_or_else(|| ResolveError::NoDefaultExport(parsed.module_name.clone()))?,
    };

    debug!("Resolved middleware spec: {source}");

    match (parsed.is_factory_function, export) {
        (true, Export::Factory(factory)) => Ok(factory(ctx)),
        (true, Export::Middleware(_)) => Err(ResolveError::NotFactory(source.clone())),
        (false, Export::Middleware(middleware)) => Ok(middleware.clone()),
        (false, Export::Factory(_)) => Err(ResolveError::UnexpectedFactory(source.clone())),
    }
}

/// Resolve every spec in a pipeline configuration, in declaration order.
///
/// All-or-nothing: the first failure aborts the whole resolution and no
/// partially resolved pipeline is returned.
pub fn resolve_pipeline(
    registry: &ModuleRegistry,
    config: &PipelineConfig,
    ctx: &Context,
) -> Result<Vec<MiddlewareFn>, ResolveError> {
    config
        .middleware
        .iter()
        .map(|spec| resolve_compiler(registry, spec, ctx))
        .collect()
}
