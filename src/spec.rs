//! Parsing of middleware specification strings.
//!
//! A specification has the form `MODULE[/EXPORT][()]`:
//!
//! - `MODULE` is either a scoped identifier (`@scope/name`, segments
//!   excluding `/` and `(`) or a single segment excluding `@`, `/`, `(`.
//! - the optional `/EXPORT` segment names an export within the module.
//! - the optional trailing `()` marks the export as a factory to invoke.
//!
//! The whole input must match; there is no whitespace tolerance and no
//! escaping mechanism for the separator characters.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::ResolveError;
use crate::module::MiddlewareFn;

/// Anchored grammar for middleware specification strings.
const MIDDLEWARE_SPEC_PATTERN: &str = r"^(@[^/(]+/[^/(]+|[^@/(]+)(?:/([^/(]+)(\(\))?)?$";

#[allow(clippy::unwrap_used)] // the pattern is a constant, compilation cannot fail
static MIDDLEWARE_SPEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MIDDLEWARE_SPEC_PATTERN).unwrap());

/// A middleware specification string parsed into its components.
///
/// Produced by [`parse_middleware_spec`] and consumed immediately by the
/// resolver; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpec {
    /// Module name, scoped (`@scope/name`) or unscoped. Non-empty.
    pub module_name:         String,
    /// Named export within the module, when the spec carries one.
    pub export_name:         Option<String>,
    /// True when the spec ends with `()`.
    pub is_factory_function: bool,
}

/// Parse a middleware specification into its standard components.
///
/// Fails with [`ResolveError::InvalidSpec`] carrying the offending input
/// when the string does not match the grammar.
pub fn parse_middleware_spec(spec: &str) -> Result<ParsedSpec, ResolveError> {
    let captures = MIDDLEWARE_SPEC_REGEX
        .captures(spec)
        .ok_or_else(|| ResolveError::InvalidSpec(spec.to_string()))?;

    Ok(ParsedSpec {
        module_name:         captures[1].to_string(),
        export_name:         captures.get(2).map(|m| m.as_str().to_string()),
        is_factory_function: captures.get(3).is_some(),
    })
}

/// A middleware specification as supplied by a caller.
///
/// Callers either hold a function that is already resolved or a source
/// string still to be parsed and loaded. Keeping the two cases in one
/// variant type gives exhaustive handling at the resolver instead of a
/// runtime callable check.
#[derive(Clone, Deserialize)]
#[serde(from = "String")]
pub enum CompilerSpec {
    /// An already-callable middleware function; the identity fast path.
    Resolved(MiddlewareFn),
    /// A specification string still to be parsed and resolved.
    Source(String),
}

impl fmt::Debug for CompilerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(_) => f.write_str("CompilerSpec::Resolved"),
            Self::Source(source) => write!(f, "CompilerSpec::Source({source:?})"),
        }
    }
}

impl From<String> for CompilerSpec {
    fn from(spec: String) -> Self {
        Self::Source(spec)
    }
}

impl From<&str> for CompilerSpec {
    fn from(spec: &str) -> Self {
        Self::Source(spec.to_string())
    }
}

impl From<MiddlewareFn> for CompilerSpec {
    fn from(middleware: MiddlewareFn) -> Self {
        Self::Resolved(middleware)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn parsed(module: &str, export: Option<&str>, factory: bool) -> ParsedSpec {
        ParsedSpec {
            module_name:         module.to_string(),
            export_name:         export.map(str::to_string),
            is_factory_function: factory,
        }
    }

    #[test]
    fn test_parse_bare_module() {
        assert_eq!(
            parse_middleware_spec("pkg").unwrap(),
            parsed("pkg", None, false)
        );
    }

    #[test]
    fn test_parse_module_with_export() {
        assert_eq!(
            parse_middleware_spec("pkg/fn").unwrap(),
            parsed("pkg", Some("fn"), false)
        );
    }

    #[test]
    fn test_parse_module_with_factory_export() {
        assert_eq!(
            parse_middleware_spec("pkg/fn()").unwrap(),
            parsed("pkg", Some("fn"), true)
        );
    }

    #[test]
    fn test_parse_scoped_module_without_export() {
        // The scope separator must not be misread as an export separator.
        assert_eq!(
            parse_middleware_spec("@scope/pkg").unwrap(),
            parsed("@scope/pkg", None, false)
        );
    }

    #[test]
    fn test_parse_scoped_module_with_export() {
        assert_eq!(
            parse_middleware_spec("@scope/pkg/exportName").unwrap(),
            parsed("@scope/pkg", Some("exportName"), false)
        );
    }

    #[test]
    fn test_parse_scoped_module_with_factory_export() {
        assert_eq!(
            parse_middleware_spec("@scope/pkg/export()").unwrap(),
            parsed("@scope/pkg", Some("export"), true)
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = parse_middleware_spec("my-module/createHandler()").unwrap();
        let second = parse_middleware_spec("my-module/createHandler()").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_rejects_malformed_specs() {
        for bad in [
            "",
            "pkg(",
            "pkg()",
            "pkg/fn(",
            "pkg/fn(()",
            "pkg/fn/extra",
            "@scope",
            "@scope/pkg/fn/extra",
            "pkg ()",
        ] {
            match parse_middleware_spec(bad) {
                Err(ResolveError::InvalidSpec(spec)) => assert_eq!(spec, bad),
                other => panic!("expected InvalidSpec for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_compiler_spec_deserializes_from_string() {
        let spec: CompilerSpec = serde_json::from_str(r#""@scope/pkg/export()""#).unwrap();
        match spec {
            CompilerSpec::Source(source) => assert_eq!(source, "@scope/pkg/export()"),
            CompilerSpec::Resolved(_) => panic!("expected a source spec"),
        }
    }
}
