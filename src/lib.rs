//! Curated WGSL shader function fragments with dependency-aware assembly.
//!
//! The built-in catalog (see [`library`]) exposes each function as a named
//! string constant. The resolver expands a requested set of function names
//! into the full, dependency-ordered source listing needed to compile them:
//! every transitive dependency first, every body exactly once, fragments
//! joined by a blank line. The output carries no wrapper — embed it wherever
//! the surrounding shader document needs it.
//!
//! ```
//! let source = wgsl_stitch::combined_source(&["fbm_value_2d"]).unwrap();
//!
//! // The fbm fragment pulls in its whole dependency chain, in order.
//! let hash = source.find("fn hash21").unwrap();
//! let noise = source.find("fn value_noise_2d").unwrap();
//! let fbm = source.find("fn fbm_value_2d").unwrap();
//! assert!(hash < noise && noise < fbm);
//! ```
//!
//! For registries over other fragment sets, build a
//! [`ShaderRegistry`] from your own [`Category`] tables; the resolver and
//! assembler only ever read the registry value they are handed.

use once_cell::sync::Lazy;

pub use stitch_core::{
    Category, FunctionDef, FunctionDoc, FunctionEntry, RegistryError, ResolveError,
    ShaderRegistry, SOURCE_SEPARATOR,
};
/// The built-in fragment catalog: per-function constants and category tables.
pub use stitch_library as library;

static REGISTRY: Lazy<ShaderRegistry> = Lazy::new(|| match stitch_library::registry() {
    Ok(registry) => {
        log::debug!("built-in shader registry ready: {} functions", registry.len());
        registry
    }
    // The catalog is embedded at compile time; failing to build it means the
    // shipped data itself is inconsistent.
    Err(err) => panic!("built-in shader function catalog is invalid: {err}"),
});

/// The registry over the built-in function catalog.
///
/// Built on first access and shared, immutable, for the lifetime of the
/// process.
pub fn registry() -> &'static ShaderRegistry {
    &REGISTRY
}

/// Assembles the dependency-ordered source listing for `names` from the
/// built-in catalog.
///
/// The result contains every transitive dependency followed by the requested
/// functions themselves, each body exactly once, joined by
/// [`SOURCE_SEPARATOR`]. An empty request yields an empty string.
///
/// # Errors
///
/// Returns a [`ResolveError`] naming the first unknown function encountered,
/// whether it was requested directly or declared as a dependency.
pub fn combined_source(names: &[&str]) -> Result<String, ResolveError> {
    registry().combined_source(names)
}

/// Raw source text of one built-in function, without dependency expansion.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownFunction`] if `name` is not in the catalog.
pub fn source(name: &str) -> Result<&'static str, ResolveError> {
    registry().source(name)
}
