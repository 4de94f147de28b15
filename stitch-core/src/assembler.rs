//! Assembly of resolved fragments into a single emittable source listing.

use std::collections::HashSet;

use crate::registry::ShaderRegistry;
use crate::{resolver, ResolveError};

/// Separator placed between consecutive fragments in assembled output.
pub const SOURCE_SEPARATOR: &str = "\n\n";

/// Assembles one source listing for `requested`.
///
/// The output contains every transitive dependency followed by the requested
/// functions themselves (those not already covered as dependencies), joined
/// by [`SOURCE_SEPARATOR`] with no leading or trailing wrapper. Bodies are
/// deduplicated by content, not merely by name: two names that share
/// identical text emit one copy. An empty request yields an empty string,
/// not an error.
///
/// # Errors
///
/// Fails as a unit — no partial output — with the first [`ResolveError`]
/// encountered in traversal order.
pub fn combined_source(
    registry: &ShaderRegistry,
    requested: &[&str],
) -> Result<String, ResolveError> {
    let deps = resolver::resolve_all(registry, requested)?;
    let dep_set: HashSet<&str> = deps.iter().map(String::as_str).collect();

    let mut final_order: Vec<&str> = deps.iter().map(String::as_str).collect();
    for &name in requested {
        if !dep_set.contains(name) {
            final_order.push(name);
        }
    }

    let mut seen_sources = HashSet::new();
    let mut fragments = Vec::new();
    for name in final_order {
        let entry = registry
            .lookup(name)
            .ok_or_else(|| ResolveError::UnknownFunction(name.to_owned()))?;
        if seen_sources.insert(entry.source()) {
            fragments.push(entry.source());
        }
    }

    Ok(fragments.join(SOURCE_SEPARATOR))
}
