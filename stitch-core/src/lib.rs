//! Core resolution engine for composing WGSL shader source fragments.
//!
//! A [`ShaderRegistry`] is an immutable mapping from function name to opaque
//! source text. Each fragment may declare the functions it calls with a
//! `// requires:` marker line; the resolver expands a requested set of names
//! into the transitive dependency closure in dependency-first order, and the
//! assembler joins the corresponding bodies into one concatenable listing
//! with no missing symbols and no duplicate definitions.
//!
//! The registry is an explicit value: build it once with
//! [`ShaderRegistry::from_categories`], then share it freely. Resolution
//! keeps no state between calls, so a registry behind a shared reference is
//! safe to use from multiple threads.

use thiserror::Error;

/// Joining of resolved fragments into a single source listing.
pub mod assembler;
/// Extraction of structured documentation from fragment comment headers.
pub mod docs;
/// The `// requires:` dependency declaration parser.
pub mod parser;
/// Registry construction and lookup.
pub mod registry;
/// Transitive dependency resolution over the declared-dependency graph.
pub mod resolver;

pub use crate::assembler::{combined_source, SOURCE_SEPARATOR};
pub use crate::docs::{document_entry, FunctionDoc};
pub use crate::parser::{parse_dependencies, REQUIRES_MARKER};
pub use crate::registry::{Category, FunctionDef, FunctionEntry, RegistryError, ShaderRegistry};
pub use crate::resolver::resolve_all;

/// Errors raised while resolving or assembling shader functions.
///
/// All failures are final: there is no retry, fallback substitution, or
/// partial output. The first problem encountered in traversal order is the
/// one reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A requested function name is not present in the registry.
    #[error("unknown shader function '{0}'")]
    UnknownFunction(String),
    /// A declared dependency names a function the registry does not contain.
    #[error("shader function '{dependent}' requires unknown function '{name}'")]
    UnknownDependency {
        /// The missing dependency name.
        name: String,
        /// The function whose declaration references it.
        dependent: String,
    },
    /// The declared-dependency graph contains a cycle.
    ///
    /// A cyclic pair of definitions cannot be ordered so that each precedes
    /// the other, so this is reported rather than emitting a listing that
    /// only compiles if the shading language happens to tolerate the forward
    /// reference.
    #[error("cyclic shader function dependency: {}", .cycle.join(" -> "))]
    CyclicDependency {
        /// Cycle members in walk order, closing edge repeated at the end
        /// (e.g. `["a", "b", "a"]` for `a -> b -> a`).
        cycle: Vec<String>,
    },
}
