//! Registry of named shader function fragments.
//!
//! The registry is built once by merging per-category definition tables into
//! a single flat namespace, and is read-only afterwards. Declared
//! dependencies are parsed from each fragment a single time during
//! construction and cached on the entry, so resolution never re-scans source
//! text.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use crate::docs::{self, FunctionDoc};
use crate::parser;
use crate::{assembler, resolver, ResolveError};

/// One row of a category definition table: a function name and its source
/// text, typically embedded with `include_str!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDef {
    /// Unique function name, case-sensitive across the whole registry.
    pub name: &'static str,
    /// Opaque source text. May contain a `// requires:` marker line near the
    /// top declaring the functions it calls.
    pub source: &'static str,
}

/// A named group of function definitions (e.g. `"noise"`, `"color"`).
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Category name, used in diagnostics and documentation output.
    pub name: &'static str,
    /// The functions this category defines.
    pub functions: &'static [FunctionDef],
}

/// Errors raised while constructing a [`ShaderRegistry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two categories define the same function name. Construction fails fast
    /// rather than letting one definition silently shadow the other.
    #[error(
        "duplicate shader function '{name}': defined in category '{first}' and again in category '{second}'"
    )]
    DuplicateName {
        /// The colliding function name.
        name: String,
        /// Category that registered the name first.
        first: String,
        /// Category that attempted to register it again.
        second: String,
    },
}

/// A registered shader function: source text plus metadata cached at
/// construction time.
#[derive(Debug, Clone)]
pub struct FunctionEntry {
    name: &'static str,
    category: &'static str,
    source: &'static str,
    dependencies: Vec<String>,
}

impl FunctionEntry {
    /// The function's unique name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The category the function was registered under.
    pub fn category(&self) -> &str {
        self.category
    }

    /// The raw source text, including any `// requires:` marker line.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Names of the functions this entry directly depends on, in declared
    /// order. Transitive dependencies are derived by the resolver, never
    /// stored.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Immutable mapping from function name to [`FunctionEntry`].
#[derive(Debug, Clone)]
pub struct ShaderRegistry {
    entries: HashMap<&'static str, FunctionEntry>,
    /// Registration order, kept for deterministic enumeration.
    order: Vec<&'static str>,
}

impl ShaderRegistry {
    /// Builds a registry by merging category definition tables into one flat
    /// namespace.
    ///
    /// Each fragment's dependency declaration is parsed exactly once here.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if two categories (or one
    /// category twice) define the same function name.
    pub fn from_categories(categories: &[Category]) -> Result<Self, RegistryError> {
        let mut entries = HashMap::new();
        let mut order = Vec::new();

        for category in categories {
            for def in category.functions {
                let entry = FunctionEntry {
                    name: def.name,
                    category: category.name,
                    source: def.source,
                    dependencies: parser::parse_dependencies(def.source),
                };
                match entries.entry(def.name) {
                    Entry::Occupied(existing) => {
                        let first: &FunctionEntry = existing.get();
                        return Err(RegistryError::DuplicateName {
                            name: def.name.to_owned(),
                            first: first.category.to_owned(),
                            second: category.name.to_owned(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(entry);
                        order.push(def.name);
                    }
                }
            }
        }

        log::debug!(
            "shader registry built: {} functions across {} categories",
            order.len(),
            categories.len()
        );
        Ok(Self { entries, order })
    }

    /// Looks up a function by name.
    pub fn lookup(&self, name: &str) -> Option<&FunctionEntry> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Raw source text of a single function, without dependency expansion.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownFunction`] if `name` is not registered.
    pub fn source(&self, name: &str) -> Result<&'static str, ResolveError> {
        self.lookup(name)
            .map(FunctionEntry::source)
            .ok_or_else(|| ResolveError::UnknownFunction(name.to_owned()))
    }

    /// Iterates registered function names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no functions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes the ordered transitive dependency closure for `requested`.
    ///
    /// See [`resolver::resolve_all`] for ordering guarantees and errors.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError`] from the resolver.
    pub fn resolve_dependencies(&self, requested: &[&str]) -> Result<Vec<String>, ResolveError> {
        resolver::resolve_all(self, requested)
    }

    /// Assembles the full, dependency-ordered source listing for `requested`.
    ///
    /// See [`assembler::combined_source`] for the output contract.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError`] from resolution and lookup.
    pub fn combined_source(&self, requested: &[&str]) -> Result<String, ResolveError> {
        assembler::combined_source(self, requested)
    }

    /// Extracts documentation for every registered function, in registration
    /// order.
    pub fn documentation(&self) -> Vec<FunctionDoc> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name))
            .map(docs::document_entry)
            .collect()
    }
}
