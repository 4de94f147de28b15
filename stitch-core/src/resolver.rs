//! Transitive dependency resolution over the declared-dependency graph.
//!
//! The graph is implicit: nodes are function names, edges are the dependency
//! lists cached on each registry entry. Nothing is persisted — every call
//! derives the closure it needs and discards it.

use std::collections::{HashMap, HashSet};

use crate::registry::{FunctionEntry, ShaderRegistry};
use crate::ResolveError;

/// Computes the ordered transitive dependency closure for `requested`.
///
/// Walks depth-first per requested name, in request order, with visited
/// state shared across the whole call so a dependency common to several
/// requested functions expands exactly once. Each dependency's own
/// dependencies recurse (in declared order) before its name is appended,
/// which yields dependency-first ordering; global order is by first
/// occurrence.
///
/// The returned list holds dependency names only. A requested name shows up
/// in it when — and only when — some other walked function depends on it, so
/// assembly keeps the dependency-before-dependent guarantee regardless of
/// request order.
///
/// # Errors
///
/// * [`ResolveError::UnknownFunction`] — a requested name is not registered.
/// * [`ResolveError::UnknownDependency`] — a declared dependency is not
///   registered; the error names both the missing function and its
///   dependent.
/// * [`ResolveError::CyclicDependency`] — the walk re-entered a name that is
///   still being expanded; the error lists the cycle members in walk order.
pub fn resolve_all(
    registry: &ShaderRegistry,
    requested: &[&str],
) -> Result<Vec<String>, ResolveError> {
    let mut walk = Walk {
        registry,
        states: HashMap::new(),
        path: Vec::new(),
        emitted: HashSet::new(),
        order: Vec::new(),
    };

    for &name in requested {
        let entry = registry
            .lookup(name)
            .ok_or_else(|| ResolveError::UnknownFunction(name.to_owned()))?;
        // Requested roots expand but are not emitted themselves; they only
        // enter the list if another function pulls them in as a dependency.
        walk.visit(entry, false)?;
    }

    log::trace!(
        "resolved {} dependencies for {} requested functions",
        walk.order.len(),
        requested.len()
    );
    Ok(walk.order)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the current DFS path; seeing it again means a cycle.
    InProgress,
    /// Fully expanded; re-encounters contribute no further expansion.
    Done,
}

struct Walk<'r> {
    registry: &'r ShaderRegistry,
    states: HashMap<&'r str, VisitState>,
    /// Current DFS chain, kept for cycle reporting.
    path: Vec<&'r str>,
    emitted: HashSet<&'r str>,
    order: Vec<String>,
}

impl<'r> Walk<'r> {
    fn visit(&mut self, entry: &'r FunctionEntry, emit: bool) -> Result<(), ResolveError> {
        let name = entry.name();
        match self.states.get(name) {
            Some(VisitState::Done) => {
                // Already expanded elsewhere, but an already-expanded root
                // still has to be emitted once something depends on it.
                if emit {
                    self.emit(name);
                }
                return Ok(());
            }
            Some(VisitState::InProgress) => {
                return Err(self.cycle_from(name));
            }
            None => {}
        }

        self.states.insert(name, VisitState::InProgress);
        self.path.push(name);
        for dep in entry.dependencies() {
            let dep_entry =
                self.registry
                    .lookup(dep)
                    .ok_or_else(|| ResolveError::UnknownDependency {
                        name: dep.clone(),
                        dependent: name.to_owned(),
                    })?;
            self.visit(dep_entry, true)?;
        }
        self.path.pop();
        self.states.insert(name, VisitState::Done);

        if emit {
            self.emit(name);
        }
        Ok(())
    }

    fn emit(&mut self, name: &'r str) {
        if self.emitted.insert(name) {
            self.order.push(name.to_owned());
        }
    }

    fn cycle_from(&self, name: &str) -> ResolveError {
        let start = self.path.iter().position(|&n| n == name).unwrap_or(0);
        let mut cycle: Vec<String> = self.path[start..].iter().map(|&n| n.to_owned()).collect();
        cycle.push(name.to_owned());
        ResolveError::CyclicDependency { cycle }
    }
}
