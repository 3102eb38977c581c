//! Transitive dependency closure
//!
//! Given a root spec and a dependency edge kind, compute every name of
//! that kind reachable from the root. Reachability goes through
//! intermediate records of the edge's own kind: an app's lib closure is
//! its declared libs plus everything those libs transitively require.
//!
//! The walk keeps the in-progress path alongside the result set, so a
//! cyclic universe fails with the offending chain instead of recursing
//! without bound. A diamond (two paths to the same dependency) is not a
//! cycle and resolves normally.

use std::collections::BTreeSet;

use crate::error::{DockhandError, Result};
use crate::specs::{SpecKind, SpecUniverse};

/// Which dependency edge a closure follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Apps,
    Libs,
}

impl Edge {
    /// The collection that records reached over this edge live in.
    fn target(self) -> SpecKind {
        match self {
            Edge::Apps => SpecKind::App,
            Edge::Libs => SpecKind::Lib,
        }
    }
}

/// Compute the closure of `edge`-dependents reachable from `root`.
///
/// The root itself is not part of the result.
///
/// # Errors
///
/// `SpecNotFound` if the root or any reached name is absent from its
/// collection; `CircularDependency` if the walk re-enters a record
/// already on the current path.
pub fn dependent_closure(
    universe: &SpecUniverse,
    edge: Edge,
    root_kind: SpecKind,
    root: &str,
) -> Result<BTreeSet<String>> {
    let mut closure = BTreeSet::new();
    let mut path = vec![root.to_string()];
    walk(universe, edge, root_kind, root, &mut closure, &mut path)?;
    Ok(closure)
}

fn walk(
    universe: &SpecUniverse,
    edge: Edge,
    kind: SpecKind,
    name: &str,
    closure: &mut BTreeSet<String>,
    path: &mut Vec<String>,
) -> Result<()> {
    for dep in declared_dependents(universe, kind, name, edge)? {
        if path.iter().any(|seen| seen == dep) {
            let mut chain: Vec<&str> = path.iter().map(String::as_str).collect();
            chain.push(dep);
            return Err(DockhandError::CircularDependency {
                chain: chain.join(" -> "),
            });
        }
        // Already fully walked through another path; a diamond, not a cycle.
        if !closure.insert(dep.clone()) {
            continue;
        }
        path.push(dep.clone());
        walk(universe, edge, edge.target(), dep, closure, path)?;
        path.pop();
    }
    Ok(())
}

/// The names `name` (a record in `kind`'s collection) declares for `edge`.
fn declared_dependents<'a>(
    universe: &'a SpecUniverse,
    kind: SpecKind,
    name: &str,
    edge: Edge,
) -> Result<&'a [String]> {
    const NONE: &[String] = &[];
    match kind {
        SpecKind::App => {
            let app = universe
                .apps
                .get(name)
                .ok_or_else(|| missing(SpecKind::App, name))?;
            Ok(match edge {
                Edge::Apps => &app.depends.apps,
                Edge::Libs => &app.depends.libs,
            })
        }
        SpecKind::Lib => {
            let lib = universe
                .libs
                .get(name)
                .ok_or_else(|| missing(SpecKind::Lib, name))?;
            Ok(match edge {
                Edge::Libs => &lib.depends.libs,
                Edge::Apps => NONE,
            })
        }
        SpecKind::Bundle | SpecKind::Service => Ok(NONE),
    }
}

fn missing(kind: SpecKind, name: &str) -> DockhandError {
    DockhandError::SpecNotFound {
        collection: kind.collection(),
        name: name.to_string(),
    }
}
