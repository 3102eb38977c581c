//! Repo queries over a spec universe
//!
//! These answer "which repositories does this selection touch" for the
//! sync tooling. The dependent query is one non-recursive union: it
//! expects a universe whose `depends.libs` fields have already been
//! expanded (see [`crate::resolver::expanded_libs_universe`]), so the
//! direct lists already carry the transitive lib set.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::source::Repo;
use crate::specs::SpecUniverse;

/// The repo one app or lib lives in.
pub fn repo_of_app_or_lib(universe: &SpecUniverse, name: &str) -> Result<Repo> {
    Ok(Repo::new(universe.app_or_lib(name)?.repo()))
}

/// Repos for one app or lib: its own plus those of every app and lib
/// it depends on.
///
/// # Errors
///
/// Fails if `name`, or any name it depends on, is neither an app nor a
/// lib.
pub fn repos_for_app_or_lib(universe: &SpecUniverse, name: &str) -> Result<BTreeSet<Repo>> {
    let spec = universe.app_or_lib(name)?;
    let mut repos = BTreeSet::new();
    repos.insert(Repo::new(spec.repo()));
    for dependent in spec.dependent_names() {
        repos.insert(repo_of_app_or_lib(universe, dependent)?);
    }
    Ok(repos)
}

/// Every distinct repo referenced by any app or lib, plus the specs
/// repo when one is designated.
///
/// Callers wanting only the active subset pass an assembled universe.
pub fn all_repos(universe: &SpecUniverse, specs_repo: Option<&Repo>) -> BTreeSet<Repo> {
    let mut repos: BTreeSet<Repo> = universe
        .apps_and_libs()
        .map(|spec| Repo::new(spec.repo()))
        .collect();
    if let Some(specs_repo) = specs_repo {
        repos.insert(specs_repo.clone());
    }
    repos
}
