//! Source repository identity
//!
//! Apps and libs reference the repository their code lives in. Dockhand
//! never clones or syncs anything itself; it only computes which repos a
//! selection of specs touches and hands the set to whatever does the
//! fetching. Two specs naming the same remote resolve to one `Repo`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{DockhandError, Result};

/// A repository referenced by an app or lib spec.
///
/// Identity is the remote path; `Repo` values hash, compare and
/// serialize as that single string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Repo {
    remote_path: String,
}

impl Repo {
    pub fn new(remote_path: impl Into<String>) -> Self {
        let remote_path = remote_path.into().trim_end_matches('/').to_string();
        Repo { remote_path }
    }

    pub fn remote_path(&self) -> &str {
        &self.remote_path
    }

    /// Short name: the last path segment of the remote, without a
    /// trailing `.git`.
    pub fn short_name(&self) -> &str {
        let base = self
            .remote_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.remote_path);
        base.strip_suffix(".git").unwrap_or(base)
    }

    /// Resolve user input to one repo from a known set.
    ///
    /// Accepts either a full remote path or a short name. A short name
    /// matching more than one repo is an error, as is input matching
    /// nothing.
    pub fn resolve(repos: &BTreeSet<Repo>, name: &str) -> Result<Repo> {
        let trimmed = name.trim_end_matches('/');
        if let Some(repo) = repos.iter().find(|r| r.remote_path == trimmed) {
            return Ok(repo.clone());
        }

        let matches: Vec<&Repo> = repos.iter().filter(|r| r.short_name() == trimmed).collect();
        match matches.as_slice() {
            [] => Err(DockhandError::RepoNotFound {
                name: name.to_string(),
            }),
            [repo] => Ok((*repo).clone()),
            many => Err(DockhandError::AmbiguousRepoName {
                name: name.to_string(),
                matches: many
                    .iter()
                    .map(|r| r.remote_path.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl std::fmt::Display for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.remote_path)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn repo_set(remotes: &[&str]) -> BTreeSet<Repo> {
        remotes.iter().copied().map(Repo::new).collect()
    }

    #[test]
    fn test_short_name() {
        assert_eq!(Repo::new("github.com/gc/web").short_name(), "web");
        assert_eq!(Repo::new("github.com/gc/web.git").short_name(), "web");
        assert_eq!(Repo::new("local-repo").short_name(), "local-repo");
    }

    #[test]
    fn test_identity_ignores_trailing_slash() {
        assert_eq!(Repo::new("github.com/gc/web/"), Repo::new("github.com/gc/web"));
    }

    #[test]
    fn test_resolve_by_full_name() {
        let repos = repo_set(&["github.com/gc/web", "github.com/gc/api"]);
        let repo = Repo::resolve(&repos, "github.com/gc/api").expect("should resolve");
        assert_eq!(repo.remote_path(), "github.com/gc/api");
    }

    #[test]
    fn test_resolve_by_short_name() {
        let repos = repo_set(&["github.com/gc/web", "github.com/gc/api"]);
        let repo = Repo::resolve(&repos, "web").expect("should resolve");
        assert_eq!(repo.remote_path(), "github.com/gc/web");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let repos = repo_set(&["github.com/gc/web"]);
        let result = Repo::resolve(&repos, "nope");
        assert!(matches!(result, Err(DockhandError::RepoNotFound { .. })));
    }

    #[test]
    fn test_resolve_ambiguous_short_name() {
        let repos = repo_set(&["github.com/gc/web", "bitbucket.org/other/web"]);
        let result = Repo::resolve(&repos, "web");
        assert!(matches!(
            result,
            Err(DockhandError::AmbiguousRepoName { .. })
        ));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let yaml = serde_yaml::to_string(&Repo::new("github.com/gc/web")).expect("serialize");
        assert_eq!(yaml.trim(), "github.com/gc/web");
    }
}
