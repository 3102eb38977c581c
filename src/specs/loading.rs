//! Loading a spec universe from disk
//!
//! A specs directory holds one subdirectory per collection, one YAML
//! file per spec, named after the spec:
//!
//! ```text
//! specs/
//!   bundles/web.yml
//!   apps/gcweb.yml
//!   apps/gcapi.yml
//!   libs/common.yml
//!   services/postgres.yml
//! ```
//!
//! A missing subdirectory is an empty collection. Everything else in
//! the tree is ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use crate::error::{DockhandError, Result};
use crate::specs::{AppSpec, BundleSpec, LibSpec, ServiceSpec, SpecKind, SpecUniverse};

/// Load a full universe from a specs directory.
///
/// # Errors
///
/// Fails if the directory itself is missing or any spec file does not
/// parse into its collection's record type.
pub fn load_universe(specs_dir: &Path) -> Result<SpecUniverse> {
    if !specs_dir.is_dir() {
        return Err(DockhandError::SpecsDirNotFound {
            path: specs_dir.display().to_string(),
        });
    }

    Ok(SpecUniverse {
        bundles: load_collection::<BundleSpec>(specs_dir, SpecKind::Bundle)?,
        apps: load_collection::<AppSpec>(specs_dir, SpecKind::App)?,
        libs: load_collection::<LibSpec>(specs_dir, SpecKind::Lib)?,
        services: load_collection::<ServiceSpec>(specs_dir, SpecKind::Service)?,
    })
}

fn load_collection<T: DeserializeOwned>(
    specs_dir: &Path,
    kind: SpecKind,
) -> Result<BTreeMap<String, T>> {
    let collection_dir = specs_dir.join(kind.collection());
    let mut collection = BTreeMap::new();

    if !collection_dir.is_dir() {
        return Ok(collection);
    }

    for entry in WalkDir::new(&collection_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| DockhandError::IoError {
            message: format!("failed to scan {}: {}", collection_dir.display(), e),
        })?;
        let path = entry.path();
        if !is_spec_file(path) {
            continue;
        }

        let name = spec_name(path);
        let content =
            std::fs::read_to_string(path).map_err(|e| DockhandError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let spec: T =
            serde_yaml::from_str(&content).map_err(|e| DockhandError::SpecParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        collection.insert(name, spec);
    }

    Ok(collection)
}

fn is_spec_file(path: &Path) -> bool {
    path.is_file()
        && matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml" | "yaml")
        )
}

/// Spec name is the file stem: `apps/gcweb.yml` defines app `gcweb`.
fn spec_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_spec(dir: &Path, collection: &str, name: &str, content: &str) {
        let collection_dir = dir.join(collection);
        std::fs::create_dir_all(&collection_dir).expect("create collection dir");
        std::fs::write(collection_dir.join(format!("{name}.yml")), content)
            .expect("write spec file");
    }

    #[test]
    fn test_load_universe_all_collections() {
        let temp = TempDir::new().expect("temp dir");
        write_spec(temp.path(), "bundles", "web", "apps: [gcweb]\n");
        write_spec(
            temp.path(),
            "apps",
            "gcweb",
            "repo: github.com/gc/web\ndepends:\n  libs: [common]\n",
        );
        write_spec(temp.path(), "libs", "common", "repo: github.com/gc/common\n");
        write_spec(temp.path(), "services", "postgres", "image: postgres:9.4\n");

        let universe = load_universe(temp.path()).expect("should load");
        assert_eq!(universe.bundles["web"].apps, vec!["gcweb"]);
        assert_eq!(universe.apps["gcweb"].repo, "github.com/gc/web");
        assert_eq!(universe.apps["gcweb"].depends.libs, vec!["common"]);
        assert!(universe.libs.contains_key("common"));
        assert!(universe.services.contains_key("postgres"));
    }

    #[test]
    fn test_missing_collection_dir_is_empty() {
        let temp = TempDir::new().expect("temp dir");
        write_spec(temp.path(), "apps", "solo", "repo: github.com/gc/solo\n");

        let universe = load_universe(temp.path()).expect("should load");
        assert!(universe.bundles.is_empty());
        assert!(universe.libs.is_empty());
        assert!(universe.services.is_empty());
        assert_eq!(universe.apps.len(), 1);
    }

    #[test]
    fn test_missing_specs_dir_fails() {
        let temp = TempDir::new().expect("temp dir");
        let result = load_universe(&temp.path().join("nope"));
        assert!(matches!(
            result,
            Err(DockhandError::SpecsDirNotFound { .. })
        ));
    }

    #[test]
    fn test_unparsable_spec_reports_path() {
        let temp = TempDir::new().expect("temp dir");
        write_spec(temp.path(), "apps", "broken", "repo: [not\n");

        let err = load_universe(temp.path()).expect_err("should fail");
        match err {
            DockhandError::SpecParseFailed { path, .. } => assert!(path.contains("broken.yml")),
            other => panic!("expected SpecParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_non_yaml_files_ignored() {
        let temp = TempDir::new().expect("temp dir");
        write_spec(temp.path(), "apps", "gcweb", "repo: github.com/gc/web\n");
        std::fs::write(temp.path().join("apps").join("README.md"), "# notes")
            .expect("write readme");

        let universe = load_universe(temp.path()).expect("should load");
        assert_eq!(universe.apps.len(), 1);
    }
}
