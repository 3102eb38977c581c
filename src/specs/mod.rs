//! Typed specification model
//!
//! A Dockhand universe is four named collections of specs: `bundles`
//! (named groups of apps a developer switches on together), `apps`
//! (containerized processes with their own repo), `libs` (shared source
//! checked out next to the apps that use it) and `services` (backing
//! containers like databases, passed through to the compose renderer
//! untouched).
//!
//! Names are unique within a collection; collections are independent
//! namespaces. Lookups are collection-scoped except for
//! [`SpecUniverse::app_or_lib`], which checks apps before libs.
//!
//! Records are plain serde structs: schema validation happens at parse
//! time, and nothing here mutates a spec after loading except the
//! resolver's one-time lib expansion.

pub mod loading;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DockhandError, Result};

/// The four spec collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Bundle,
    App,
    Lib,
    Service,
}

impl SpecKind {
    /// Collection name as it appears on disk and in error messages.
    pub fn collection(self) -> &'static str {
        match self {
            SpecKind::Bundle => "bundles",
            SpecKind::App => "apps",
            SpecKind::Lib => "libs",
            SpecKind::Service => "services",
        }
    }
}

impl std::fmt::Display for SpecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}

/// Dependency declarations carried by an app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Depends {
    pub apps: Vec<String>,
    pub libs: Vec<String>,
    pub services: Vec<String>,
}

/// Dependency declarations carried by a lib. Libs only depend on libs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibDepends {
    pub libs: Vec<String>,
}

/// One host forwarding rule of an app: requests for
/// `host_name:host_port` on the developer's machine reach
/// `container_port` inside the app's container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostForwarding {
    pub host_name: String,
    pub host_port: u16,
    pub container_port: u16,
}

/// A named group of apps activated together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub apps: Vec<String>,
}

/// A containerized application with its own source repo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSpec {
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount: Option<String>,
    pub depends: Depends,
    pub host_forwarding: Vec<HostForwarding>,
}

/// Shared source mounted into the apps that depend on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibSpec {
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount: Option<String>,
    pub depends: LibDepends,
}

/// A backing service. Services are schema-free: the document is an
/// opaque compose fragment handed to the renderer as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceSpec {
    pub document: serde_yaml::Value,
}

/// An app-or-lib lookup result.
#[derive(Debug, Clone, Copy)]
pub enum AppOrLib<'a> {
    App(&'a AppSpec),
    Lib(&'a LibSpec),
}

impl AppOrLib<'_> {
    pub fn repo(&self) -> &str {
        match self {
            AppOrLib::App(app) => &app.repo,
            AppOrLib::Lib(lib) => &lib.repo,
        }
    }

    /// Names of the apps and libs this record directly depends on.
    ///
    /// One level only: on a universe whose `depends.libs` fields have
    /// been expanded this already covers the transitive lib set.
    pub fn dependent_names(&self) -> Vec<&str> {
        match self {
            AppOrLib::App(app) => app
                .depends
                .apps
                .iter()
                .chain(app.depends.libs.iter())
                .map(String::as_str)
                .collect(),
            AppOrLib::Lib(lib) => lib.depends.libs.iter().map(String::as_str).collect(),
        }
    }
}

/// The full spec universe for one run.
///
/// `BTreeMap` keeps every iteration in ascending name order, which the
/// port compiler and the YAML output rely on for determinism.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpecUniverse {
    pub bundles: BTreeMap<String, BundleSpec>,
    pub apps: BTreeMap<String, AppSpec>,
    pub libs: BTreeMap<String, LibSpec>,
    pub services: BTreeMap<String, ServiceSpec>,
}

impl SpecUniverse {
    /// Combined app-or-lib lookup: apps first, then libs.
    pub fn app_or_lib(&self, name: &str) -> Result<AppOrLib<'_>> {
        if let Some(app) = self.apps.get(name) {
            return Ok(AppOrLib::App(app));
        }
        if let Some(lib) = self.libs.get(name) {
            return Ok(AppOrLib::Lib(lib));
        }
        Err(DockhandError::AppOrLibNotFound {
            name: name.to_string(),
        })
    }

    /// Every app and lib in the universe, apps first.
    pub fn apps_and_libs(&self) -> impl Iterator<Item = AppOrLib<'_>> {
        self.apps
            .values()
            .map(AppOrLib::App)
            .chain(self.libs.values().map(AppOrLib::Lib))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) mod test_support {
    use super::*;

    pub fn app(repo: &str, depends: Depends, host_forwarding: Vec<HostForwarding>) -> AppSpec {
        AppSpec {
            repo: repo.to_string(),
            image: None,
            mount: None,
            depends,
            host_forwarding,
        }
    }

    pub fn depends(apps: &[&str], libs: &[&str], services: &[&str]) -> Depends {
        Depends {
            apps: apps.iter().map(ToString::to_string).collect(),
            libs: libs.iter().map(ToString::to_string).collect(),
            services: services.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn lib(repo: &str, libs: &[&str]) -> LibSpec {
        LibSpec {
            repo: repo.to_string(),
            mount: None,
            depends: LibDepends {
                libs: libs.iter().map(ToString::to_string).collect(),
            },
        }
    }

    pub fn bundle(apps: &[&str]) -> BundleSpec {
        BundleSpec {
            description: None,
            apps: apps.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn forwarding(host_name: &str, host_port: u16, container_port: u16) -> HostForwarding {
        HostForwarding {
            host_name: host_name.to_string(),
            host_port,
            container_port,
        }
    }

    pub fn service() -> ServiceSpec {
        ServiceSpec::default()
    }
}
