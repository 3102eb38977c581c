//! Spec resolution: closures, active-set filtering, repo queries
//!
//! The resolver turns the full spec universe plus the user's activated
//! bundles into the assembled universe every other part of Dockhand
//! works from. It owns the universe it is given and returns a new one;
//! nothing here reads ambient state.
//!
//! The cascade runs in a fixed order because each stage's notion of
//! "active" depends on the survivors of the stage before it:
//! bundles, then apps, then libs, then services.

pub mod closure;
pub mod repos;

use std::collections::{BTreeMap, BTreeSet};

pub use closure::{Edge, dependent_closure};

use crate::error::{DockhandError, Result};
use crate::specs::{SpecKind, SpecUniverse};

/// Filter and expand a universe down to what the activated bundles need.
///
/// 1. Keep only activated bundles (each must exist).
/// 2. Active apps: each bundle app plus its transitive app closure.
/// 3. Prune apps, then rewrite each survivor's `depends.libs` to its
///    full transitive lib closure.
/// 4. Prune libs to the expanded union, prune services to what the
///    surviving apps reference.
///
/// Re-running on an already assembled universe with the same activated
/// set is a fixed point.
///
/// # Errors
///
/// Any reference to a name absent from its collection aborts the whole
/// resolution; a partially filtered universe is never returned.
pub fn assembled_universe(
    mut universe: SpecUniverse,
    activated_bundles: &[String],
) -> Result<SpecUniverse> {
    let activated: BTreeSet<&str> = activated_bundles.iter().map(String::as_str).collect();
    for name in &activated {
        if !universe.bundles.contains_key(*name) {
            return Err(DockhandError::SpecNotFound {
                collection: SpecKind::Bundle.collection(),
                name: (*name).to_string(),
            });
        }
    }
    universe
        .bundles
        .retain(|name, _| activated.contains(name.as_str()));

    let mut active_apps = BTreeSet::new();
    for bundle in universe.bundles.values() {
        for app_name in &bundle.apps {
            active_apps.insert(app_name.clone());
            active_apps.extend(dependent_closure(
                &universe,
                Edge::Apps,
                SpecKind::App,
                app_name,
            )?);
        }
    }
    universe.apps.retain(|name, _| active_apps.contains(name));

    expand_libs_in_apps(&mut universe)?;

    let active_libs: BTreeSet<String> = universe
        .apps
        .values()
        .flat_map(|app| app.depends.libs.iter().cloned())
        .collect();
    universe.libs.retain(|name, _| active_libs.contains(name));

    let mut active_services = BTreeSet::new();
    for app in universe.apps.values() {
        for service in &app.depends.services {
            if !universe.services.contains_key(service) {
                return Err(DockhandError::SpecNotFound {
                    collection: SpecKind::Service.collection(),
                    name: service.clone(),
                });
            }
            active_services.insert(service.clone());
        }
    }
    universe
        .services
        .retain(|name, _| active_services.contains(name));

    Ok(universe)
}

/// Expand `depends.libs` for every app and every lib, without pruning.
///
/// Used by flows that must see apps outside the active bundle
/// selection (testing, repo queries) with fully expanded lib sets.
pub fn expanded_libs_universe(mut universe: SpecUniverse) -> Result<SpecUniverse> {
    expand_libs_in_apps(&mut universe)?;
    expand_libs_in_libs(&mut universe)?;
    Ok(universe)
}

/// Containers a selection brings up: one per app plus one per service.
pub fn expected_container_count(universe: &SpecUniverse) -> usize {
    universe.apps.len() + universe.services.len()
}

/// Rewrite each app's declared libs to the transitive closure, sorted.
///
/// The one place the resolver mutates spec records.
fn expand_libs_in_apps(universe: &mut SpecUniverse) -> Result<()> {
    let mut expanded = BTreeMap::new();
    for name in universe.apps.keys() {
        let libs = dependent_closure(universe, Edge::Libs, SpecKind::App, name)?;
        expanded.insert(name.clone(), libs.into_iter().collect::<Vec<_>>());
    }
    for (name, libs) in expanded {
        if let Some(app) = universe.apps.get_mut(&name) {
            app.depends.libs = libs;
        }
    }
    Ok(())
}

fn expand_libs_in_libs(universe: &mut SpecUniverse) -> Result<()> {
    let mut expanded = BTreeMap::new();
    for name in universe.libs.keys() {
        let libs = dependent_closure(universe, Edge::Libs, SpecKind::Lib, name)?;
        expanded.insert(name.clone(), libs.into_iter().collect::<Vec<_>>());
    }
    for (name, libs) in expanded {
        if let Some(lib) = universe.libs.get_mut(&name) {
            lib.depends.libs = libs;
        }
    }
    Ok(())
}
