//! Repos command implementation
//!
//! Lists the repos a spec selection touches and records local source
//! overrides. Dockhand never fetches anything; the override table only
//! changes which path the sync tooling is told to use.

use std::path::PathBuf;

use crate::cli::{ReposArgs, ReposSubcommand};
use crate::commands::helpers;
use crate::error::{DockhandError, Result};
use crate::resolver::repos::{all_repos, repos_for_app_or_lib};
use crate::resolver::{assembled_universe, expanded_libs_universe};
use crate::source::Repo;
use crate::ui;

/// Run repos command
pub fn run(config: Option<PathBuf>, specs_dir: Option<PathBuf>, args: ReposArgs) -> Result<()> {
    let (mut config, config_path) = helpers::load_config(config)?;
    let universe = helpers::load_universe(specs_dir, &config)?;

    match args.subcommand {
        ReposSubcommand::List { for_name, active } => {
            let repos = if let Some(name) = for_name {
                let expanded = expanded_libs_universe(universe)?;
                repos_for_app_or_lib(&expanded, &name)?
            } else if active {
                let assembled = assembled_universe(universe, &config.bundles)?;
                all_repos(&assembled, helpers::specs_repo(&config).as_ref())
            } else {
                all_repos(&universe, helpers::specs_repo(&config).as_ref())
            };
            let repos: Vec<Repo> = repos.into_iter().collect();
            ui::display_repos(&repos, &config);
            Ok(())
        }
        ReposSubcommand::Override { repo, path } => {
            let repos = all_repos(&universe, helpers::specs_repo(&config).as_ref());
            let repo = Repo::resolve(&repos, &repo)?;
            if !path.exists() {
                return Err(DockhandError::OverridePathNotFound {
                    path: path.display().to_string(),
                });
            }
            config
                .repo_overrides
                .insert(repo.remote_path().to_string(), path.clone());
            config.save(&config_path)?;
            println!(
                "Locally overriding repo {} to use source at {}",
                repo,
                path.display()
            );
            Ok(())
        }
        ReposSubcommand::Manage { repo } => {
            let repos = all_repos(&universe, helpers::specs_repo(&config).as_ref());
            let repo = Repo::resolve(&repos, &repo)?;
            config.repo_overrides.remove(repo.remote_path());
            config.save(&config_path)?;
            println!("Will manage repo {repo} with the Dockhand-managed copy of source");
            Ok(())
        }
    }
}
