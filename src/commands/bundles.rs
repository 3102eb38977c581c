//! Bundles command implementation
//!
//! Lists bundles and persists activation changes. Activation is
//! validated against the universe so a typo fails here instead of
//! silently selecting nothing at resolution time.

use std::path::PathBuf;

use console::Style;

use crate::cli::{BundlesArgs, BundlesSubcommand};
use crate::commands::helpers;
use crate::error::{DockhandError, Result};
use crate::specs::SpecKind;
use crate::ui;

/// Run bundles command
pub fn run(config: Option<PathBuf>, specs_dir: Option<PathBuf>, args: BundlesArgs) -> Result<()> {
    let (mut config, config_path) = helpers::load_config(config)?;

    match args.subcommand {
        BundlesSubcommand::List => {
            let universe = helpers::load_universe(specs_dir, &config)?;
            ui::display_bundles(universe.bundles.iter(), &config.bundles);
            Ok(())
        }
        BundlesSubcommand::Activate { names } => {
            let universe = helpers::load_universe(specs_dir, &config)?;
            for name in &names {
                if !universe.bundles.contains_key(name) {
                    return Err(DockhandError::SpecNotFound {
                        collection: SpecKind::Bundle.collection(),
                        name: name.clone(),
                    });
                }
            }
            config.activate_bundles(&names);
            config.save(&config_path)?;
            println!(
                "Activated {}. Active bundles: {}",
                Style::new().bold().apply_to(names.join(", ")),
                config.bundles.join(", ")
            );
            Ok(())
        }
        BundlesSubcommand::Deactivate { names } => {
            config.deactivate_bundles(&names);
            config.save(&config_path)?;
            if config.bundles.is_empty() {
                println!(
                    "Deactivated {}. No bundles active.",
                    Style::new().bold().apply_to(names.join(", "))
                );
            } else {
                println!(
                    "Deactivated {}. Active bundles: {}",
                    Style::new().bold().apply_to(names.join(", ")),
                    config.bundles.join(", ")
                );
            }
            Ok(())
        }
    }
}
