//! Specs command implementation
//!
//! Prints the resolved universe as YAML: either the assembled (active,
//! pruned) set or the full universe with lib dependencies expanded.

use std::path::PathBuf;

use crate::cli::{SpecsArgs, SpecsSubcommand};
use crate::commands::helpers;
use crate::error::Result;
use crate::resolver::{assembled_universe, expanded_libs_universe, expected_container_count};
use crate::ui;

/// Run specs command
pub fn run(config: Option<PathBuf>, specs_dir: Option<PathBuf>, args: SpecsArgs) -> Result<()> {
    let (config, _) = helpers::load_config(config)?;
    let universe = helpers::load_universe(specs_dir, &config)?;

    match args.subcommand {
        SpecsSubcommand::Assembled => {
            let assembled = assembled_universe(universe, &config.bundles)?;
            print!("{}", serde_yaml::to_string(&assembled)?);
            ui::note(&format!(
                "{} containers expected for this selection",
                expected_container_count(&assembled)
            ));
        }
        SpecsSubcommand::Expanded => {
            let expanded = expanded_libs_universe(universe)?;
            print!("{}", serde_yaml::to_string(&expanded)?);
        }
    }
    Ok(())
}
