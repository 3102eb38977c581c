//! Ports command implementation
//!
//! Assembles the active universe and prints the compiled port spec
//! document. Output goes to stdout unstyled so the renderers (or a
//! shell pipeline) can consume it directly.

use std::path::PathBuf;

use crate::cli::PortsArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::ports::compile_port_spec;
use crate::resolver::assembled_universe;

/// Run ports command
pub fn run(config: Option<PathBuf>, specs_dir: Option<PathBuf>, args: PortsArgs) -> Result<()> {
    let (config, _) = helpers::load_config(config)?;
    let universe = helpers::load_universe(specs_dir, &config)?;

    let assembled = assembled_universe(universe, &config.bundles)?;
    let port_spec = compile_port_spec(&assembled.apps, &config.boot2docker_ip)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&port_spec)?);
    } else {
        print!("{}", serde_yaml::to_string(&port_spec)?);
    }
    Ok(())
}
