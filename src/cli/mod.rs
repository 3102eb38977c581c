//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument
//! types:
//! - bundles: Bundle activation arguments
//! - repos: Repo listing and override arguments
//! - ports: Port spec compilation arguments
//! - specs: Assembled/expanded universe arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundles;
pub mod completions;
pub mod ports;
pub mod repos;
pub mod specs;

pub use bundles::{BundlesArgs, BundlesSubcommand};
pub use completions::CompletionsArgs;
pub use ports::PortsArgs;
pub use repos::{ReposArgs, ReposSubcommand};
pub use specs::{SpecsArgs, SpecsSubcommand};

/// Dockhand - local Docker development environments
///
/// Resolve declarative bundle/app/lib/service specs into the active set
/// and the port assignments the renderers consume.
#[derive(Parser, Debug)]
#[command(
    name = "dockhand",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Local Docker development environments from declarative specs",
    long_about = "Dockhand reads a directory of bundle, app, lib and service specs, \
                  resolves which of them the activated bundles need, and compiles a \
                  deterministic host-port assignment for the docker-compose, nginx and \
                  hosts-file renderers.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dockhand bundles list                \x1b[90m# Show bundles and activation\x1b[0m\n   \
                  dockhand bundles activate web api    \x1b[90m# Switch bundles on\x1b[0m\n   \
                  dockhand ports                       \x1b[90m# Compile the port spec document\x1b[0m\n   \
                  dockhand repos list                  \x1b[90m# Every repo the specs reference\x1b[0m\n   \
                  dockhand specs assembled             \x1b[90m# Print the active spec set\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "DOCKHAND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Specs directory (overrides specs_path from the config file)
    #[arg(long = "specs-dir", global = true, env = "DOCKHAND_SPECS_DIR")]
    pub specs_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or change which bundles are activated
    Bundles(BundlesArgs),

    /// List referenced repos and manage local overrides
    Repos(ReposArgs),

    /// Compile the port spec document for the active bundles
    Ports(PortsArgs),

    /// Print the resolved spec universe
    Specs(SpecsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
