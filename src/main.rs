//! Dockhand - local Docker development environments
//!
//! Resolves a declarative universe of bundle, app, lib and service
//! specs into the set the activated bundles need, and compiles a
//! deterministic host-port assignment consumed by the docker-compose,
//! nginx and hosts-file renderers.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod ports;
mod resolver;
mod source;
mod specs;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bundles(args) => commands::bundles::run(cli.config, cli.specs_dir, args),
        Commands::Repos(args) => commands::repos::run(cli.config, cli.specs_dir, args),
        Commands::Ports(args) => commands::ports::run(cli.config, cli.specs_dir, args),
        Commands::Specs(args) => commands::specs::run(cli.config, cli.specs_dir, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
