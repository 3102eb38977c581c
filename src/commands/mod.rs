//! Command implementations
//!
//! Each submodule implements one CLI command. Commands do the I/O the
//! core refuses to: load config and specs, call the resolver/compiler,
//! and write results to the terminal or back to the config file.

pub mod bundles;
pub mod completions;
pub mod helpers;
pub mod ports;
pub mod repos;
pub mod specs;
