use clap::{Args, Subcommand};

/// Arguments for the specs command
#[derive(Args, Debug)]
pub struct SpecsArgs {
    #[command(subcommand)]
    pub subcommand: SpecsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SpecsSubcommand {
    /// The active universe: pruned to the activated bundles, libs expanded
    Assembled,

    /// Every spec with lib dependencies expanded, nothing pruned
    Expanded,
}
