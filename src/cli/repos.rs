use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the repos command
#[derive(Args, Debug)]
pub struct ReposArgs {
    #[command(subcommand)]
    pub subcommand: ReposSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReposSubcommand {
    /// List repos referenced by the specs
    List {
        /// Only repos needed by one app or lib (and its dependents)
        #[arg(long = "for", value_name = "APP_OR_LIB")]
        for_name: Option<String>,

        /// Only repos in the currently active bundle selection
        #[arg(long)]
        active: bool,
    },

    /// Use a local checkout for a repo instead of the managed copy
    Override {
        /// Repo, by full remote path or short name
        repo: String,

        /// Local source path to use
        path: PathBuf,
    },

    /// Return a repo to the managed copy, clearing any override
    Manage {
        /// Repo, by full remote path or short name
        repo: String,
    },
}
