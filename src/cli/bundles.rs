use clap::{Args, Subcommand};

/// Arguments for the bundles command
#[derive(Args, Debug)]
pub struct BundlesArgs {
    #[command(subcommand)]
    pub subcommand: BundlesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BundlesSubcommand {
    /// List bundles with their apps and activation state
    List,

    /// Activate bundles (added to the persisted activated set)
    Activate {
        /// Bundle names to activate
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Deactivate bundles
    Deactivate {
        /// Bundle names to deactivate
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::super::{Cli, Commands};
    use super::*;
    use clap::Parser;

    #[test]
    fn test_bundles_list_parses() {
        let cli = Cli::try_parse_from(["dockhand", "bundles", "list"]).expect("should parse");
        match cli.command {
            Commands::Bundles(BundlesArgs {
                subcommand: BundlesSubcommand::List,
            }) => {}
            _ => panic!("Expected bundles list"),
        }
    }

    #[test]
    fn test_bundles_activate_requires_names() {
        assert!(Cli::try_parse_from(["dockhand", "bundles", "activate"]).is_err());
    }

    #[test]
    fn test_bundles_deactivate_parses() {
        let cli = Cli::try_parse_from(["dockhand", "bundles", "deactivate", "web"])
            .expect("should parse");
        match cli.command {
            Commands::Bundles(BundlesArgs {
                subcommand: BundlesSubcommand::Deactivate { names },
            }) => assert_eq!(names, vec!["web"]),
            _ => panic!("Expected bundles deactivate"),
        }
    }
}
