use clap::Args;

/// Arguments for the ports command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Compile the port document for the active bundles:\n    dockhand ports\n\n\
                   Same document as JSON:\n    dockhand ports --json")]
pub struct PortsArgs {
    /// Emit JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}
