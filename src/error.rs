//! Error types and handling for Dockhand
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every error here is terminal for the resolution or compilation run that
//! raised it: no partial universe or partial port document is ever returned.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Dockhand operations
#[derive(Error, Diagnostic, Debug)]
pub enum DockhandError {
    // Spec resolution errors
    #[error("{collection} spec '{name}' was referenced but not found")]
    #[diagnostic(
        code(dockhand::specs::not_found),
        help("Check the name in the referencing spec against the files in your specs directory")
    )]
    SpecNotFound {
        collection: &'static str,
        name: String,
    },

    #[error("no app or lib named '{name}'")]
    #[diagnostic(
        code(dockhand::specs::app_or_lib_not_found),
        help("The name must match a spec in either the apps or the libs collection")
    )]
    AppOrLibNotFound { name: String },

    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(dockhand::specs::circular),
        help("Remove the dependency cycle from your specs")
    )]
    CircularDependency { chain: String },

    // Port allocation errors
    #[error(
        "host address {host_address}:{host_port} is forwarded by both '{first_app}' and '{second_app}'"
    )]
    #[diagnostic(
        code(dockhand::ports::host_address_reused),
        help("One externally visible host:port pair can only forward to a single container port")
    )]
    HostAddressReused {
        host_address: String,
        host_port: u16,
        first_app: String,
        second_app: String,
    },

    #[error("app '{app}' forwards container port {container_port} more than once")]
    #[diagnostic(
        code(dockhand::ports::container_port_reused),
        help("A container cannot expose the same internal port under two host mappings")
    )]
    ContainerPortReused { app: String, container_port: u16 },

    #[error("ran out of ephemeral host ports above {base}")]
    #[diagnostic(code(dockhand::ports::space_exhausted))]
    PortSpaceExhausted { base: u16 },

    // Repo errors
    #[error("no repo matches '{name}'")]
    #[diagnostic(
        code(dockhand::repos::not_found),
        help("Use a full remote path or a short name from 'dockhand repos list'")
    )]
    RepoNotFound { name: String },

    #[error("repo name '{name}' is ambiguous: matches {matches}")]
    #[diagnostic(
        code(dockhand::repos::ambiguous_name),
        help("Use the full remote path to disambiguate")
    )]
    AmbiguousRepoName { name: String, matches: String },

    #[error("override source path does not exist: {path}")]
    #[diagnostic(code(dockhand::repos::override_path_not_found))]
    OverridePathNotFound { path: String },

    // Spec loading errors
    #[error("specs directory is not configured")]
    #[diagnostic(
        code(dockhand::specs::path_not_set),
        help("Pass --specs-dir, set DOCKHAND_SPECS_DIR, or set specs_path in the config file")
    )]
    SpecsPathNotSet,

    #[error("specs directory not found: {path}")]
    #[diagnostic(code(dockhand::specs::dir_not_found))]
    SpecsDirNotFound { path: String },

    #[error("failed to parse spec file: {path}")]
    #[diagnostic(code(dockhand::specs::parse_failed))]
    SpecParseFailed { path: String, reason: String },

    // Configuration errors
    #[error("failed to read configuration file: {path}")]
    #[diagnostic(code(dockhand::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("failed to parse configuration file: {path}")]
    #[diagnostic(code(dockhand::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("failed to write file: {path}")]
    #[diagnostic(code(dockhand::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dockhand::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DockhandError {
    fn from(err: std::io::Error) -> Self {
        DockhandError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DockhandError {
    fn from(err: serde_yaml::Error) -> Self {
        DockhandError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DockhandError {
    fn from(err: serde_json::Error) -> Self {
        DockhandError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DockhandError>;
