//! Common test utilities for Dockhand integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp directory holding a specs tree and a config file, plus a
/// command builder wired to both.
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the specs directory
    pub specs_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty specs directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let specs_dir = temp.path().join("specs");
        std::fs::create_dir_all(&specs_dir).expect("Failed to create specs directory");
        let config_path = temp.path().join("dockhand.yml");
        Self {
            temp,
            specs_dir,
            config_path,
        }
    }

    /// Write one spec file into a collection directory
    pub fn write_spec(&self, collection: &str, name: &str, content: &str) {
        let dir = self.specs_dir.join(collection);
        std::fs::create_dir_all(&dir).expect("Failed to create collection directory");
        std::fs::write(dir.join(format!("{name}.yml")), content).expect("Failed to write spec");
    }

    /// Write the config file
    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Read the config file back
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(&self.config_path).expect("Failed to read config")
    }

    /// A dockhand command wired to this environment's config and specs
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dockhand").expect("Failed to find dockhand binary");
        cmd.env_remove("DOCKHAND_CONFIG")
            .env_remove("DOCKHAND_SPECS_DIR")
            .arg("--config")
            .arg(&self.config_path)
            .arg("--specs-dir")
            .arg(&self.specs_dir);
        cmd
    }

    /// Populate the standard two-app fixture universe:
    /// bundle `main` -> apps `gcweb` and `gcapi`, lib `common`,
    /// service `postgres`.
    pub fn with_standard_universe(self) -> Self {
        self.write_spec("bundles", "main", "apps: [gcweb, gcapi]\n");
        self.write_spec(
            "apps",
            "gcweb",
            "repo: github.com/gc/web\n\
             depends:\n  libs: [common]\n  services: [postgres]\n\
             host_forwarding:\n\
             - host_name: local.gc.com\n  host_port: 80\n  container_port: 80\n",
        );
        self.write_spec(
            "apps",
            "gcapi",
            "repo: github.com/gc/api\n\
             host_forwarding:\n\
             - host_name: local.gcapi.com\n  host_port: 8000\n  container_port: 8001\n",
        );
        self.write_spec("libs", "common", "repo: github.com/gc/common\n");
        self.write_spec("services", "postgres", "image: postgres:9.4\n");
        self
    }
}
