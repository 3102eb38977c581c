//! Host port allocation
//!
//! Every host forwarding rule across the assembled apps gets a unique
//! ephemeral host port, handed out by a single counter starting at
//! [`EPHEMERAL_PORT_BASE`]. Apps are processed in ascending name order
//! and rules in declaration order; that ordering is the only source of
//! determinism, so compiling the same universe twice yields a
//! byte-identical document.
//!
//! The document carries three port-consistent projections, one per
//! renderer: `docker_compose` (container port bindings per app),
//! `nginx` (one proxy entry per rule) and `hosts_file` (one entry per
//! distinct host name).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{DockhandError, Result};
use crate::specs::AppSpec;

/// First ephemeral host port handed out in a run.
pub const EPHEMERAL_PORT_BASE: u16 = 65000;

/// Address host names are pointed at in the hosts file.
pub const LOCALHOST_IP: &str = "127.0.0.1";

/// One port binding of an app's container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposePortMapping {
    pub in_container_port: u16,
    pub mapped_host_port: u16,
}

/// One proxy rule: nginx listens on `host_address:host_port` and
/// forwards to the mapped port on the container host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NginxProxyEntry {
    pub proxied_port: u16,
    pub boot2docker_ip: String,
    pub host_address: String,
    pub host_port: u16,
}

/// One hosts-file line pointing a host name at the loopback address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostsFileEntry {
    pub forwarded_ip: String,
    pub host_address: String,
}

/// The compiled port document consumed by the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSpec {
    pub docker_compose: BTreeMap<String, Vec<ComposePortMapping>>,
    pub nginx: Vec<NginxProxyEntry>,
    pub hosts_file: Vec<HostsFileEntry>,
}

/// Compile the port document for an assembled apps collection.
///
/// `boot2docker_ip` is the address the container host is reachable at;
/// it only populates the nginx projection.
///
/// Every app appears under `docker_compose`, rule-less apps with an
/// empty list.
///
/// # Errors
///
/// - `HostAddressReused` when two rules anywhere in the run claim the
///   same `host_name:host_port` pair.
/// - `ContainerPortReused` when one app forwards the same container
///   port under two rules. Reuse of a container port across different
///   apps is allowed.
///
/// No partial document is returned on failure.
pub fn compile_port_spec(
    apps: &BTreeMap<String, AppSpec>,
    boot2docker_ip: &str,
) -> Result<PortSpec> {
    let mut port_spec = PortSpec::default();
    let mut next_port = EPHEMERAL_PORT_BASE;
    // host_name:host_port -> claiming app, for error context
    let mut claimed_addresses: BTreeMap<(String, u16), String> = BTreeMap::new();
    let mut seen_host_names: BTreeSet<String> = BTreeSet::new();

    for (app_name, app) in apps {
        let mut claimed_container_ports: BTreeSet<u16> = BTreeSet::new();
        let mappings = port_spec.docker_compose.entry(app_name.clone()).or_default();

        for rule in &app.host_forwarding {
            let address = (rule.host_name.clone(), rule.host_port);
            if let Some(first_app) = claimed_addresses.insert(address, app_name.clone()) {
                return Err(DockhandError::HostAddressReused {
                    host_address: rule.host_name.clone(),
                    host_port: rule.host_port,
                    first_app,
                    second_app: app_name.clone(),
                });
            }
            if !claimed_container_ports.insert(rule.container_port) {
                return Err(DockhandError::ContainerPortReused {
                    app: app_name.clone(),
                    container_port: rule.container_port,
                });
            }

            mappings.push(ComposePortMapping {
                in_container_port: rule.container_port,
                mapped_host_port: next_port,
            });
            port_spec.nginx.push(NginxProxyEntry {
                proxied_port: next_port,
                boot2docker_ip: boot2docker_ip.to_string(),
                host_address: rule.host_name.clone(),
                host_port: rule.host_port,
            });
            if seen_host_names.insert(rule.host_name.clone()) {
                port_spec.hosts_file.push(HostsFileEntry {
                    forwarded_ip: LOCALHOST_IP.to_string(),
                    host_address: rule.host_name.clone(),
                });
            }

            next_port = next_port
                .checked_add(1)
                .ok_or(DockhandError::PortSpaceExhausted {
                    base: EPHEMERAL_PORT_BASE,
                })?;
        }
    }

    Ok(port_spec)
}
