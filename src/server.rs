//! Server metadata as supplied by the panel API: identity, lifecycle flags,
//! resource limits, and network allocations.

use serde::Deserialize;

use crate::format;
use crate::lifecycle::Presentation;

#[derive(Debug, Clone, Deserialize)]
pub struct Allocation {
    pub ip: String,
    pub port: u16,
    pub alias: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl Allocation {
    /// `alias:port` when an alias exists, otherwise `ip:port` with IPv6
    /// hosts bracketed.
    pub fn display(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{alias}:{}", self.port),
            None => format!("{}:{}", format::ip_display(&self.ip), self.port),
        }
    }
}

/// Resource caps; 0 means unlimited throughout.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Limits {
    pub memory_bytes: u64,
    pub disk_bytes: u64,
    /// Whole-percent CPU cap, absolute across cores.
    pub cpu: u32,
}

impl Limits {
    pub fn memory_display(&self) -> String {
        format::limit_display(self.memory_bytes)
    }

    pub fn disk_display(&self) -> String {
        format::limit_display(self.disk_bytes)
    }

    pub fn cpu_display(&self) -> String {
        format::cpu_limit_display(self.cpu)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_installing: bool,
    #[serde(default)]
    pub is_transferring: bool,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
}

impl ServerInfo {
    pub fn presentation(&self) -> Presentation {
        Presentation::derive(self.is_installing, self.is_transferring)
    }

    /// The default allocation rendered for display; "n/a" when the API
    /// returned none flagged as default.
    pub fn default_allocation_display(&self) -> String {
        self.allocations
            .iter()
            .find(|a| a.is_default)
            .map(Allocation::display)
            .unwrap_or_else(|| "n/a".into())
    }
}
