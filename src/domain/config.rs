//! Fleet configuration domain models (`config.toml`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::team::{TeamAllocation, TeamName, allocate};

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration for artifact generation loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    pub teams: TeamsConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Host used in the team URL summary.
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

impl FleetConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.teams.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.host.validate()?;
        // Surfaces port overflow before any artifact is rendered.
        self.allocations()?;
        Ok(())
    }

    /// Team/port pairs in configuration order.
    pub fn allocations(&self) -> Result<Vec<TeamAllocation>, AppError> {
        allocate(&self.teams.team_list, self.server.base_port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamsConfig {
    /// Ordered team identifiers; the index determines the port offset.
    pub team_list: Vec<TeamName>,
}

impl TeamsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.team_list.is_empty() {
            return Err(AppError::config_error("teams.team_list must not be empty"));
        }
        let mut seen = HashSet::new();
        for team in &self.team_list {
            if !seen.insert(team.as_str()) {
                return Err(AppError::config_error(format!(
                    "teams.team_list contains duplicate team '{}'",
                    team
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// First published port; team `i` gets `base_port + i`.
    pub base_port: u16,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_port == 0 {
            return Err(AppError::config_error("server.base_port must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Shared PostgreSQL password for every tracking server.
    pub local_password: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig").field("local_password", &"[REDACTED]").finish()
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.local_password.trim().is_empty() {
            return Err(AppError::config_error("database.local_password must not be empty"));
        }
        if self.local_password.contains(['\n', '\r', '\0']) {
            return Err(AppError::config_error(
                "database.local_password must not contain line breaks or NUL bytes",
            ));
        }
        Ok(())
    }
}

/// How the summary host is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostStrategy {
    /// Use `host.address` verbatim.
    #[default]
    Literal,
    /// Ask an external "what is my address" service.
    External,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    #[serde(default)]
    pub strategy: HostStrategy,
    /// Host used by the literal strategy.
    #[serde(default = "default_host_address")]
    pub address: String,
    /// Endpoint returning the caller's public address as plain text.
    #[serde(default = "default_lookup_url")]
    pub lookup_url: Url,
    /// Request timeout for the external lookup in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Host used when the external lookup fails. Empty makes the failure fatal.
    #[serde(default = "default_host_address")]
    pub fallback: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            strategy: HostStrategy::default(),
            address: default_host_address(),
            lookup_url: default_lookup_url(),
            timeout_secs: default_timeout_secs(),
            fallback: default_host_address(),
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("host.timeout_secs must be greater than 0"));
        }
        if self.strategy == HostStrategy::Literal && self.address.trim().is_empty() {
            return Err(AppError::config_error(
                "host.address must not be empty when host.strategy is \"literal\"",
            ));
        }
        if !matches!(self.lookup_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "host.lookup_url must use http or https, got '{}'",
                self.lookup_url.scheme()
            )));
        }
        Ok(())
    }

    /// Fallback host, or `None` when lookup failures should abort the run.
    pub fn fallback_host(&self) -> Option<&str> {
        let fallback = self.fallback.trim();
        if fallback.is_empty() { None } else { Some(fallback) }
    }
}

fn default_host_address() -> String {
    "localhost".to_string()
}

fn default_lookup_url() -> Url {
    Url::parse("https://ifconfig.me/ip").expect("Default lookup URL must be valid")
}

fn default_timeout_secs() -> u64 {
    5
}

/// Health-check command form for the tracking servers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthcheckStyle {
    /// `["CMD-SHELL", "curl -f http://0.0.0.0:5000/health || exit 1"]`
    #[default]
    Shell,
    /// `["CMD-SHELL", "curl", "-f", "http://0.0.0.0:5000/health || exit 1"]`
    Split,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    #[serde(default)]
    pub healthcheck: HealthcheckStyle,
}

/// Verbosity of `team_urls.md`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    #[default]
    Brief,
    Detailed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryConfig {
    #[serde(default)]
    pub style: SummaryStyle,
}
