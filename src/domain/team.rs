//! Team identifiers and port allocation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

const MAX_TEAM_NAME_LEN: usize = 63;

/// A validated team identifier.
///
/// Guarantees:
/// - Non-empty, at most 63 characters
/// - Starts with an ASCII letter or digit
/// - Contains only ASCII alphanumerics, `-`, or `_`
///
/// The name is embedded in Compose service names (`mlflow-<team>`) and in
/// artifact directory paths, so anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Validate and create a new team name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_team_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidTeamName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_team_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    name.len() <= MAX_TEAM_NAME_LEN
        && first.is_ascii_alphanumeric()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for TeamName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TeamName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A team paired with the host port its tracking server is published on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAllocation {
    pub team: TeamName,
    pub port: u16,
}

impl TeamAllocation {
    /// Compose service name for this team.
    pub fn service_name(&self) -> String {
        format!("mlflow-{}", self.team)
    }

    /// Artifact root inside the tracking server container.
    pub fn artifact_root(&self) -> String {
        format!("/mlflow/artifacts/{}", self.team)
    }
}

/// Assign `base_port + index` to each team, preserving order.
///
/// Allocation is recomputed on every run; nothing is persisted.
pub fn allocate(teams: &[TeamName], base_port: u16) -> Result<Vec<TeamAllocation>, AppError> {
    teams
        .iter()
        .enumerate()
        .map(|(index, team)| {
            let port = u16::try_from(index)
                .ok()
                .and_then(|offset| base_port.checked_add(offset))
                .ok_or_else(|| AppError::PortOverflow {
                    team: team.to_string(),
                    base_port,
                    index,
                })?;
            Ok(TeamAllocation { team: team.clone(), port })
        })
        .collect()
}
