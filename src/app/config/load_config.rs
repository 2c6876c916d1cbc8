//! Fleet configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::parse::parse_config_content;
use crate::domain::{AppError, FleetConfig};

/// Load, parse and validate the fleet configuration at `path`.
///
/// Relative paths resolve against the working directory.
pub fn load_config(path: &Path) -> Result<FleetConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => AppError::ConfigMissing(path.display().to_string()),
        _ => AppError::Io(err),
    })?;

    let config = parse_config_content(&content)?;
    debug!(
        path = %path.display(),
        teams = config.teams.team_list.len(),
        base_port = config.server.base_port,
        "loaded fleet configuration"
    );
    Ok(config)
}
