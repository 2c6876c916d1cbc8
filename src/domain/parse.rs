//! Pure parse/validate for fleet configuration (`config.toml`).

use crate::domain::{AppError, FleetConfig};

/// Parse and validate fleet configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<FleetConfig, AppError> {
    let config: FleetConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
