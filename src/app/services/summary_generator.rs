use std::net::Ipv6Addr;

use minijinja::context;
use serde::Serialize;

use crate::adapters::templates::{SUMMARY_BRIEF, SUMMARY_DETAILED, TemplateCatalog};
use crate::domain::{AppError, FleetConfig, SummaryStyle};

#[derive(Debug, Serialize)]
struct TeamEntry {
    name: String,
    service: String,
    port: u16,
    url: String,
    artifact_root: String,
}

/// Tracking server URL for a host and published port.
///
/// IPv6 literals are bracketed.
pub fn team_url(host: &str, port: u16) -> String {
    if host.parse::<Ipv6Addr>().is_ok() {
        format!("http://[{}]:{}", host, port)
    } else {
        format!("http://{}:{}", host, port)
    }
}

/// Render `team_urls.md` in the configured style.
pub fn render_summary(
    templates: &TemplateCatalog,
    config: &FleetConfig,
    host: &str,
) -> Result<String, AppError> {
    let teams = config
        .allocations()?
        .into_iter()
        .map(|allocation| TeamEntry {
            service: allocation.service_name(),
            url: team_url(host, allocation.port),
            artifact_root: allocation.artifact_root(),
            port: allocation.port,
            name: allocation.team.to_string(),
        })
        .collect::<Vec<_>>();

    let template = match config.summary.style {
        SummaryStyle::Brief => SUMMARY_BRIEF,
        SummaryStyle::Detailed => SUMMARY_DETAILED,
    };
    templates.render(template, context! { teams => teams })
}
