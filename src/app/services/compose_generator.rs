use minijinja::context;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::adapters::templates::{COMPOSE, TEAM_SERVICE, TemplateCatalog};
use crate::domain::{AppError, FleetConfig, HealthcheckStyle, TeamAllocation};

/// Render the Compose file: one shared `db` service plus one tracking
/// server per team, in team order.
///
/// An empty team list yields a document containing only `db`.
pub fn render_compose(templates: &TemplateCatalog, config: &FleetConfig) -> Result<String, AppError> {
    let password = &config.database.local_password;
    let tracking_uri = tracking_uri(password)?;

    let blocks = config
        .allocations()?
        .iter()
        .map(|allocation| {
            render_team_service(templates, allocation, &tracking_uri, config.compose.healthcheck)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let team_services =
        blocks.iter().map(|block| block.trim_end_matches('\n')).collect::<Vec<_>>().join("\n\n");

    templates.render(COMPOSE, context! { db_password => password, team_services => team_services })
}

fn render_team_service(
    templates: &TemplateCatalog,
    allocation: &TeamAllocation,
    tracking_uri: &str,
    healthcheck: HealthcheckStyle,
) -> Result<String, AppError> {
    templates.render(
        TEAM_SERVICE,
        context! {
            service_name => allocation.service_name(),
            port => allocation.port,
            tracking_uri => tracking_uri,
            artifact_root => allocation.artifact_root(),
            healthcheck => healthcheck,
        },
    )
}

/// Everything except RFC 3986 unreserved characters, `%` included.
const USERINFO_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Backend store URI for the shared database, with the password percent-encoded.
///
/// `Url::set_password` leaves `%` untouched, so the password is encoded
/// up front and decodes back to the literal `POSTGRES_PASSWORD` value.
pub fn tracking_uri(password: &str) -> Result<String, AppError> {
    let encoded = utf8_percent_encode(password, USERINFO_ENCODE_SET).to_string();
    let mut uri =
        Url::parse("postgresql://db:5432/mlflow").expect("Tracking URI base must be valid");
    uri.set_username("postgres")
        .and_then(|()| uri.set_password(Some(&encoded)))
        .map_err(|()| AppError::config_error("database.local_password cannot be used in a URI"))?;
    Ok(uri.into())
}
