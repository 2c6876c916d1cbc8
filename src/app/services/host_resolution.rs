use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::HostResolver;

/// Resolve the summary host, substituting `fallback` when the resolver fails.
///
/// With no fallback the resolver error is returned unchanged.
pub fn resolve_host(resolver: &dyn HostResolver, fallback: Option<&str>) -> Result<String, AppError> {
    match resolver.resolve() {
        Ok(host) => {
            debug!(host = %host, source = %resolver.describe(), "resolved summary host");
            Ok(host)
        }
        Err(err) => match fallback {
            Some(fallback) => {
                warn!(
                    source = %resolver.describe(),
                    error = %err,
                    fallback = %fallback,
                    "host lookup failed; using fallback host"
                );
                Ok(fallback.to_string())
            }
            None => Err(err),
        },
    }
}
