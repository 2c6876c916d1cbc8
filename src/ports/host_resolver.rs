//! Host resolution port definition.

use crate::domain::{AppError, HostConfig};

/// Determines the host name or address placed in team URLs.
///
/// Implementations report failures as errors; falling back to a default host
/// is the caller's decision.
pub trait HostResolver {
    fn resolve(&self) -> Result<String, AppError>;

    /// Short label used in log records.
    fn describe(&self) -> String;
}

/// Builds the resolver selected by the loaded configuration.
pub trait HostResolverFactory {
    fn create(&self, config: &HostConfig) -> Result<Box<dyn HostResolver>, AppError>;
}
