//! Host resolution strategies for the team URL summary.

mod external_ip;
mod literal;

pub use external_ip::ExternalIpResolver;
pub use literal::LiteralHost;

use crate::domain::{AppError, HostConfig, HostStrategy};
use crate::ports::{HostResolver, HostResolverFactory};

/// Selects the resolver named by `host.strategy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredHostResolverFactory;

impl HostResolverFactory for ConfiguredHostResolverFactory {
    fn create(&self, config: &HostConfig) -> Result<Box<dyn HostResolver>, AppError> {
        match config.strategy {
            HostStrategy::Literal => Ok(Box::new(LiteralHost::new(config.address.clone()))),
            HostStrategy::External => Ok(Box::new(ExternalIpResolver::new(config)?)),
        }
    }
}
