mod artifact_store;
mod host_resolver;

pub use artifact_store::ArtifactStore;
pub use host_resolver::{HostResolver, HostResolverFactory};
