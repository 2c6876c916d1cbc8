pub mod artifact;
pub mod config;
pub mod error;
pub mod parse;
pub mod team;

pub use artifact::{ArtifactKind, GeneratedArtifact};
pub use config::{
    CONFIG_FILE, ComposeConfig, DatabaseConfig, FleetConfig, HealthcheckStyle, HostConfig,
    HostStrategy, ServerConfig, SummaryConfig, SummaryStyle, TeamsConfig,
};
pub use error::AppError;
pub use team::{TeamAllocation, TeamName, allocate};
