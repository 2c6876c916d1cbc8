//! Artifact generators.

mod artifact_generator;
mod compose_generator;
mod dockerfile_generator;
mod host_resolution;
mod setup_script_generator;
mod summary_generator;

pub use artifact_generator::ArtifactGenerator;
pub use compose_generator::{render_compose, tracking_uri};
pub use dockerfile_generator::render_dockerfile;
pub use host_resolution::resolve_host;
pub use setup_script_generator::{ARTIFACTS_DIR, render_setup_script, team_directory_commands};
pub use summary_generator::{render_summary, team_url};
