//! mlfleet: generate a multi-team MLflow deployment from one TOML file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{GenerateOptions, GenerateOutcome, generate, generate_at, generate_with};
pub use domain::AppError;
