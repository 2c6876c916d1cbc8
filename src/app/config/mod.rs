//! Configuration loading from disk.
//!
//! Pure schema parsing and validation live in `domain::config` and
//! `domain::parse`.

mod load_config;

pub use load_config::load_config;
