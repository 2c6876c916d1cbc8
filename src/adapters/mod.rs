pub mod filesystem;
pub mod host;
pub mod templates;
