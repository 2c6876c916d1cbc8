//! Escaping filters for values interpolated into generated files.

use minijinja::{Error, ErrorKind};

/// Render a string as a double-quoted YAML scalar.
///
/// `$` is doubled so Docker Compose does not treat it as interpolation.
pub fn yaml_quote(value: &str) -> Result<String, Error> {
    serde_json::to_string(&value.replace('$', "$$"))
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

/// Render a string as a single POSIX shell word.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
