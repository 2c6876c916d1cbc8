use crate::domain::AppError;
use crate::ports::HostResolver;

/// Returns a configured host verbatim.
#[derive(Debug, Clone)]
pub struct LiteralHost {
    address: String,
}

impl LiteralHost {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into().trim().to_string() }
    }
}

impl HostResolver for LiteralHost {
    fn resolve(&self) -> Result<String, AppError> {
        Ok(self.address.clone())
    }

    fn describe(&self) -> String {
        format!("literal host '{}'", self.address)
    }
}
