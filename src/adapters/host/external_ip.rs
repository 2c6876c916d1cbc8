//! External address lookup using reqwest.

use std::net::IpAddr;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, HostConfig};
use crate::ports::HostResolver;

/// Queries a "what is my address" endpoint that answers with a bare IP.
///
/// One request per call, bounded by the configured timeout. Any transport
/// error, non-success status, or body that is not an IP address is an error.
#[derive(Debug, Clone)]
pub struct ExternalIpResolver {
    lookup_url: Url,
    client: Client,
}

impl ExternalIpResolver {
    pub fn new(config: &HostConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("mlfleet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::HostLookup {
                url: config.lookup_url.to_string(),
                details: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { lookup_url: config.lookup_url.clone(), client })
    }

    fn lookup_error(&self, details: impl Into<String>) -> AppError {
        AppError::HostLookup { url: self.lookup_url.to_string(), details: details.into() }
    }
}

impl HostResolver for ExternalIpResolver {
    fn resolve(&self) -> Result<String, AppError> {
        let response = self
            .client
            .get(self.lookup_url.clone())
            .send()
            .map_err(|e| self.lookup_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.lookup_error(format!("unexpected status {}", status)));
        }

        let body = response
            .text()
            .map_err(|e| self.lookup_error(format!("Failed to read response body: {}", e)))?;
        let address = body.trim();
        let ip: IpAddr = address
            .parse()
            .map_err(|_| self.lookup_error(format!("response is not an IP address: {:?}", address)))?;

        Ok(ip.to_string())
    }

    fn describe(&self) -> String {
        format!("external lookup via {}", self.lookup_url)
    }
}
