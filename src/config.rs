/// Endpoint configuration for the click handler
use crate::error::TransportFailure;
use url::Url;

/// Where ticket reports are posted
pub const TICKET_ENDPOINT: &str = "https://tickets-2-bger.onrender.com/log_user";

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerConfig {
    pub endpoint: String,
}

impl HandlerConfig {
    /// Point the handler somewhere other than the ticket server (tests, local dev).
    pub fn with_endpoint(endpoint: &str) -> Result<HandlerConfig, TransportFailure> {
        let endpoint = Url::parse(endpoint).map_err(|source| TransportFailure::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(HandlerConfig {
            endpoint: endpoint.into(),
        })
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        HandlerConfig {
            endpoint: TICKET_ENDPOINT.to_string(),
        }
    }
}
