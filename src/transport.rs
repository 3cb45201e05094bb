/// Outbound HTTP for ticket reports
use crate::error::TransportFailure;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// A completed HTTP exchange, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

/// Sends a JSON body and hands back the response text.
///
/// Futures are `?Send`: in the browser everything runs on the extension's
/// single event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<Delivery, TransportFailure>;
}

/// `reqwest`-backed transport. On wasm32 this goes through the host `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> HttpTransport {
        HttpTransport {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<Delivery, TransportFailure> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(TransportFailure::Request)?;

        // No status check: error pages are delivered like any other reply
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportFailure::Body)?;

        Ok(Delivery { status, body })
    }
}
