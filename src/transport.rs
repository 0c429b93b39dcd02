//! Blocking HTTP transport for JSON-RPC envelopes.
//!
//! Every call is a single POST that waits for the full response body. Idle
//! connections are not kept between calls, and failures are returned to the
//! caller as-is; nothing is retried here.

use crate::{ClientConfig, Error, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use std::time::Duration;

/// Header carrying the MCP session token
pub const SESSION_HEADER: &str = "mcp-session-id";

/// Accept header value covering both response encodings
pub const ACCEPT_BOTH: &str = "application/json, text/event-stream";

/// Something that can deliver a serialized request and hand back the raw body
pub trait Transport {
    /// POST `payload` and return the full response body as text
    fn post(&self, payload: &[u8]) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, payload: &[u8]) -> Result<String> {
        (**self).post(payload)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post(&self, payload: &[u8]) -> Result<String> {
        (**self).post(payload)
    }
}

/// `reqwest`-backed transport talking to the MCP endpoint
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_BOTH));
        headers.insert(
            HeaderName::from_static(SESSION_HEADER),
            header_value(&config.session_id)?,
        );
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("header name `{}`: {}", name, e)))?;
            headers.insert(name, header_value(value)?);
        }

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            headers,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Config(format!("header value `{}`: {}", value, e)))
}

impl Transport for HttpTransport {
    fn post(&self, payload: &[u8]) -> Result<String> {
        debug!("POST {} ({} bytes)", self.endpoint, payload.len());
        let res = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(payload.to_vec())
            .send()?;

        let status = res.status();
        if !status.is_success() {
            // The body usually still carries a JSON-RPC error worth decoding.
            warn!("{} answered with HTTP {}", self.endpoint, status);
        }

        res.text()
            .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))
    }
}
