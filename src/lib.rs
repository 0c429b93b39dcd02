//! Mockup Runner
//!
//! A synchronous client for an MCP mockup-generation service. It assembles
//! multi-page website mockups from declarative element lists, exports each
//! page and reports how long every phase took.
//!
//! # Layers
//!
//! - **rpc**: JSON-RPC envelopes, response decoding (plain JSON or
//!   event-stream framing) and tool-result extraction
//! - **transport**: the blocking HTTP POST behind a small trait
//! - **client**: ties the two together and owns the request id sequence
//! - **mockup**: typed wrappers for the screen, element and export tools
//! - **layout**: static page data for the bundled corporate site
//! - **orchestrator** / **report**: the per-page run loop and its summary
//!
//! # Example
//!
//! ```no_run
//! use mockup_runner::{ClientConfig, MockupClient, ScreenSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig {
//!     session_id: "ffba88af-54d6-46c3-ad55-8abdfa7df1e0".to_string(),
//!     ..Default::default()
//! };
//! let mut mockups = MockupClient::connect(config, "proj_kLIQ1BZw2L")?;
//! let screen = mockups.create_screen(&ScreenSpec::named("Home"))?;
//! println!("created {}", screen.id);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

pub mod error;
pub use error::{Error, Result};

pub mod client;
pub mod layout;
pub mod mockup;
pub mod orchestrator;
pub mod report;
pub mod rpc;
pub mod transport;

pub use client::RpcClient;
pub use mockup::{
    ElementDescriptor, ElementKind, ExportFormat, ExportOptions, MockupClient, Screen,
    ScreenSpec, ScreenStyle,
};
pub use orchestrator::{FailurePolicy, Orchestrator, PageResult, PageSpec, Plan, StepPolicy, StepTiming};
pub use rpc::{IdSequence, RpcRequest, RpcResponse, ToolOutput};
pub use transport::{HttpTransport, Transport};

/// Default MCP endpoint of the mockup service
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3200/mcp";

/// Default request timeout; server-side rendering can be slow
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// Request ids start right after this value
pub const DEFAULT_ID_OFFSET: u64 = 600;

/// Connection settings for the RPC client
///
/// The session id is a fixed opaque token supplied once at startup. It is
/// sent with every request and never refreshed.
///
/// # Examples
///
/// ```
/// let cfg = mockup_runner::ClientConfig::default();
/// assert_eq!(cfg.endpoint, "http://localhost:3200/mcp");
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// MCP endpoint URL
    pub endpoint: String,
    /// Value of the `mcp-session-id` header
    pub session_id: String,
    /// Timeout for a whole request/response exchange in milliseconds
    pub timeout_ms: u64,
    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
    /// Offset for the request id sequence
    pub id_offset: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            session_id: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            headers: HashMap::new(),
            id_offset: DEFAULT_ID_OFFSET,
        }
    }
}

impl ClientConfig {
    /// Check that the endpoint is an absolute http(s) URL and the timeout is non-zero
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("endpoint `{}`: {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "endpoint `{}` must use http or https",
                self.endpoint
            )));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }
}

/// Canvas dimensions of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 900,
        }
    }
}
