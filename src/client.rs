//! JSON-RPC client over a [`Transport`].

use crate::rpc::{self, IdSequence, RpcRequest, ToolOutput, TOOLS_CALL};
use crate::transport::{HttpTransport, Transport};
use crate::{ClientConfig, Error, Result};
use log::debug;
use serde_json::{json, Value};

/// Session-scoped RPC client.
///
/// Owns the id sequence, so ids are unique for as long as the client lives.
pub struct RpcClient<T: Transport> {
    transport: T,
    ids: IdSequence,
}

impl RpcClient<HttpTransport> {
    /// Build an HTTP-backed client from configuration
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport, IdSequence::starting_at(config.id_offset)))
    }
}

impl<T: Transport> RpcClient<T> {
    pub fn with_transport(transport: T, ids: IdSequence) -> Self {
        Self { transport, ids }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Id of the most recently sent request
    pub fn last_id(&self) -> u64 {
        self.ids.last()
    }

    /// Send `method` with `params` and return the decoded `result`
    pub fn call(&mut self, method: &str, params: Value) -> Result<Value> {
        let request = RpcRequest::new(&mut self.ids, method, params);
        debug!("-> #{} {}", request.id, request.method);
        let payload = serde_json::to_vec(&request)
            .map_err(|e| Error::Decode(format!("Failed to encode request: {}", e)))?;
        let body = self.transport.post(&payload)?;
        let result = rpc::decode_response(&body);
        debug!("<- #{} {}", request.id, if result.is_ok() { "ok" } else { "error" });
        result
    }

    /// Invoke tool `name` through `tools/call` and unwrap its content
    pub fn call_tool(&mut self, name: &str, arguments: Value) -> Result<ToolOutput> {
        let (output, _) = self.call_tool_raw(name, arguments)?;
        Ok(output)
    }

    /// Like [`call_tool`](Self::call_tool) but also hands back the untouched
    /// result value, for callers that need non-text content items.
    pub fn call_tool_raw(&mut self, name: &str, arguments: Value) -> Result<(ToolOutput, Value)> {
        let result = self.call(TOOLS_CALL, json!({ "name": name, "arguments": arguments }))?;
        let output = rpc::extract_tool_result(name, result.clone())?;
        Ok((output, result))
    }
}
