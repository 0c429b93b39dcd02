//! JSON-RPC 2.0 envelope types and request id sequencing

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod decode;
pub mod extract;

pub use decode::{decode_response, parse_envelope};
pub use extract::{extract_tool_result, ContentItem, ImageContent, ToolInvocationResult, ToolOutput};

/// Protocol version sent in every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// Method used for every tool invocation
pub const TOOLS_CALL: &str = "tools/call";

/// Outbound JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl RpcRequest {
    /// Build a request using the next id from `ids`
    pub fn new(ids: &mut IdSequence, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: ids.next_id(),
            method: method.into(),
            params,
        }
    }
}

/// Inbound JSON-RPC response
///
/// Only one of `result` / `error` is expected. When `error` is present the
/// result is never consulted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RpcResponse {
    /// Unwrap into the `result` value, failing on an RPC-level error.
    ///
    /// A response with neither member yields an empty object.
    pub fn into_result(self) -> crate::Result<Value> {
        if let Some(err) = self.error {
            return Err(crate::Error::RemoteProtocol(err));
        }
        Ok(self.result.unwrap_or_else(|| Value::Object(Default::default())))
    }
}

/// Monotonic request id generator owned by a client session.
///
/// The first id handed out is `offset + 1`; every call advances by exactly one.
#[derive(Debug, Clone)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn starting_at(offset: u64) -> Self {
        Self { last: offset }
    }

    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The most recently issued id (or the offset if none were issued)
    pub fn last(&self) -> u64 {
        self.last
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(crate::DEFAULT_ID_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_increase_by_one_without_repeats() {
        let mut ids = IdSequence::starting_at(600);
        let issued: Vec<u64> = (0..50).map(|_| ids.next_id()).collect();
        assert_eq!(issued[0], 601);
        for pair in issued.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
        assert_eq!(ids.last(), 650);
    }

    #[test]
    fn request_carries_version_and_fresh_id() {
        let mut ids = IdSequence::starting_at(10);
        let a = RpcRequest::new(&mut ids, TOOLS_CALL, json!({"name": "x"}));
        let b = RpcRequest::new(&mut ids, TOOLS_CALL, json!({}));
        assert_eq!(a.jsonrpc, "2.0");
        assert_eq!(a.id, 11);
        assert_eq!(b.id, 12);

        let wire = serde_json::to_value(&a).unwrap();
        assert_eq!(
            wire,
            json!({"jsonrpc": "2.0", "id": 11, "method": "tools/call", "params": {"name": "x"}})
        );
    }

    #[test]
    fn response_error_short_circuits() {
        let resp = RpcResponse {
            result: Some(json!({"ignored": true})),
            error: Some(json!({"code": -1})),
            ..Default::default()
        };
        match resp.into_result() {
            Err(crate::Error::RemoteProtocol(v)) => assert_eq!(v, json!({"code": -1})),
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn empty_response_yields_empty_object() {
        let v = RpcResponse::default().into_result().unwrap();
        assert_eq!(v, json!({}));
    }
}
