//! Response body decoding for plain JSON and event-stream framing.

use super::RpcResponse;
use crate::{Error, Result};
use log::debug;
use serde_json::Value;

/// Line prefix that marks an event-stream payload
pub const SSE_DATA_PREFIX: &str = "data: ";

/// Locate the JSON payload inside a response body.
///
/// Only the first `data: ` line is used when the body is an event stream;
/// any further lines are ignored. Bodies without such a line are treated as
/// a bare JSON document.
pub fn extract_payload(raw: &str) -> &str {
    match raw.lines().find_map(|line| line.strip_prefix(SSE_DATA_PREFIX)) {
        Some(data) => {
            debug!("response framed as event-stream");
            data
        }
        None => {
            debug!("response is a bare JSON document");
            raw.trim()
        }
    }
}

/// Parse the full RPC envelope out of a response body
pub fn parse_envelope(raw: &str) -> Result<RpcResponse> {
    let payload = extract_payload(raw);
    serde_json::from_str(payload).map_err(|e| {
        Error::Decode(format!("{} (payload: {})", e, truncate(payload, 200)))
    })
}

/// Decode a response body into its `result`, surfacing RPC-level errors
pub fn decode_response(raw: &str) -> Result<Value> {
    parse_envelope(raw)?.into_result()
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_stream_and_bare_json_agree() {
        let framed = decode_response("data: {\"result\":{\"x\":1}}\n").unwrap();
        let bare = decode_response("{\"result\":{\"x\":1}}").unwrap();
        assert_eq!(framed, bare);
        assert_eq!(bare, json!({"x": 1}));
    }

    #[test]
    fn only_first_data_line_is_used() {
        let body = "event: message\n\
                    data: {\"result\":{\"n\":1}}\n\
                    \n\
                    data: {\"result\":{\"n\":2}}\n";
        assert_eq!(decode_response(body).unwrap(), json!({"n": 1}));
    }

    #[test]
    fn trailing_garbage_after_first_event_is_ignored() {
        let body = "data: {\"result\":{\"ok\":true}}\ndata: not json at all\n";
        assert_eq!(decode_response(body).unwrap(), json!({"ok": true}));
    }

    #[test]
    fn prefix_must_match_exactly() {
        // "data:" without the space is not an event line, so the whole body
        // is parsed and fails.
        let err = decode_response("data:{\"result\":{}}").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_for_bare_bodies() {
        let v = decode_response("\n\n  {\"result\": [1, 2]}  \n").unwrap();
        assert_eq!(v, json!([1, 2]));
    }

    #[test]
    fn rpc_error_is_surfaced() {
        let body = "data: {\"jsonrpc\":\"2.0\",\"id\":3,\"error\":{\"code\":-32602,\"message\":\"bad params\"}}\n";
        match decode_response(body) {
            Err(Error::RemoteProtocol(payload)) => {
                assert_eq!(payload["code"], json!(-32602));
                assert_eq!(payload["message"], json!("bad params"));
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(matches!(decode_response("<html>502</html>"), Err(Error::Decode(_))));
    }

    #[test]
    fn envelope_keeps_id_and_version() {
        let env = parse_envelope("{\"jsonrpc\":\"2.0\",\"id\":601,\"result\":{}}").unwrap();
        assert_eq!(env.jsonrpc.as_deref(), Some("2.0"));
        assert_eq!(env.id, Some(json!(601)));
        assert_eq!(env.result, Some(json!({})));
        assert!(env.error.is_none());
    }
}
