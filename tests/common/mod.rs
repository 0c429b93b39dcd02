//! Tiny in-process stand-in for the MCP mockup service

#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Read;
use std::sync::{Arc, Mutex};
use tiny_http::{Header, Response, Server};

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub body: Value,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub session_id: Option<String>,
}

/// How the mock frames a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    Json,
    EventStream,
}

pub struct Reply {
    pub status: u16,
    pub envelope: Value,
    pub framing: Framing,
}

impl Reply {
    pub fn ok(request: &Value, result: Value, framing: Framing) -> Self {
        Reply {
            status: 200,
            envelope: json!({"jsonrpc": "2.0", "id": request["id"], "result": result}),
            framing,
        }
    }
}

pub struct MockService {
    pub url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

fn header(request: &tiny_http::Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

/// Start a server on an ephemeral port that answers every request with `handler`
pub fn start<F>(handler: F) -> MockService
where
    F: Fn(&Value) -> Reply + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    std::thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut raw = String::new();
            let _ = request.as_reader().read_to_string(&mut raw);
            let body: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);

            seen.lock().unwrap().push(Recorded {
                body: body.clone(),
                content_type: header(&request, "Content-Type"),
                accept: header(&request, "Accept"),
                session_id: header(&request, "mcp-session-id"),
            });

            let reply = handler(&body);
            let (text, content_type) = match reply.framing {
                Framing::Json => (reply.envelope.to_string(), "Content-Type: application/json"),
                Framing::EventStream => (
                    format!("event: message\ndata: {}\n\n", reply.envelope),
                    "Content-Type: text/event-stream",
                ),
            };
            let response = Response::from_string(text)
                .with_status_code(reply.status)
                .with_header(content_type.parse::<Header>().unwrap());
            let _ = request.respond(response);
        }
    });

    MockService {
        url: format!("http://{}/mcp", addr),
        requests,
    }
}

/// Tool result whose single text item is `payload` serialized as JSON
pub fn text_result(payload: Value) -> Value {
    json!({"content": [{"type": "text", "text": payload.to_string()}], "isError": false})
}

pub fn error_result(message: &str) -> Value {
    json!({"content": [{"type": "text", "text": message}], "isError": true})
}
