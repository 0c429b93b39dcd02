//! Unwrapping of the tool-content envelope returned by `tools/call`.

use crate::{Error, Result};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker used when a failed tool returns no content to explain itself
pub const UNKNOWN_TOOL_ERROR: &str = "unknown";

/// The `result` of a `tools/call` request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocationResult {
    #[serde(default)]
    pub content: Vec<ContentItem>,
    #[serde(default, rename = "isError")]
    pub is_error: bool,
}

/// One typed content item. Only `text` items are interpreted; everything
/// else is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentItem {
    pub fn is_text(&self) -> bool {
        self.kind == "text"
    }
}

/// What a successful tool call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// First content item was text holding valid JSON
    Json(Value),
    /// First content item was text that did not parse as JSON
    Text(String),
    /// No leading text item; the whole result value, untouched
    Raw(Value),
}

impl ToolOutput {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ToolOutput::Json(v) | ToolOutput::Raw(v) => Some(v),
            ToolOutput::Text(_) => None,
        }
    }

    /// Look up a string member of a JSON object output
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.as_json()?.get(key)?.as_str()
    }
}

/// An image content item (`{"type":"image","data":<base64>,"mimeType":..}`)
#[derive(Debug, Clone, PartialEq)]
pub struct ImageContent {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageContent {
    /// Collect every decodable image item from a raw tool result.
    ///
    /// Items with missing or malformed base64 are skipped.
    pub fn collect(result: &Value) -> Vec<ImageContent> {
        let items = match result.get("content").and_then(Value::as_array) {
            Some(items) => items,
            None => return Vec::new(),
        };
        items
            .iter()
            .filter(|item| item.get("type").and_then(Value::as_str) == Some("image"))
            .filter_map(|item| {
                let data = item.get("data")?.as_str()?;
                let bytes = base64::engine::general_purpose::STANDARD.decode(data).ok()?;
                let mime_type = item
                    .get("mimeType")
                    .and_then(Value::as_str)
                    .unwrap_or("application/octet-stream")
                    .to_string();
                Some(ImageContent { mime_type, data: bytes })
            })
            .collect()
    }

    /// File extension matching the mime type
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/svg+xml" => "svg",
            "application/pdf" => "pdf",
            _ => "bin",
        }
    }
}

/// Interpret the `result` of a `tools/call` for tool `tool`.
///
/// `isError` is checked before anything else, whatever the shape of
/// `content`. Results without a leading text item are returned as
/// [`ToolOutput::Raw`].
pub fn extract_tool_result(tool: &str, result: Value) -> Result<ToolOutput> {
    let leading = result
        .get("content")
        .and_then(Value::as_array)
        .and_then(|items| items.first());

    if result.get("isError").map_or(false, truthy) {
        let message = leading
            .and_then(|item| item.get("text"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_TOOL_ERROR)
            .to_string();
        return Err(Error::ToolExecution {
            tool: tool.to_string(),
            message,
        });
    }

    let first = leading.and_then(|item| ContentItem::deserialize(item).ok());
    match first {
        Some(ContentItem {
            kind,
            text: Some(text),
            ..
        }) if kind == "text" => match serde_json::from_str(&text) {
            Ok(value) => Ok(ToolOutput::Json(value)),
            Err(_) => Ok(ToolOutput::Text(text)),
        },
        _ => Ok(ToolOutput::Raw(result)),
    }
}

/// Flags are honoured the way loosely typed services send them: null, false,
/// zero and empty values are off.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
