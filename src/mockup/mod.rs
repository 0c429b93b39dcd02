//! Typed wrappers for the mockup service's screen, element and export tools.

pub mod element;

pub use element::{ElementDescriptor, ElementKind, Styled};

use crate::client::RpcClient;
use crate::rpc::{ImageContent, ToolOutput};
use crate::transport::{HttpTransport, Transport};
use crate::{Canvas, ClientConfig, Error, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const TOOL_ADD_SCREEN: &str = "mockup_add_screen";
pub const TOOL_BULK_ADD_ELEMENTS: &str = "mockup_bulk_add_elements";
pub const TOOL_EXPORT: &str = "mockup_export";

/// Rendering style of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenStyle {
    #[default]
    Flat,
    Wireframe,
}

impl ScreenStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenStyle::Flat => "flat",
            ScreenStyle::Wireframe => "wireframe",
        }
    }
}

/// Parameters for creating a screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSpec {
    pub name: String,
    pub canvas: Canvas,
    pub background: String,
    pub style: ScreenStyle,
}

impl ScreenSpec {
    /// A flat 1440x900 screen on a white background
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            canvas: Canvas::default(),
            background: "#FFFFFF".to_string(),
            style: ScreenStyle::default(),
        }
    }
}

/// A screen as created on the remote service
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Opaque id assigned by the service
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub style: ScreenStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub scale: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            scale: 1,
        }
    }
}

/// Outcome of an export call
#[derive(Debug, Clone)]
pub struct Export {
    pub output: ToolOutput,
    /// Image payloads found in the result, already base64-decoded
    pub images: Vec<ImageContent>,
}

/// Client for one project on the mockup service
pub struct MockupClient<T: Transport> {
    rpc: RpcClient<T>,
    project_id: String,
}

impl MockupClient<HttpTransport> {
    pub fn connect(config: ClientConfig, project_id: impl Into<String>) -> Result<Self> {
        let rpc = RpcClient::connect(&config)?;
        Ok(Self::new(rpc, project_id))
    }
}

impl<T: Transport> MockupClient<T> {
    pub fn new(rpc: RpcClient<T>, project_id: impl Into<String>) -> Self {
        Self {
            rpc,
            project_id: project_id.into(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn rpc(&self) -> &RpcClient<T> {
        &self.rpc
    }

    /// Create a screen and return it with its service-assigned id
    pub fn create_screen(&mut self, spec: &ScreenSpec) -> Result<Screen> {
        let output = self.rpc.call_tool(
            TOOL_ADD_SCREEN,
            json!({
                "project_id": self.project_id,
                "name": spec.name,
                "width": spec.canvas.width,
                "height": spec.canvas.height,
                "background": spec.background,
                "style": spec.style.as_str(),
            }),
        )?;

        let id = output.str_field("id").ok_or_else(|| {
            Error::UnexpectedResult(format!("{} returned no screen id: {:?}", TOOL_ADD_SCREEN, output))
        })?;
        info!("created screen {} ({})", spec.name, id);

        Ok(Screen {
            id: id.to_string(),
            name: spec.name.clone(),
            width: spec.canvas.width,
            height: spec.canvas.height,
            background: spec.background.clone(),
            style: spec.style,
        })
    }

    /// Upload all `elements` to `screen_id` in a single call.
    ///
    /// The batch is all-or-nothing from the client's side: there is no
    /// chunking and no partial retry.
    pub fn bulk_add_elements(&mut self, screen_id: &str, elements: &[ElementDescriptor]) -> Result<ToolOutput> {
        debug!("uploading {} elements to {}", elements.len(), screen_id);
        self.rpc.call_tool(
            TOOL_BULK_ADD_ELEMENTS,
            json!({
                "project_id": self.project_id,
                "screen_id": screen_id,
                "elements": elements,
            }),
        )
    }

    pub fn export(&mut self, screen_id: &str, options: ExportOptions) -> Result<Export> {
        let (output, raw) = self.rpc.call_tool_raw(
            TOOL_EXPORT,
            json!({
                "project_id": self.project_id,
                "screen_id": screen_id,
                "format": options.format.as_str(),
                "scale": options.scale,
            }),
        )?;
        let images = ImageContent::collect(&raw);
        Ok(Export { output, images })
    }
}

#[cfg(test)]
mod tests {
    use super::element::{button, rect, text};
    use super::*;
    use crate::client::testing::*;
    use crate::rpc::IdSequence;

    fn client(transport: &ScriptedTransport) -> MockupClient<&ScriptedTransport> {
        MockupClient::new(RpcClient::with_transport(transport, IdSequence::starting_at(600)), "proj_test")
    }

    #[test]
    fn create_screen_sends_canvas_and_reads_id() {
        let transport = ScriptedTransport::default().reply(text_reply(601, "{\"id\":\"scr_Q9k4\",\"name\":\"Home\"}"));
        let mut mockups = client(&transport);

        let screen = mockups.create_screen(&ScreenSpec::named("Home")).unwrap();
        assert_eq!(screen.id, "scr_Q9k4");
        assert_eq!(screen.width, 1440);

        let args = &transport.sent.borrow()[0]["params"]["arguments"];
        assert_eq!(
            *args,
            json!({
                "project_id": "proj_test", "name": "Home", "width": 1440, "height": 900,
                "background": "#FFFFFF", "style": "flat"
            })
        );
    }

    #[test]
    fn create_screen_without_id_is_unexpected() {
        let transport = ScriptedTransport::default().reply(text_reply(601, "created"));
        let mut mockups = client(&transport);
        assert!(matches!(
            mockups.create_screen(&ScreenSpec::named("Home")),
            Err(Error::UnexpectedResult(_))
        ));
    }

    #[test]
    fn bulk_add_keeps_order_and_properties() {
        let transport = ScriptedTransport::default().reply(text_reply(601, "{\"added\":3}"));
        let mut mockups = client(&transport);

        let elements = vec![
            rect(0, 0, 1440, 60, "#1A1A2E", "#1A1A2E").z(10),
            text(48, 16, 180, 28, "Acme Corp").color("#FFFFFF").size(20).bold().z(11),
            button(1296, 14, 120, 32, "Get Started", "outline", "sm").z(11),
        ];
        mockups.bulk_add_elements("scr_1", &elements).unwrap();

        let sent = transport.sent.borrow();
        let uploaded = sent[0]["params"]["arguments"]["elements"].as_array().unwrap();
        assert_eq!(uploaded.len(), 3);
        assert_eq!(uploaded[0]["type"], "rectangle");
        assert_eq!(uploaded[1]["type"], "text");
        assert_eq!(uploaded[2]["type"], "button");
        for (wire, original) in uploaded.iter().zip(&elements) {
            assert_eq!(wire["x"], original.x);
            assert_eq!(wire["y"], original.y);
            assert_eq!(wire["width"], original.width);
            assert_eq!(wire["height"], original.height);
            assert_eq!(wire["properties"], json!(original.properties));
        }
        assert_eq!(sent[0]["params"]["arguments"]["screen_id"], "scr_1");
    }

    #[test]
    fn export_collects_images() {
        let body = json!({
            "jsonrpc": "2.0", "id": 601,
            "result": {"content": [{"type": "image", "data": "iVBORw0KGgo=", "mimeType": "image/png"}]}
        })
        .to_string();
        let transport = ScriptedTransport::default().reply(body);
        let mut mockups = client(&transport);

        let export = mockups.export("scr_1", ExportOptions::default()).unwrap();
        assert!(matches!(export.output, ToolOutput::Raw(_)));
        assert_eq!(export.images.len(), 1);

        let args = &transport.sent.borrow()[0]["params"]["arguments"];
        assert_eq!(args["format"], "png");
        assert_eq!(args["scale"], 1);
    }
}
