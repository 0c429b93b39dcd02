//! Element descriptors placed on a screen canvas

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Text,
    Button,
    Input,
    Image,
}

/// One visual item on a screen.
///
/// Geometry is in canvas pixels. Property keys depend on the kind and are
/// validated by the service, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl ElementDescriptor {
    pub fn new(kind: ElementKind, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            z_index: 0,
            properties: Map::new(),
        }
    }

    pub fn z(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set one property, replacing any previous value
    pub fn prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Rectangle with fill, stroke and corner radius
pub fn rect(x: u32, y: u32, w: u32, h: u32, fill: &str, stroke: &str) -> ElementDescriptor {
    ElementDescriptor::new(ElementKind::Rectangle, x, y, w, h)
        .prop("fill", fill)
        .prop("stroke", stroke)
        .prop("cornerRadius", 0)
}

/// Solid band where fill and stroke share a colour
pub fn band(x: u32, y: u32, w: u32, h: u32, color: &str) -> ElementDescriptor {
    rect(x, y, w, h, color, color)
}

/// Text block with the default style (`#333333`, 16px, normal, left)
pub fn text(x: u32, y: u32, w: u32, h: u32, content: &str) -> ElementDescriptor {
    ElementDescriptor::new(ElementKind::Text, x, y, w, h)
        .prop("content", content)
        .prop("color", "#333333")
        .prop("fontSize", 16)
        .prop("fontWeight", "normal")
        .prop("align", "left")
}

/// Button with the given variant (primary|secondary|outline|ghost) and size (sm|md|lg)
pub fn button(x: u32, y: u32, w: u32, h: u32, label: &str, variant: &str, size: &str) -> ElementDescriptor {
    ElementDescriptor::new(ElementKind::Button, x, y, w, h)
        .prop("label", label)
        .prop("variant", variant)
        .prop("size", size)
}

/// Input field; `field_label` renders above the field when present
pub fn input(x: u32, y: u32, w: u32, h: u32, placeholder: &str, field_label: Option<&str>) -> ElementDescriptor {
    let el = ElementDescriptor::new(ElementKind::Input, x, y, w, h).prop("placeholder", placeholder);
    match field_label {
        Some(label) => el.prop("label", label),
        None => el,
    }
}

/// Image placeholder; the service draws a wireframe cross
pub fn image(x: u32, y: u32, w: u32, h: u32) -> ElementDescriptor {
    ElementDescriptor::new(ElementKind::Image, x, y, w, h)
}

/// Style shortcuts used by the layout data
pub trait Styled {
    fn color(self, color: &str) -> Self;
    fn size(self, px: u32) -> Self;
    fn bold(self) -> Self;
    fn align(self, align: &str) -> Self;
    fn radius(self, px: u32) -> Self;
}

impl Styled for ElementDescriptor {
    fn color(self, color: &str) -> Self {
        self.prop("color", color)
    }

    fn size(self, px: u32) -> Self {
        self.prop("fontSize", px)
    }

    fn bold(self) -> Self {
        self.prop("fontWeight", "bold")
    }

    fn align(self, align: &str) -> Self {
        self.prop("align", align)
    }

    fn radius(self, px: u32) -> Self {
        self.prop("cornerRadius", px)
    }
}
