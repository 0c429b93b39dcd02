//! Static page layouts.
//!
//! Layouts are plain data: each page function returns its element list in
//! stacking order and never performs I/O. Coordinates are literal pixels on
//! the 1440x900 canvas.

pub mod corporate;

use crate::mockup::element::{band, button, text, ElementDescriptor, Styled};

pub const NAVY: &str = "#1A1A2E";
pub const INDIGO: &str = "#4F46E5";
pub const LIGHT_INDIGO: &str = "#EEF2FF";
pub const SLATE: &str = "#64748B";
pub const WHITE: &str = "#FFFFFF";
pub const LIGHT: &str = "#F8FAFC";
pub const BORDER: &str = "#E2E8F0";

const NAV_ITEMS: [(&str, u32); 5] = [
    ("Home", 502),
    ("About", 592),
    ("Services", 674),
    ("Portfolio", 764),
    ("Contact", 856),
];

/// Top navigation bar with `active` highlighted
pub fn navbar(active: &str) -> Vec<ElementDescriptor> {
    let mut els = vec![
        band(0, 0, 1440, 60, NAVY).z(10),
        text(48, 16, 180, 28, "Acme Corp").color(WHITE).size(20).bold().z(11),
    ];
    for (name, x) in NAV_ITEMS {
        let color = if name == active { WHITE } else { "#A5B4FC" };
        els.push(text(x, 18, 80, 24, name).color(color).size(14).z(11));
    }
    els.push(button(1296, 14, 120, 32, "Get Started", "outline", "sm").z(11));
    els
}

pub fn footer() -> Vec<ElementDescriptor> {
    vec![
        band(0, 840, 1440, 60, "#0F0F1A"),
        text(48, 855, 160, 22, "Acme Corp").color(WHITE).bold(),
        text(480, 862, 480, 18, "© 2026 Acme Corp. All rights reserved.")
            .color("#475569")
            .size(13)
            .align("center"),
        text(1240, 862, 160, 18, "Privacy · Terms · Contact").color("#475569").size(12),
    ]
}

/// Full-width coloured banner with a centred title and subtitle
pub fn hero(title: &str, subtitle: &str, y: u32, h: u32, bg: &str) -> Vec<ElementDescriptor> {
    vec![
        band(0, y, 1440, h, bg),
        text(200, y + 56, 1040, 64, title).color(WHITE).size(44).bold().align("center"),
        text(320, y + 132, 800, 52, subtitle).color("#C7D2FE").size(17).align("center"),
    ]
}
