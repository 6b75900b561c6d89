//! Shareable code for the page address.
#![allow(dead_code)]
//!
//! Drawing the code is the host's job. The renderer only describes what to
//! draw (payload, size, error-correction level) and leaves the block out
//! entirely while the address is unknown.

use crate::render::node::{el, Node};

/// Pixel size of the rendered code.
pub const QR_SIZE_PX: u32 = 128;

/// Error-correction level requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrLevel {
    L,
    M,
    Q,
    H,
}

impl QrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrLevel::L => "L",
            QrLevel::M => "M",
            QrLevel::Q => "Q",
            QrLevel::H => "H",
        }
    }
}

/// Produces a renderable scannable code. Treated as an opaque primitive.
pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str, size_px: u32, level: QrLevel) -> Node;
}

/// Emits a `<canvas>` carrying the payload; `site.js` draws the code into it.
pub struct CanvasQrRenderer;

impl QrRenderer for CanvasQrRenderer {
    fn render(&self, payload: &str, size_px: u32, level: QrLevel) -> Node {
        el("canvas")
            .class("qr-code")
            .attr("data-qr-value", payload)
            .attr("data-qr-level", level.as_str())
            .attr("width", size_px.to_string())
            .attr("height", size_px.to_string())
            .attr("role", "img")
            .attr("aria-label", format!("QR code for {payload}"))
            .into()
    }
}

/// Renders the code for `current_address`, or nothing while it is unknown.
pub fn produce_shareable_code(current_address: Option<&str>, qr: &dyn QrRenderer) -> Option<Node> {
    let address = current_address.filter(|a| !a.trim().is_empty())?;
    Some(qr.render(address, QR_SIZE_PX, QrLevel::H))
}
