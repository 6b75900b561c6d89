//! Full HTML page: prologue, head, and the rendered document body.

use crate::actions::qr::QrRenderer;
use crate::actions::share_link::ShareState;
use crate::models::ResumeDocument;
use crate::render::assets::QR_LIBRARY_URL;
use crate::render::document::render_document;
use crate::render::node::{el, Node};

pub const STYLESHEET_PATH: &str = "/assets/site.css";
pub const SCRIPT_PATH: &str = "/assets/site.js";

pub fn render_page(doc: &ResumeDocument, share: &ShareState, qr: &dyn QrRenderer) -> String {
    let head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(el("title").text(format!("{} — CV", doc.name)))
        .child(
            el("link")
                .attr("rel", "stylesheet")
                .attr("href", STYLESHEET_PATH),
        )
        .child(el("script").attr("src", QR_LIBRARY_URL).attr("defer", "defer"))
        .child(el("script").attr("src", SCRIPT_PATH).attr("defer", "defer"));

    let html: Node = el("html")
        .attr("lang", "en")
        .child(head)
        .child(el("body").child(render_document(doc, share, qr)))
        .into();

    let mut out = String::from("<!DOCTYPE html>\n");
    out.push_str(&html.to_html());
    out
}
