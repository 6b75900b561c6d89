//! Static assets served alongside the page.
//!
//! `site_js()` is the browser side of the host seams in `crate::actions`:
//! print, clipboard with the two-second label revert, alert, and QR drawing.
//! It follows `ShareSession`: a missing or rejecting clipboard raises the
//! notice and leaves the label alone, and the copied value is the address
//! the server resolved (`data-address`), the same one the QR code encodes.

use crate::actions::share_link::{
    COPY_FAILED_NOTICE, COPY_LABEL_CONFIRMED, COPY_LABEL_IDLE, REVERT_AFTER,
};

/// Client-side QR drawing library; fills `canvas[data-qr-value]`.
/// Pinned to 1.4.4, the last release that ships the prebuilt browser bundle.
pub const QR_LIBRARY_URL: &str = "https://cdn.jsdelivr.net/npm/qrcode@1.4.4/build/qrcode.min.js";

pub const SITE_CSS: &str = r#"* { box-sizing: border-box; }
body {
    margin: 0;
    padding: 2rem 1rem;
    background: #f3f4f6;
    color: #374151;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    -webkit-font-smoothing: antialiased;
}
.resume {
    max-width: 56rem;
    margin: 0 auto;
    background: #fff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    display: grid;
    grid-template-columns: 1fr 2fr;
}
.sidebar { background: #F3EFEA; padding: 2rem; }
.main-column { padding: 2rem; }
.avatar {
    width: 7rem; height: 7rem; margin: 0 auto 3rem;
    border-radius: 50%; background: #D8C4A6;
    display: flex; align-items: center; justify-content: center;
    box-shadow: 0 0 0 4px rgba(255, 255, 255, 0.5);
}
.initials { font-size: 2.25rem; font-weight: 700; color: #fff; }
section { margin-bottom: 2rem; font-size: 0.875rem; line-height: 1.6; }
.section-title {
    font-size: 0.875rem; font-weight: 700; text-transform: uppercase;
    letter-spacing: 0.1em; color: #A98B74; margin: 0 0 1rem;
}
.identity h1 { font-size: 3rem; margin: 0; color: #1f2937; letter-spacing: -0.025em; }
.tagline { font-size: 1.125rem; color: #A98B74; margin-top: 0.5rem; font-weight: 500; }
.contact-item { display: block; color: #374151; text-decoration: none; margin-bottom: 0.75rem; }
.contact-item:hover { color: #A98B74; }
.skill h3, .project h3 { margin: 0 0 0.25rem; color: #1f2937; }
.skill h3 { font-size: 0.875rem; }
.project { margin-bottom: 1.5rem; break-inside: avoid; }
.project h3 { font-size: 1rem; }
.subtitle { color: #6b7280; font-weight: 400; font-size: 0.875rem; }
.project-link { display: block; color: #2563eb; margin-bottom: 0.5rem; text-decoration: none; }
.project-link:hover { text-decoration: underline; }
.details { padding-left: 1.25rem; color: #4b5563; }
.degree { font-weight: 600; color: #1f2937; margin: 0; }
.period { font-size: 0.75rem; color: #4b5563; margin: 0 0 1rem; }
.label { font-weight: 600; }
.objective { font-style: italic; color: #4b5563; }
.action-bar { position: fixed; top: 1rem; right: 1rem; z-index: 10; }
.action-button {
    background: #D8C4A6; color: #fff; font-weight: 700; border: 0;
    padding: 0.5rem 1rem; border-radius: 0.5rem; cursor: pointer;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.action-button:hover { background: #c9b494; }
.qr { margin-top: 1rem; }
@media (max-width: 768px) {
    .resume { grid-template-columns: 1fr; }
}
@media print {
    body { background: #fff; padding: 0; }
    .resume { box-shadow: none; margin: 0; grid-template-columns: 1fr 2fr; }
    .no-print { display: none !important; }
}
"#;

/// Browser bindings, with the label texts and delay filled in.
pub fn site_js() -> String {
    SITE_JS_TEMPLATE
        .replace("__LABEL_IDLE__", COPY_LABEL_IDLE)
        .replace("__LABEL_CONFIRMED__", COPY_LABEL_CONFIRMED)
        .replace("__FAILED_NOTICE__", COPY_FAILED_NOTICE)
        .replace("__REVERT_MS__", &REVERT_AFTER.as_millis().to_string())
}

const SITE_JS_TEMPLATE: &str = r#"(function () {
  var revertTimer = null;

  function copyFailed() {
    window.alert("__FAILED_NOTICE__");
  }

  function copyLink(button) {
    var address = button.dataset.address || window.location.href;
    if (!navigator.clipboard || !navigator.clipboard.writeText) {
      copyFailed();
      return;
    }
    var pending;
    try {
      pending = navigator.clipboard.writeText(address);
    } catch (err) {
      copyFailed();
      return;
    }
    pending.then(function () {
      button.textContent = "__LABEL_CONFIRMED__";
      if (revertTimer !== null) { clearTimeout(revertTimer); }
      revertTimer = setTimeout(function () {
        button.textContent = "__LABEL_IDLE__";
        revertTimer = null;
      }, __REVERT_MS__);
    }, copyFailed);
  }

  function drawCodes() {
    if (!window.QRCode) { return; }
    document.querySelectorAll("canvas[data-qr-value]").forEach(function (canvas) {
      window.QRCode.toCanvas(canvas, canvas.dataset.qrValue, {
        width: Number(canvas.getAttribute("width")),
        errorCorrectionLevel: canvas.dataset.qrLevel
      });
    });
  }

  document.addEventListener("click", function (event) {
    var target = event.target.closest("[data-action]");
    if (!target) { return; }
    if (target.dataset.action === "print") { window.print(); }
    if (target.dataset.action === "copy-link") { copyLink(target); }
  });

  window.addEventListener("load", drawCodes);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_js_has_no_placeholders_left() {
        let js = site_js();
        assert!(!js.contains("__"));
        assert!(js.contains("\"Copied!\""));
        assert!(js.contains("\"Copy Link\""));
        assert!(js.contains("}, 2000);"));
        assert!(js.contains("window.alert(\"Failed to copy link.\")"));
    }

    #[test]
    fn test_copy_without_clipboard_api_raises_notice() {
        let js = site_js();
        let guard = js
            .find("if (!navigator.clipboard || !navigator.clipboard.writeText) {")
            .unwrap();
        let write = js.find("navigator.clipboard.writeText(address)").unwrap();
        assert!(guard < write);
        assert!(js[guard..write].contains("copyFailed();\n      return;"));
        assert!(js.contains("} catch (err) {\n      copyFailed();"));
    }

    #[test]
    fn test_copy_rejection_raises_notice_without_label_change() {
        let js = site_js();
        assert!(js.contains("}, copyFailed);"));
        let failed = &js[js.find("function copyFailed()").unwrap()..js.find("function copyLink").unwrap()];
        assert!(!failed.contains("textContent"));
    }

    #[test]
    fn test_copy_uses_server_resolved_address_first() {
        let js = site_js();
        assert!(js.contains("var address = button.dataset.address || window.location.href;"));
        assert!(!js.contains("writeText(window.location.href)"));
    }

    #[test]
    fn test_bindings_follow_share_session_constants() {
        let js = site_js();
        assert!(js.contains(&format!("}}, {});", REVERT_AFTER.as_millis())));
        assert!(js.contains(&format!("button.textContent = \"{COPY_LABEL_CONFIRMED}\";")));
        assert!(js.contains(&format!("button.textContent = \"{COPY_LABEL_IDLE}\";")));
        assert_eq!(js.matches("window.print()").count(), 1);
    }

    #[test]
    fn test_qr_library_pinned_to_browser_bundle_release() {
        assert!(QR_LIBRARY_URL.contains("qrcode@1.4.4/build/qrcode.min.js"));
    }

    #[test]
    fn test_stylesheet_hides_actions_when_printing() {
        let print_rules = SITE_CSS.split("@media print").nth(1).unwrap();
        assert!(print_rules.contains(".no-print { display: none !important; }"));
    }
}
