use std::sync::Arc;

use crate::actions::qr::QrRenderer;
use crate::config::Config;
use crate::models::ResumeDocument;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; never mutated.
    pub resume: Arc<ResumeDocument>,
    pub config: Config,
    /// Pluggable QR primitive. Default: `CanvasQrRenderer` (drawn client-side).
    pub qr: Arc<dyn QrRenderer>,
}
