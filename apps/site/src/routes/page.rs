use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse},
    Json,
};
use tracing::debug;

use crate::actions::location::{FixedLocation, LocationHost, RequestLocation};
use crate::actions::share_link::ShareState;
use crate::models::ResumeDocument;
use crate::render::assets::{site_js, SITE_CSS};
use crate::render::render_page;
use crate::state::AppState;

/// GET /
/// Renders the CV page. Each request is a fresh mount: idle copy label and
/// an address resolved from `PUBLIC_URL` or the request itself.
pub async fn handle_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let location: Box<dyn LocationHost> = match &state.config.public_url {
        Some(url) => Box::new(FixedLocation(url.clone())),
        None => Box::new(RequestLocation {
            host: headers
                .get(header::HOST)
                .and_then(|h| h.to_str().ok())
                .map(str::to_string),
            path: uri.path().to_string(),
        }),
    };
    let share = ShareState::mounted(location.as_ref());
    debug!(address = ?share.current_address, "Rendering CV page");

    Html(render_page(&state.resume, &share, state.qr.as_ref()))
}

/// GET /api/v1/resume
pub async fn handle_resume_json(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.resume.as_ref().clone())
}

/// GET /assets/site.css
pub async fn handle_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

/// GET /assets/site.js
pub async fn handle_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        site_js(),
    )
}
