pub mod health;
pub mod page;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(page::handle_resume_json))
        .route("/assets/site.css", get(page::handle_css))
        .route("/assets/site.js", get(page::handle_js))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::actions::qr::CanvasQrRenderer;
    use crate::config::Config;
    use crate::content::resume_data;
    use crate::models::ResumeDocument;

    fn test_state(public_url: Option<&str>) -> AppState {
        AppState {
            resume: Arc::new(resume_data().clone()),
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                public_url: public_url.map(str::to_string),
                resume_data: None,
            },
            qr: Arc::new(CanvasQrRenderer),
        }
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Option<String>, String) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = send(build_router(test_state(None)), request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "cv-site");
    }

    #[tokio::test]
    async fn test_page_without_host_omits_qr() {
        let (status, content_type, body) =
            send(build_router(test_state(None)), request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert!(body.contains("<h1>THOBEKA ZITHA</h1>"));
        assert!(!body.contains("<canvas"));
    }

    #[tokio::test]
    async fn test_page_uses_host_header_for_address() {
        let req = Request::builder()
            .uri("/")
            .header(header::HOST, "cv.local:8080")
            .body(Body::empty())
            .unwrap();
        let (_, _, body) = send(build_router(test_state(None)), req).await;
        assert!(body.contains(r#"data-qr-value="http://cv.local:8080/""#));
    }

    #[tokio::test]
    async fn test_page_prefers_public_url() {
        let req = Request::builder()
            .uri("/")
            .header(header::HOST, "internal:8080")
            .body(Body::empty())
            .unwrap();
        let app = build_router(test_state(Some("https://cv.example.com/")));
        let (_, _, body) = send(app, req).await;
        assert!(body.contains(r#"data-qr-value="https://cv.example.com/""#));
        assert!(!body.contains("internal:8080"));
    }

    #[tokio::test]
    async fn test_resume_json_matches_document() {
        let (status, _, body) =
            send(build_router(test_state(None)), request("/api/v1/resume")).await;
        assert_eq!(status, StatusCode::OK);
        let doc: ResumeDocument = serde_json::from_str(&body).unwrap();
        assert_eq!(&doc, resume_data());
    }

    #[tokio::test]
    async fn test_assets_served_with_content_types() {
        let (status, css_type, css) =
            send(build_router(test_state(None)), request("/assets/site.css")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(css_type.as_deref(), Some("text/css; charset=utf-8"));
        assert!(css.contains("@media print"));

        let (_, js_type, js) =
            send(build_router(test_state(None)), request("/assets/site.js")).await;
        assert_eq!(
            js_type.as_deref(),
            Some("application/javascript; charset=utf-8")
        );
        assert!(js.contains("window.print()"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _, body) = send(build_router(test_state(None)), request("/missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
