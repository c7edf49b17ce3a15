use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod inject;
mod handlers {
    pub mod alex_handlers;
}

use config::EdgeConfig;
use handlers::alex_handlers;

pub struct EdgeState {
    pub config: EdgeConfig,
}

async fn health_check() -> &'static str {
    "OK"
}

/// Routes: the injected voice page, a health probe, and the static site
/// with `index.html` as the fallback for client-side routes.
pub fn app(state: Arc<EdgeState>) -> Router {
    let assets_dir = &state.config.assets_dir;
    let static_site = ServeDir::new(assets_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(assets_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/alex.html", get(alex_handlers::serve_alex))
        .route("/alex.html/", get(alex_handlers::serve_alex))
        .route("/alex", get(alex_handlers::serve_alex))
        .fallback_service(static_site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = EdgeConfig::from_env().context("loading edge configuration")?;
    if config.vapi.is_none() {
        warn!("VAPI_ASSISTANT_ID or VAPI_PUBLIC_KEY missing, alex.html is served without voice config");
    }
    if !config.assets_dir.is_dir() {
        warn!("Assets directory {} does not exist", config.assets_dir.display());
    }

    let bind_addr = config.bind_addr;
    info!("Serving {} on http://{}", config.assets_dir.display(), bind_addr);
    let app = app(Arc::new(EdgeState { config }));

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("edge server stopped")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::VapiCredentials;

    const ALEX_HTML: &str = "<html><head><title>Alex</title></head><body>alex</body></html>";
    const INDEX_HTML: &str = "<html><head></head><body>index</body></html>";

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alex.html"), ALEX_HTML).unwrap();
        fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1);").unwrap();
        dir
    }

    fn router(dir: &TempDir, vapi: Option<VapiCredentials>) -> Router {
        app(Arc::new(EdgeState {
            config: EdgeConfig {
                assets_dir: dir.path().to_path_buf(),
                bind_addr: "127.0.0.1:0".parse().unwrap(),
                vapi,
            },
        }))
    }

    fn credentials() -> Option<VapiCredentials> {
        Some(VapiCredentials {
            assistant_id: "asst_123".to_string(),
            public_key: "pk_456".to_string(),
        })
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn alex_page_gets_vapi_config() {
        let dir = site();
        for uri in ["/alex.html", "/alex.html/"] {
            let (status, content_type, body) = get(router(&dir, credentials()), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(content_type.as_deref(), Some("text/html;charset=UTF-8"));
            assert!(body.contains(r#"window.VAPI_CONFIG = {"assistantId":"asst_123","publicKey":"pk_456"};"#));
            assert!(body.find("VAPI_CONFIG").unwrap() < body.find("</head>").unwrap());
        }
    }

    #[tokio::test]
    async fn alex_page_is_unchanged_without_credentials() {
        let dir = site();
        let (status, _, body) = get(router(&dir, None), "/alex.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ALEX_HTML);
    }

    #[tokio::test]
    async fn missing_alex_page_is_not_found() {
        let dir = site();
        fs::remove_file(dir.path().join("alex.html")).unwrap();
        let (status, _, body) = get(router(&dir, credentials()), "/alex.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn other_files_are_served_as_is() {
        let dir = site();
        let (status, _, body) = get(router(&dir, credentials()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1);");

        let (_, _, body) = get(router(&dir, credentials()), "/index.html").await;
        assert!(!body.contains("VAPI_CONFIG"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = site();
        let (status, _, body) = get(router(&dir, None), "/some/client/route").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let dir = site();
        let (status, _, body) = get(router(&dir, None), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
