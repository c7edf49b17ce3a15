use std::convert::Infallible;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, warn};

use crate::error::EdgeError;
use crate::inject::inject_vapi_config;
use crate::EdgeState;

pub const ALEX_PAGE: &str = "alex.html";

async fn read_page(path: &Path) -> Result<String, EdgeError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| EdgeError::io(path, e))
}

/// Serves `alex.html` with the Vapi config script injected when both
/// credentials are configured.
pub async fn serve_alex(State(state): State<Arc<EdgeState>>, request: Request) -> Response {
    let path = state.config.assets_dir.join(ALEX_PAGE);

    match read_page(&path).await {
        Ok(html) => match &state.config.vapi {
            Some(credentials) => {
                debug!("Injecting Vapi config into {}", path.display());
                (
                    [(header::CONTENT_TYPE, "text/html;charset=UTF-8")],
                    inject_vapi_config(&html, credentials),
                )
                    .into_response()
            }
            None => Html(html).into_response(),
        },
        Err(e) if e.is_not_found() => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(e) => {
            warn!("{}, serving alex.html without injection", e);
            serve_file(&path, request).await
        }
    }
}

async fn serve_file(path: &Path, request: Request) -> Response {
    let result: Result<_, Infallible> = ServeFile::new(path).oneshot(request).await;
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
