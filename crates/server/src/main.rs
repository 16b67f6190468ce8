mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use config::Config;

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";
const CACHE_NONE: &str = "no-cache";

const PLACEHOLDER_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>TetraPak Champions</title></head>
<body>
<h1>TetraPak Champions</h1>
<p>Frontend not built yet. Bundle the web app into the dist directory and reload.</p>
</body>
</html>"#;

#[derive(Clone)]
struct AppState {
    dist_dir: Arc<PathBuf>,
}

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(CACHE_CONTROL, HeaderValue::from_static(cache_header));
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

/// Build the full application router. Hashed bundle files live under
/// `/assets`, unhashed ones under `/static`; every other path is a client
/// route and gets the SPA shell.
fn build_app(dist_dir: &Path) -> Router {
    let state = AppState {
        dist_dir: Arc::new(dist_dir.to_path_buf()),
    };

    // The shell fallback carries state; the file routers are stateless
    Router::new()
        .fallback(serve_index)
        .with_state(state)
        .nest("/assets", cached_static_router(&dist_dir.join("assets"), CACHE_IMMUTABLE))
        .nest("/static", cached_static_router(&dist_dir.join("static"), CACHE_1DAY))
        .layer(CompressionLayer::new())
}

async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    let path = state.dist_dir.join("index.html");
    let html = match tokio::fs::read_to_string(&path).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "index.html unavailable, serving placeholder");
            PLACEHOLDER_INDEX.to_string()
        }
    };
    ([(CACHE_CONTROL, CACHE_NONE)], Html(html))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let app = build_app(&config.dist_dir);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        dist_dir = %config.dist_dir.display(),
        "Serving champions portal"
    );

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use tower::ServiceExt;

    /// Lay out a fake bundle: `index.html`, one hashed asset and one static file.
    fn temp_bundle() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>shell</html>").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/main-abc123.css"), "body{}").unwrap();
        std::fs::create_dir(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/robots.txt"), "User-agent: *").unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> Response<Body> {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(resp: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn cache_control(resp: &Response<Body>) -> &str {
        resp.headers().get("cache-control").unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn test_hashed_assets_have_immutable_cache() {
        let dist = temp_bundle();
        let resp = get(build_app(dist.path()), "/assets/main-abc123.css").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(cache_control(&resp), CACHE_IMMUTABLE);
    }

    #[tokio::test]
    async fn test_static_files_have_1day_cache() {
        let dist = temp_bundle();
        let resp = get(build_app(dist.path()), "/static/robots.txt").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(cache_control(&resp), CACHE_1DAY);
    }

    #[tokio::test]
    async fn test_missing_asset_returns_404() {
        let dist = temp_bundle();
        let resp = get(build_app(dist.path()), "/assets/nonexistent.js").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        let dist = temp_bundle();
        let app = build_app(dist.path());

        for uri in ["/", "/dashboard", "/emea-leaderboard", "/profile/Wang%20Li", "/no/such/page"] {
            let resp = get(app.clone(), uri).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(cache_control(&resp), CACHE_NONE, "{uri}");
            assert_eq!(body_text(resp).await, "<html>shell</html>", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_missing_bundle_serves_placeholder() {
        let empty = tempfile::tempdir().unwrap();
        let resp = get(build_app(empty.path()), "/leaderboard").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Frontend not built yet"));
    }

    #[tokio::test]
    async fn test_asset_and_index_policies_differ() {
        let dist = temp_bundle();
        let app = build_app(dist.path());

        let asset = get(app.clone(), "/assets/main-abc123.css").await;
        let index = get(app, "/resources").await;

        assert_ne!(cache_control(&asset), cache_control(&index));
        assert!(cache_control(&asset).contains("max-age=31536000"));
        assert_eq!(cache_control(&index), "no-cache");
    }
}
