use axum::{http::header, response::IntoResponse, routing::get, Json, Router};
use thiserror::Error;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::ServerConfig;
use crate::projects::{self, ProjectCard};
use crate::route::Route;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Serves the built bundle. Every prerenderable page answers with
/// `index.html`; other unknown paths get it too, but with a 404 status.
pub fn router(config: &ServerConfig) -> Router {
    let static_service =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(config.index_file()));

    let router = Route::static_paths()
        .iter()
        .fold(Router::new(), |router, path| {
            router.route_service(path, ServeFile::new(config.index_file()))
        });

    router
        .route("/api/projects", get(list_projects))
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let address = config.socket_address();
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    info!(
        dist_dir = %config.dist_dir.display(),
        "portfolio listening on http://{address}"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn list_projects() -> impl IntoResponse {
    let cards: Vec<ProjectCard> = projects::cards();
    (
        [(header::CACHE_CONTROL, "public, max-age=300")],
        Json(cards),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_config(dist_dir: PathBuf) -> ServerConfig {
        ServerConfig {
            dist_dir,
            ..ServerConfig::default()
        }
    }

    fn temp_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dist");
        std::fs::write(dir.join("index.html"), "<main id=\"app\"></main>").expect("write index");
        dir
    }

    #[tokio::test]
    async fn projects_endpoint_lists_cards_in_order() {
        let app = router(&test_config(PathBuf::from("missing-dist")));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/projects")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let cards: Vec<ProjectCard> = serde_json::from_slice(&body).expect("card array");
        assert_eq!(cards, projects::cards());
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("valid request"))
            .await
            .expect("router responds");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn project_pages_are_served_from_index() {
        let dist = temp_dist("project-pages");
        let app = router(&test_config(dist.clone()));

        for path in Route::static_paths() {
            let (status, body) = fetch(app.clone(), &path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.contains("id=\"app\""), "{path}");
        }

        let _ = std::fs::remove_dir_all(dist);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index_with_not_found() {
        let dist = temp_dist("fallback");
        let app = router(&test_config(dist.clone()));

        let (status, body) = fetch(app, "/projects/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("id=\"app\""));

        let _ = std::fs::remove_dir_all(dist);
    }

    #[test]
    fn bind_error_names_the_address() {
        let err = ServerError::Bind {
            address: "0.0.0.0:80".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:80: denied");
    }
}
