use crate::config::BackendConfig;
use crate::error::{ErrorBackend, Result};
use crate::infrastructure::db::connection::get_connection;
use crate::interfaces::post;
use crate::server::app_state::AppState;
use axum::http::StatusCode;
use posty_core::server::routes::all_backend_api_paths;
use posty_core::session::MockGenerator;
use std::sync::Arc;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, debug, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// `/api` routes plus request tracing and the 404 fallback.
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(post::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .nest("/api", routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the HTTP server.
///
/// # Behavior
/// - Connects to the database and runs pending migrations.
/// - Serves post generation, creation, lookup and per-user listing under `/api/v1`.
/// - Binds to the configured host/port and listens until the process stops.
#[tokio::main]
pub async fn http_server_backend(config: BackendConfig) -> Result<()> {
    let db = get_connection(&config).await?;
    let generator = Arc::new(MockGenerator::new(config.generation_latency));
    let app_state = Arc::new(AppState::new(db, generator));

    for path in all_backend_api_paths() {
        debug!("Route {path}");
    }

    let router = build_router(app_state);

    let host = &config.host;
    let port = &config.port;
    let protocol = &config.protocol;
    let listener = match tokio::net::TcpListener::bind(config.bind_address()).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::init_database::init_database;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    async fn router() -> axum::Router {
        let db = init_database("sqlite::memory:").await.unwrap();
        let generator = Arc::new(MockGenerator::new(Duration::ZERO));
        build_router(Arc::new(AppState::new(db, generator)))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_two_variants() {
        let response = router()
            .await
            .oneshot(post_json(
                "/api/v1/posts/generate",
                json!({ "prompt": "Je lance un nouveau produit" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let responses = body["responses"].as_array().unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["type"], "storytelling");
        assert_eq!(responses[1]["type"], "business");
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_prompt() {
        let response = router()
            .await
            .oneshot(post_json("/api/v1/posts/generate", json!({ "prompt": "  " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Prompt must not be empty");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/posts/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = router().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_created_post_is_listed_for_its_user() {
        let router = router().await;
        let created = router
            .clone()
            .oneshot(post_json(
                "/api/v1/posts",
                json!({
                    "user_id": "u1",
                    "prompt": "idée",
                    "variant_a": "histoire",
                    "variant_b": "business",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::OK);
        let created = body_json(created).await;
        assert_eq!(created["user_id"], "u1");

        let listed = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/u1/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(listed.status(), StatusCode::OK);
        let listed = body_json(listed).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], created["id"]);

        let other = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/u2/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(other).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_post_by_id() {
        let router = router().await;
        let created = router
            .clone()
            .oneshot(post_json(
                "/api/v1/posts",
                json!({ "user_id": "u1", "prompt": "idée", "variant_a": "a", "variant_b": "b" }),
            ))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap();

        let found = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/posts/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(found.status(), StatusCode::OK);
        assert_eq!(body_json(found).await, created);

        let missing = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/posts/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(missing).await["error"], "Post missing not found");
    }

    #[tokio::test]
    async fn test_create_without_user_is_bad_request() {
        let response = router()
            .await
            .oneshot(post_json(
                "/api/v1/posts",
                json!({ "user_id": "", "prompt": "idée", "variant_a": "a", "variant_b": "b" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back() {
        let response = router()
            .await
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
