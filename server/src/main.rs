use std::{fs::File, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use shared::{Content, ContentError, Message};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Optional content override next to the binary. Without it the page runs
/// on the built-in catalog.
const CONTENT_PATH: &str = "content.json";

#[derive(Clone)]
struct AppState {
    content: Arc<Content>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let state = AppState {
        content: Arc::new(load_content()),
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));

    info!("serving on http://{addr}");

    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await
        .unwrap();
}

fn app(state: AppState) -> Router {
    Router::new()
        .nest_service("/pkg", ServeDir::new("pkg"))
        .nest_service("/static", ServeDir::new("static"))
        .nest_service("/img", ServeDir::new("img"))
        .route_service("/", ServeFile::new("html/index.html"))
        .route("/api/content", get(get_content))
        .route("/api/*rest", get(unknown_api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn load_content() -> Content {
    match File::open(CONTENT_PATH) {
        Ok(file) => match serde_json::from_reader(file) {
            Ok(content) => {
                info!("loaded page content from {CONTENT_PATH}");
                content
            }
            Err(err) => {
                warn!("{CONTENT_PATH} did not parse ({err}); serving the built-in catalog");
                Content::catalog()
            }
        },
        Err(_) => {
            info!("no {CONTENT_PATH}; serving the built-in catalog");
            Content::catalog()
        }
    }
}

async fn get_content(State(state): State<AppState>) -> Json<Message> {
    Json(Message::Content(Box::new((*state.content).clone())))
}

async fn unknown_api(Path(rest): Path<String>) -> Json<Message> {
    Json(Message::ContentError(ContentError(format!(
        "no such resource: {rest}"
    ))))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> Router {
        app(AppState {
            content: Arc::new(Content::catalog()),
        })
    }

    #[tokio::test]
    async fn content_endpoint_serves_the_full_page() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/content")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let message: Message = serde_json::from_slice(&body).unwrap();

        match message {
            Message::Content(content) => {
                assert!(!content.profile.name.is_empty());
                assert!(!content.projects.is_empty());
                assert!(!content.posts.is_empty());
            }
            other => panic!("expected page content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_api_paths_answer_with_an_error_message() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/guestbook")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let message: Message = serde_json::from_slice(&body).unwrap();

        assert!(matches!(message, Message::ContentError(_)));
    }

    #[tokio::test]
    async fn content_round_trips_through_json() {
        let content = Content::catalog();
        let json = serde_json::to_string(&content).unwrap();
        let back: Content = serde_json::from_str(&json).unwrap();

        assert_eq!(back.profile.name, content.profile.name);
        assert_eq!(back.projects.len(), content.projects.len());
    }
}
