//! Repohub HTTP Server
//!
//! Axum adapter exposing the repository store over HTTP. Every request
//! passes through the request logger; the three `:id` routes additionally
//! pass through the identifier validator before reaching their handler.

use crate::domain::entities::{NewRepository, Repository, RepositoryPatch};
use crate::domain::ports::{RepositoryStore, StoreError};
use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

/// Client-visible API failures.
///
/// Both map to HTTP 400 with a single-field JSON body; a missing record
/// is reported as 400, never 404.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid project ID.")]
    InvalidId,
    #[error("Repository not found!")]
    NotFound,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// The single store behind all routes
    pub store: Arc<dyn RepositoryStore>,
}

/// HTTP server for the repository API.
pub struct HttpServer {
    listen_addr: String,
    state: AppState,
}

impl HttpServer {
    pub fn new(listen_addr: String, store: Arc<dyn RepositoryStore>) -> Self {
        Self {
            listen_addr,
            state: AppState { store },
        }
    }

    /// Build the router (exposed for integration tests).
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Run the HTTP server until the process exits.
    pub async fn run(&self) -> anyhow::Result<()> {
        let app = self.router();

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("repohub API listening on {}", self.listen_addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// Assemble the route table and middleware pipeline.
///
/// CORS runs outermost, then the request logger, then per-route id
/// validation on the three `:id` routes.
fn build_router(state: AppState) -> Router {
    let id_routes = Router::new()
        .route(
            "/repositories/:id",
            put(update_repository).delete(delete_repository),
        )
        .route("/repositories/:id/like", post(like_repository))
        .route_layer(middleware::from_fn(validate_repository_id));

    Router::new()
        .route("/repositories", get(list_repositories).post(create_repository))
        .merge(id_routes)
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Middleware stages

/// Log each request's method+path label and elapsed time on completion.
///
/// Observational only: the request and response pass through untouched.
async fn log_requests(req: Request, next: Next) -> Response {
    let label = format!("[{}] {}", req.method(), req.uri().path());
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!("{}: {:?}", label, started.elapsed());
    response
}

/// Reject requests whose path id is not a well-formed UUID.
///
/// Syntactic check only; whether a record with that id exists is decided
/// by the store. Short-circuits before the handler runs.
async fn validate_repository_id(Path(id): Path<String>, req: Request, next: Next) -> Response {
    if Uuid::parse_str(&id).is_err() {
        return ApiError::InvalidId.into_response();
    }

    next.run(req).await
}

// Handler functions

async fn list_repositories(State(state): State<AppState>) -> Json<Vec<Repository>> {
    Json(state.store.list().await)
}

async fn create_repository(
    State(state): State<AppState>,
    Json(new): Json<NewRepository>,
) -> Json<Repository> {
    let created = state.store.create(new).await;
    tracing::debug!("created repository {}", created.id);
    Json(created)
}

async fn update_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RepositoryPatch>,
) -> Result<Json<Repository>, ApiError> {
    let updated = state.store.update(&id, patch).await?;
    Ok(Json(updated))
}

async fn delete_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await?;
    tracing::debug!("deleted repository {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn like_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Repository>, ApiError> {
    let liked = state.store.like(&id).await?;
    Ok(Json(liked))
}
