use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::contact::{repo::seaorm::SeaOrmContactRepository, ContactRepository, ContactService};

use crate::openapi::ApiDoc;

pub mod contacts;

/// Shared handler state; the repository behind the service is chosen at startup.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<ContactService<dyn ContactRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { contacts: Arc::new(ContactService::new(repo)) }
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmContactRepository::new(db)))
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .route("/api/v1/contacts", get(contacts::list).post(contacts::create))
        .route(
            "/api/v1/contacts/:id",
            get(contacts::get).put(contacts::update).delete(contacts::delete),
        );

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
