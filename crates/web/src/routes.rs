use std::time::Duration;

use axum::{Router, routing::get};
use contest_storage::ContestStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::WebError;
use crate::features::{navigation, participants, ranking, stats, votes};
use crate::openapi::ApiDoc;

pub fn router(store: ContestStore, cors_max_age: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(cors_max_age);

    let api = Router::new()
        .nest("/votes", votes::routes::routes())
        .nest("/ranking", ranking::routes::routes())
        .nest("/participants", participants::routes::routes())
        .nest("/stats", stats::routes::routes())
        .nest("/routes", navigation::routes::routes());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .layer(cors)
        .with_state(store)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> WebError {
    WebError::NotFound
}
