use axum::{Router, routing::get};
use contest_storage::ContestStore;

use super::handlers::{build_route, resolve_route};

pub fn routes() -> Router<ContestStore> {
    Router::new()
        .route("/resolve", get(resolve_route))
        .route("/build", get(build_route))
}
