use axum::{Router, routing::get};
use contest_storage::ContestStore;

use super::handlers::get_stats;

pub fn routes() -> Router<ContestStore> {
    Router::new().route("/", get(get_stats))
}
