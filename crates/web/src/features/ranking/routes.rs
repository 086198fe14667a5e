use axum::{Router, routing::get};
use contest_storage::ContestStore;

use super::handlers::get_ranking;

pub fn routes() -> Router<ContestStore> {
    Router::new().route("/", get(get_ranking))
}
