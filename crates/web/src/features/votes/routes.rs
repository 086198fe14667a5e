use axum::{Router, routing::get};
use contest_storage::ContestStore;

use super::handlers::{list_votes, submit_vote};

pub fn routes() -> Router<ContestStore> {
    Router::new().route("/", get(list_votes).post(submit_vote))
}
