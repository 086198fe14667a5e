use axum::{Router, routing::get};
use contest_storage::ContestStore;

use super::handlers::{get_participant, list_participant_groups, list_participants};

pub fn routes() -> Router<ContestStore> {
    Router::new()
        .route("/", get(list_participants))
        .route("/groups", get(list_participant_groups))
        .route("/:slug", get(get_participant))
}
