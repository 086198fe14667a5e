use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use contest_storage::{ContestStore, dto::ranking::ContestStats};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Contest statistics retrieved successfully", body = ContestStats)
    ),
    tag = "stats"
)]
pub async fn get_stats(State(store): State<ContestStore>) -> Result<Response, WebError> {
    let stats = services::get_stats(store).await?;

    Ok(Json(stats).into_response())
}
