use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use contest_storage::{ContestStore, dto::ranking::RankingView, models::RankingEntry};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/ranking",
    params(RankingView),
    responses(
        (status = 200, description = "Ranking retrieved successfully", body = Vec<RankingEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "ranking"
)]
pub async fn get_ranking(
    State(store): State<ContestStore>,
    Query(view): Query<RankingView>,
) -> Result<Response, WebError> {
    view.validate().map_err(WebError::BadRequest)?;

    let entries = services::get_ranking(store, view).await?;

    Ok(Json(entries).into_response())
}
