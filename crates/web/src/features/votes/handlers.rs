use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contest_storage::{
    ContestStore,
    dto::vote::{SubmitVoteRequest, VoteListQuery},
    models::Vote,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/votes",
    request_body = SubmitVoteRequest,
    responses(
        (status = 201, description = "Vote recorded", body = Vote),
        (status = 400, description = "Invalid rating or comment"),
        (status = 404, description = "Participant not found")
    ),
    tag = "votes"
)]
pub async fn submit_vote(
    State(store): State<ContestStore>,
    Json(req): Json<SubmitVoteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let vote = services::submit_vote(&store, &req)?;

    Ok((StatusCode::CREATED, Json(vote)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/votes",
    params(VoteListQuery),
    responses(
        (status = 200, description = "Votes of the participant, newest first", body = Vec<Vote>),
        (status = 404, description = "Participant not found")
    ),
    tag = "votes"
)]
pub async fn list_votes(
    State(store): State<ContestStore>,
    Query(query): Query<VoteListQuery>,
) -> Result<Response, WebError> {
    let votes = services::list_votes(&store, &query.participant_id)?;

    Ok(Json(votes).into_response())
}
