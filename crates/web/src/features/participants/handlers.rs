use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use contest_storage::{
    ContestStore,
    dto::participant::{
        ParticipantFilter, ParticipantGroup, ParticipantGroupQuery, ParticipantSummary,
    },
    models::Participant,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participants",
    params(ParticipantFilter),
    responses(
        (status = 200, description = "Participants matching the filter", body = Vec<Participant>),
        (status = 400, description = "Unknown category or district")
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(store): State<ContestStore>,
    Query(filter): Query<ParticipantFilter>,
) -> Result<Response, WebError> {
    let participants = services::list_participants(&store, &filter);

    Ok(Json(participants).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/groups",
    params(ParticipantGroupQuery),
    responses(
        (status = 200, description = "Participants grouped by category or district", body = Vec<ParticipantGroup>),
        (status = 400, description = "Missing or unknown grouping")
    ),
    tag = "participants"
)]
pub async fn list_participant_groups(
    State(store): State<ContestStore>,
    Query(query): Query<ParticipantGroupQuery>,
) -> Result<Response, WebError> {
    let groups = services::list_participant_groups(&store, query);

    Ok(Json(groups).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{slug}",
    params(
        ("slug" = String, Path, description = "Participant slug")
    ),
    responses(
        (status = 200, description = "Participant found", body = ParticipantSummary),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(store): State<ContestStore>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let summary = services::get_participant(&store, &slug)?;

    Ok(Json(summary).into_response())
}
