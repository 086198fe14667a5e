use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use contest_storage::{
    ContestStore,
    dto::route::{BuildRouteQuery, PathResponse, ResolveRouteQuery},
    models::Route,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/routes/resolve",
    params(ResolveRouteQuery),
    responses(
        (status = 200, description = "Route resolved; unknown paths resolve to the home page", body = Route)
    ),
    tag = "navigation"
)]
pub async fn resolve_route(
    State(store): State<ContestStore>,
    Query(query): Query<ResolveRouteQuery>,
) -> Result<Response, WebError> {
    let route = services::resolve(&store, &query.path);

    Ok(Json(route).into_response())
}

#[utoipa::path(
    get,
    path = "/api/routes/build",
    params(BuildRouteQuery),
    responses(
        (status = 200, description = "Shareable path built", body = PathResponse),
        (status = 400, description = "Unknown page")
    ),
    tag = "navigation"
)]
pub async fn build_route(
    State(store): State<ContestStore>,
    Query(query): Query<BuildRouteQuery>,
) -> Result<Response, WebError> {
    let path = services::build(&store, &query.page, query.participant_id.as_deref())?;

    Ok(Json(PathResponse { path }).into_response())
}
