use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveRouteQuery {
    /// Shareable path such as `#/vote/la-burger-triana`.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BuildRouteQuery {
    /// Page name (`participant-detail`) or path segment (`participant`).
    pub page: String,
    pub participant_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PathResponse {
    pub path: String,
}
