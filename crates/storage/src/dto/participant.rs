use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Category, District, Participant, Trend};

/// A participant together with its live standing and shareable links.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParticipantSummary {
    #[schema(value_type = Participant)]
    pub participant: Arc<Participant>,
    pub position: Option<u32>,
    pub average_score: f64,
    pub vote_count: u32,
    pub trend: Trend,
    pub detail_path: String,
    pub vote_path: String,
}

/// Catalog filter. Both fields must match when set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParticipantFilter {
    pub category: Option<Category>,
    pub district: Option<District>,
}

impl ParticipantFilter {
    pub fn matches(&self, participant: &Participant) -> bool {
        self.category
            .is_none_or(|category| participant.category == category)
            && self
                .district
                .is_none_or(|district| participant.district == district)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Category,
    District,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParticipantGroupQuery {
    pub by: GroupBy,
}

/// Participants sharing one category or district. Empty groups are kept.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParticipantGroup {
    pub name: String,
    pub count: usize,
    #[schema(value_type = Vec<Participant>)]
    pub participants: Vec<Arc<Participant>>,
}
