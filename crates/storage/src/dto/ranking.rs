use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Category, District, RankingEntry};

pub const MAX_VIEW_LIMIT: u32 = 100;

/// Primary ordering key of a ranking view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Score,
    #[serde(alias = "vote_count")]
    Votes,
}

/// Filter and ordering applied on top of the published ranking.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RankingView {
    pub category: Option<Category>,
    pub district: Option<District>,
    #[serde(default)]
    pub sort_by: SortKey,
    /// Keep only the first `limit` entries of the view.
    pub limit: Option<u32>,
}

impl RankingView {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit
            && (limit < 1 || limit > MAX_VIEW_LIMIT)
        {
            return Err(format!("limit must be between 1 and {}", MAX_VIEW_LIMIT));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContestStats {
    pub total_votes: usize,
    pub total_participants: usize,
    pub top: Vec<RankingEntry>,
}
