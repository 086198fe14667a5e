use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Participant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Movement between two positions; a smaller position value means moving up.
    pub fn between(previous: Option<u32>, current: u32) -> Self {
        match previous {
            Some(previous) if current < previous => Self::Up,
            Some(previous) if current > previous => Self::Down,
            _ => Self::Stable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankingEntry {
    #[schema(value_type = Participant)]
    pub participant: Arc<Participant>,
    pub average_score: f64,
    pub vote_count: u32,
    pub position: u32,
    /// Position in the previously published ranking, `None` when absent from it.
    pub previous_position: Option<u32>,
    pub trend: Trend,
}

/// A full ranking computed from a fixed prefix of the vote log.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankingSnapshot {
    pub entries: Vec<RankingEntry>,
    /// Number of votes in the log prefix this ranking aggregates.
    pub log_len: usize,
    pub computed_at: DateTime<Utc>,
}

impl RankingSnapshot {
    pub fn entry(&self, participant_id: &str) -> Option<&RankingEntry> {
        self.entries
            .iter()
            .find(|entry| entry.participant.id == participant_id)
    }
}

/// A vote whose participant is not in the catalog. It is left out of aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DataIntegrityWarning {
    pub vote_id: Uuid,
    pub participant_id: String,
}

impl std::fmt::Display for DataIntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "vote {} references unknown participant '{}'",
            self.vote_id, self.participant_id
        )
    }
}
