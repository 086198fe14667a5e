use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

/// Navigable pages of the contest site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Ranking,
    Participants,
    ParticipantDetail,
    Vote,
    Calendar,
    Map,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Self::Home,
            Self::Ranking,
            Self::Participants,
            Self::ParticipantDetail,
            Self::Vote,
            Self::Calendar,
            Self::Map,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Ranking => "ranking",
            Self::Participants => "participants",
            Self::ParticipantDetail => "participant-detail",
            Self::Vote => "vote",
            Self::Calendar => "calendar",
            Self::Map => "map",
        }
    }

    /// First path segment of the page's shareable route.
    pub fn segment(&self) -> &'static str {
        match self {
            Self::ParticipantDetail => "participant",
            other => other.as_str(),
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|page| page.segment() == segment)
    }

    /// Pages whose path can embed a participant slug.
    pub fn is_entity_scoped(&self) -> bool {
        matches!(self, Self::Vote | Self::ParticipantDetail)
    }

    /// Pages that cannot be shown without a selected participant.
    pub fn requires_participant(&self) -> bool {
        matches!(self, Self::ParticipantDetail)
    }
}

impl std::str::FromStr for Page {
    type Err = StorageError;

    /// Accepts either the page name (`participant-detail`) or its path segment (`participant`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|page| page.as_str() == normalized || page.segment() == normalized)
            .ok_or(StorageError::NotFound)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved navigation target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Route {
    pub page: Page,
    pub participant_id: Option<String>,
}

impl Route {
    pub fn new(page: Page, participant_id: Option<String>) -> Self {
        Self {
            page,
            participant_id,
        }
    }

    /// Where every unrecognised path lands.
    pub fn fallback() -> Self {
        Self::default()
    }
}
