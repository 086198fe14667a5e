use std::sync::Arc;

use contest_storage::{
    ContestStore,
    dto::participant::{
        ParticipantFilter, ParticipantGroup, ParticipantGroupQuery, ParticipantSummary,
    },
    error::Result,
    models::Participant,
};

/// List participants matching the filter, in catalog order
pub fn list_participants(store: &ContestStore, filter: &ParticipantFilter) -> Vec<Arc<Participant>> {
    store.participants(filter)
}

pub fn list_participant_groups(
    store: &ContestStore,
    query: ParticipantGroupQuery,
) -> Vec<ParticipantGroup> {
    store.participant_groups(query.by)
}

/// Get a participant with its live standing
pub fn get_participant(store: &ContestStore, slug: &str) -> Result<ParticipantSummary> {
    store.participant_summary(slug)
}
