use contest_storage::{ContestStore, dto::vote::SubmitVoteRequest, error::Result, models::Vote};

/// Record a vote
pub fn submit_vote(store: &ContestStore, request: &SubmitVoteRequest) -> Result<Vote> {
    store.submit_vote(request)
}

/// List the votes of a participant, newest first
pub fn list_votes(store: &ContestStore, participant_id: &str) -> Result<Vec<Vote>> {
    store.votes_for(participant_id)
}
