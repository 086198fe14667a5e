use std::sync::Arc;

use crate::dto::participant::{GroupBy, ParticipantFilter, ParticipantGroup, ParticipantSummary};
use crate::dto::ranking::{ContestStats, RankingView};
use crate::dto::vote::SubmitVoteRequest;
use crate::error::{Result, StorageError};
use crate::models::{
    Category, District, Page, Participant, RankingEntry, RankingSnapshot, Trend, Vote,
};
use crate::repository::{Catalog, InMemoryVoteLog, SnapshotStore, VoteLog};
use crate::services::ranking::compute_ranking;
use crate::services::routes::RouteIndex;
use crate::services::view::apply_view;

const STATS_TOP_COUNT: usize = 5;

/// Shared contest state: catalog, vote log and the published ranking.
///
/// Cloning is cheap; every clone shares the same log and snapshot.
#[derive(Clone)]
pub struct ContestStore {
    catalog: Arc<Catalog>,
    routes: Arc<RouteIndex>,
    votes: Arc<dyn VoteLog>,
    snapshots: Arc<SnapshotStore>,
}

impl ContestStore {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_vote_log(catalog, Arc::new(InMemoryVoteLog::new()))
    }

    pub fn with_vote_log(catalog: Catalog, votes: Arc<dyn VoteLog>) -> Self {
        let routes = RouteIndex::new(&catalog);
        Self {
            catalog: Arc::new(catalog),
            routes: Arc::new(routes),
            votes,
            snapshots: Arc::new(SnapshotStore::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn routes(&self) -> &RouteIndex {
        &self.routes
    }

    /// Ranking over every vote acknowledged before this call.
    ///
    /// The published snapshot is reused while the log has not grown.
    pub fn ranking(&self) -> Arc<RankingSnapshot> {
        let votes = self.votes.snapshot();
        let previous = self.snapshots.current();

        if let Some(ref current) = previous
            && current.log_len == votes.len()
        {
            return Arc::clone(current);
        }

        let computation = compute_ranking(&self.catalog, votes.iter(), previous.as_deref());
        if !computation.warnings.is_empty() {
            tracing::warn!(
                orphaned = computation.warnings.len(),
                "Ranking computed with orphaned votes"
            );
        }

        let published = self.snapshots.publish(computation.snapshot);
        tracing::debug!(log_len = published.log_len, "Ranking published");
        published
    }

    pub fn ranking_view(&self, view: &RankingView) -> Vec<RankingEntry> {
        apply_view(&self.ranking().entries, view)
    }

    pub fn submit_vote(&self, request: &SubmitVoteRequest) -> Result<Vote> {
        if !self.catalog.contains(&request.participant_id) {
            return Err(StorageError::NotFound);
        }

        let vote = self.votes.append(request.to_new_vote()?)?;
        tracing::info!(
            vote_id = %vote.id,
            participant_id = %vote.participant_id,
            sequence = vote.sequence,
            "Vote recorded"
        );

        Ok(vote)
    }

    /// Votes of one participant, newest first.
    pub fn votes_for(&self, participant_id: &str) -> Result<Vec<Vote>> {
        if !self.catalog.contains(participant_id) {
            return Err(StorageError::NotFound);
        }

        let votes = self.votes.snapshot();
        Ok(votes
            .iter()
            .rev()
            .filter(|vote| vote.participant_id == participant_id)
            .cloned()
            .collect())
    }

    pub fn stats(&self) -> ContestStats {
        let ranking = self.ranking();

        ContestStats {
            total_votes: ranking.log_len,
            total_participants: self.catalog.len(),
            top: ranking
                .entries
                .iter()
                .take(STATS_TOP_COUNT)
                .cloned()
                .collect(),
        }
    }

    /// Catalog participants matching the filter, in catalog order.
    pub fn participants(&self, filter: &ParticipantFilter) -> Vec<Arc<Participant>> {
        self.catalog
            .iter()
            .filter(|participant| filter.matches(participant))
            .cloned()
            .collect()
    }

    /// One group per category or district, in declaration order.
    pub fn participant_groups(&self, by: GroupBy) -> Vec<ParticipantGroup> {
        let filters: Vec<(String, ParticipantFilter)> = match by {
            GroupBy::Category => Category::all()
                .iter()
                .map(|&category| {
                    let filter = ParticipantFilter {
                        category: Some(category),
                        ..Default::default()
                    };
                    (category.to_string(), filter)
                })
                .collect(),
            GroupBy::District => District::all()
                .iter()
                .map(|&district| {
                    let filter = ParticipantFilter {
                        district: Some(district),
                        ..Default::default()
                    };
                    (district.to_string(), filter)
                })
                .collect(),
        };

        filters
            .into_iter()
            .map(|(name, filter)| {
                let participants = self.participants(&filter);
                ParticipantGroup {
                    name,
                    count: participants.len(),
                    participants,
                }
            })
            .collect()
    }

    pub fn participant_summary(&self, slug: &str) -> Result<ParticipantSummary> {
        let participant_id = self
            .routes
            .participant_id(slug)
            .ok_or(StorageError::NotFound)?;
        let participant = self
            .catalog
            .get(participant_id)
            .ok_or(StorageError::NotFound)?;

        let ranking = self.ranking();
        let entry = ranking.entry(participant_id);

        Ok(ParticipantSummary {
            participant: Arc::clone(participant),
            position: entry.map(|e| e.position),
            average_score: entry.map_or(0.0, |e| e.average_score),
            vote_count: entry.map_or(0, |e| e.vote_count),
            trend: entry.map_or(Trend::Stable, |e| e.trend),
            detail_path: self
                .routes
                .build(Page::ParticipantDetail, Some(participant_id)),
            vote_path: self.routes.build(Page::Vote, Some(participant_id)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::dto::ranking::SortKey;
    use crate::models::RatingField;

    fn store() -> ContestStore {
        ContestStore::new(Catalog::bundled().unwrap())
    }

    fn request(participant_id: &str, rating: f64) -> SubmitVoteRequest {
        SubmitVoteRequest {
            participant_id: participant_id.to_string(),
            taste: Some(rating),
            bun: Some(rating),
            cooking: Some(rating),
            presentation: Some(rating),
            value: Some(rating),
            comment: None,
        }
    }

    #[test]
    fn test_read_your_writes() {
        let store = store();
        assert_eq!(store.ranking().log_len, 0);

        store.submit_vote(&request("1", 5.0)).unwrap();
        let ranking = store.ranking();

        assert_eq!(ranking.log_len, 1);
        let entry = ranking.entries.first().unwrap();
        assert_eq!(entry.participant.id, "1");
        assert_eq!(entry.average_score, 5.0);
        assert_eq!(entry.vote_count, 1);
    }

    #[test]
    fn test_unchanged_log_reuses_snapshot() {
        let store = store();
        store.submit_vote(&request("2", 4.0)).unwrap();

        let first = store.ranking();
        let second = store.ranking();
        assert!(Arc::ptr_eq(&first, &second));

        store.submit_vote(&request("2", 4.0)).unwrap();
        assert!(!Arc::ptr_eq(&first, &store.ranking()));
    }

    #[test]
    fn test_invalid_vote_is_rejected_and_not_counted() {
        let store = store();
        let mut bad = request("1", 4.0);
        bad.presentation = Some(0.0);

        let err = store.submit_vote(&bad).unwrap_err();
        assert_eq!(err.invalid_fields(), &[RatingField::Presentation]);
        assert_eq!(store.stats().total_votes, 0);
        assert_eq!(store.ranking().entry("1").unwrap().vote_count, 0);
    }

    #[test]
    fn test_unknown_participant_is_not_found() {
        let store = store();

        // Unknown participant wins over invalid ratings.
        let mut bad = request("999", 4.0);
        bad.taste = None;
        assert!(matches!(store.submit_vote(&bad).unwrap_err(), StorageError::NotFound));
        assert!(matches!(store.votes_for("999").unwrap_err(), StorageError::NotFound));

        let mut empty = request("", 4.0);
        empty.taste = Some(9.0);
        assert!(matches!(store.submit_vote(&empty).unwrap_err(), StorageError::NotFound));
        assert_eq!(store.stats().total_votes, 0);
    }

    #[test]
    fn test_trend_follows_submissions() {
        let store = store();
        store.submit_vote(&request("1", 3.0)).unwrap();
        store.submit_vote(&request("2", 4.0)).unwrap();
        assert_eq!(store.ranking().entry("1").map(|e| e.position), Some(2));

        store.submit_vote(&request("1", 5.0)).unwrap();
        store.submit_vote(&request("1", 5.0)).unwrap();

        let ranking = store.ranking();
        let entry = ranking.entry("1").unwrap();
        assert_eq!(entry.position, 1);
        assert_eq!(entry.previous_position, Some(2));
        assert_eq!(entry.trend, Trend::Up);
        assert_eq!(ranking.entry("2").unwrap().trend, Trend::Down);
    }

    #[test]
    fn test_ranking_view_filters_category() {
        let store = store();
        let view = RankingView {
            category: Some(Category::Smash),
            sort_by: SortKey::Votes,
            ..Default::default()
        };

        let entries = store.ranking_view(&view);
        assert!(!entries.is_empty());
        assert!(entries
            .iter()
            .all(|e| e.participant.category == Category::Smash));
        assert_eq!(entries[0].position, 1);
    }

    #[test]
    fn test_votes_for_is_newest_first() {
        let store = store();
        let first = store.submit_vote(&request("3", 2.0)).unwrap();
        store.submit_vote(&request("4", 2.0)).unwrap();
        let second = store.submit_vote(&request("3", 4.0)).unwrap();

        let votes = store.votes_for("3").unwrap();
        assert_eq!(
            votes.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );
    }

    #[test]
    fn test_stats() {
        let store = store();
        store.submit_vote(&request("5", 4.0)).unwrap();
        store.submit_vote(&request("6", 3.0)).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_votes, 2);
        assert_eq!(stats.total_participants, 16);
        assert_eq!(stats.top.len(), STATS_TOP_COUNT);
        assert_eq!(stats.top[0].participant.id, "5");
    }

    #[test]
    fn test_participant_summary() {
        let store = store();
        store.submit_vote(&request("1", 4.0)).unwrap();

        let summary = store.participant_summary("la-burger-triana").unwrap();
        assert_eq!(summary.participant.id, "1");
        assert_eq!(summary.position, Some(1));
        assert_eq!(summary.vote_count, 1);
        assert_eq!(summary.detail_path, "#/participant/la-burger-triana");
        assert_eq!(summary.vote_path, "#/vote/la-burger-triana");

        assert!(matches!(
            store.participant_summary("nope").unwrap_err(),
            StorageError::NotFound
        ));
    }

    #[test]
    fn test_participants_filter() {
        let store = store();
        assert_eq!(store.participants(&ParticipantFilter::default()).len(), 16);

        let smash = store.participants(&ParticipantFilter {
            category: Some(Category::Smash),
            ..Default::default()
        });
        assert_eq!(smash.len(), 3);
        assert!(smash.iter().all(|p| p.category == Category::Smash));

        let both = store.participants(&ParticipantFilter {
            category: Some(Category::Smash),
            district: Some(District::Nervion),
        });
        assert_eq!(
            both.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["2"]
        );

        let empty = store.participants(&ParticipantFilter {
            category: Some(Category::Bbq),
            district: Some(District::Triana),
        });
        assert!(empty.is_empty());
    }

    #[test]
    fn test_participant_groups_cover_catalog() {
        let store = store();

        let by_category = store.participant_groups(GroupBy::Category);
        assert_eq!(by_category.len(), Category::all().len());
        assert_eq!(by_category[0].name, "Clásica");
        assert_eq!(by_category[0].count, 3);

        let by_district = store.participant_groups(GroupBy::District);
        assert_eq!(by_district.len(), District::all().len());
        let san_pablo = by_district.iter().find(|g| g.name == "San Pablo").unwrap();
        assert_eq!(san_pablo.count, 1);

        for groups in [by_category, by_district] {
            let total: usize = groups.iter().map(|g| g.count).sum();
            assert_eq!(total, 16);
            assert!(groups.iter().all(|g| g.count == g.participants.len()));
        }
    }

    #[test]
    fn test_concurrent_submissions_and_reads() {
        let store = store();

        thread::scope(|scope| {
            for t in 0..4 {
                let store = store.clone();
                scope.spawn(move || {
                    for _ in 0..50 {
                        let id = (t % 2 + 1).to_string();
                        store.submit_vote(&request(&id, 4.0)).unwrap();
                        let ranking = store.ranking();
                        assert!(ranking.log_len >= 1);
                    }
                });
            }
        });

        let ranking = store.ranking();
        assert_eq!(ranking.log_len, 200);
        let counted: u32 = ranking.entries.iter().map(|e| e.vote_count).sum();
        assert_eq!(counted, 200);
    }
}
