use std::sync::{Arc, PoisonError, RwLock};

use crate::models::RankingSnapshot;

/// Holds the last published ranking. Only the immediately preceding one is retained.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<RankingSnapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<RankingSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publishes `candidate` unless a snapshot covering at least as many votes
    /// is already published, and returns whichever snapshot is current afterwards.
    pub fn publish(&self, candidate: RankingSnapshot) -> Arc<RankingSnapshot> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = current.as_ref()
            && existing.log_len >= candidate.log_len
        {
            tracing::debug!(
                published = existing.log_len,
                candidate = candidate.log_len,
                "Discarding stale ranking computation"
            );
            return Arc::clone(existing);
        }

        let published = Arc::new(candidate);
        *current = Some(Arc::clone(&published));
        published
    }
}
