use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewVote, Vote};

/// Votes per sealed segment.
const SEGMENT_LEN: usize = 256;

/// An immutable prefix of the vote log.
///
/// Sealed segments are shared with the log; only the unsealed tail, at most
/// `SEGMENT_LEN` votes, is copied when the snapshot is taken.
#[derive(Debug, Clone)]
pub struct VoteSnapshot {
    segments: Vec<Arc<[Vote]>>,
    tail: Arc<[Vote]>,
    len: usize,
}

impl VoteSnapshot {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Votes in log order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vote> {
        self.segments
            .iter()
            .flat_map(|segment| segment.iter())
            .chain(self.tail.iter())
    }
}

/// Append-only vote storage.
///
/// Appends are serialized; a snapshot taken after an append returns always
/// contains that vote.
pub trait VoteLog: Send + Sync {
    fn append(&self, vote: NewVote) -> Result<Vote>;

    fn snapshot(&self) -> VoteSnapshot;

    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
struct Segments {
    sealed: Vec<Arc<[Vote]>>,
    tail: Vec<Vote>,
    len: usize,
}

/// Segmented in-memory log.
///
/// Full segments are frozen into `Arc<[Vote]>` and never touched again, so an
/// append never copies votes a reader may still hold.
#[derive(Debug, Default)]
pub struct InMemoryVoteLog {
    segments: Mutex<Segments>,
}

impl InMemoryVoteLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Segments> {
        // Segments are only ever pushed to, so a poisoned lock still holds a valid log.
        self.segments.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VoteLog for InMemoryVoteLog {
    fn append(&self, vote: NewVote) -> Result<Vote> {
        let mut log = self.lock();

        let vote = Vote {
            id: Uuid::new_v4(),
            sequence: log.len as u64 + 1,
            participant_id: vote.participant_id,
            ratings: vote.ratings,
            comment: vote.comment,
            timestamp: Utc::now(),
        };
        log.tail.push(vote.clone());
        log.len += 1;

        if log.tail.len() == SEGMENT_LEN {
            let sealed: Arc<[Vote]> = std::mem::take(&mut log.tail).into();
            log.sealed.push(sealed);
        }

        Ok(vote)
    }

    fn snapshot(&self) -> VoteSnapshot {
        let log = self.lock();
        VoteSnapshot {
            segments: log.sealed.clone(),
            tail: Arc::from(log.tail.as_slice()),
            len: log.len,
        }
    }

    fn len(&self) -> usize {
        self.lock().len
    }
}
