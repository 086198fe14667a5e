pub mod catalog;
pub mod snapshot;
pub mod vote_log;

pub use catalog::Catalog;
pub use snapshot::SnapshotStore;
pub use vote_log::{InMemoryVoteLog, VoteLog, VoteSnapshot};
