mod participant;
mod ranking;
mod route;
mod vote;

pub use participant::{Category, District, Participant, ParticipantRecord};
pub use ranking::{DataIntegrityWarning, RankingEntry, RankingSnapshot, Trend};
pub use route::{Page, Route};
pub use vote::{MAX_RATING, MIN_RATING, NewVote, RatingField, Ratings, Vote};
