pub mod navigation;
pub mod participants;
pub mod ranking;
pub mod stats;
pub mod votes;
