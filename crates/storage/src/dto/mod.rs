pub mod participant;
pub mod ranking;
pub mod route;
pub mod vote;
