pub mod ranking;
pub mod routes;
pub mod scoring;
pub mod view;
