use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::votes::handlers::submit_vote,
        features::votes::handlers::list_votes,
        features::ranking::handlers::get_ranking,
        features::participants::handlers::list_participants,
        features::participants::handlers::list_participant_groups,
        features::participants::handlers::get_participant,
        features::stats::handlers::get_stats,
        features::navigation::handlers::resolve_route,
        features::navigation::handlers::build_route,
    ),
    components(
        schemas(
            contest_storage::dto::vote::SubmitVoteRequest,
            contest_storage::dto::participant::ParticipantSummary,
            contest_storage::dto::participant::ParticipantGroup,
            contest_storage::dto::participant::GroupBy,
            contest_storage::dto::ranking::ContestStats,
            contest_storage::dto::ranking::SortKey,
            contest_storage::dto::route::PathResponse,
            contest_storage::models::Participant,
            contest_storage::models::District,
            contest_storage::models::Category,
            contest_storage::models::Vote,
            contest_storage::models::Ratings,
            contest_storage::models::RatingField,
            contest_storage::models::RankingEntry,
            contest_storage::models::Trend,
            contest_storage::models::Page,
            contest_storage::models::Route,
        )
    ),
    tags(
        (name = "votes", description = "Vote submission and history"),
        (name = "ranking", description = "Live contest ranking"),
        (name = "participants", description = "Participant catalog"),
        (name = "stats", description = "Contest summary"),
        (name = "navigation", description = "Shareable path resolution"),
    )
)]
pub struct ApiDoc;
