use contest_storage::{ContestStore, dto::ranking::RankingView, models::RankingEntry};

use crate::error::WebResult;

/// Get the live ranking with filtering and ordering applied
///
/// Aggregation is CPU bound, so it runs on the blocking pool.
pub async fn get_ranking(store: ContestStore, view: RankingView) -> WebResult<Vec<RankingEntry>> {
    let entries = tokio::task::spawn_blocking(move || store.ranking_view(&view)).await?;
    Ok(entries)
}
