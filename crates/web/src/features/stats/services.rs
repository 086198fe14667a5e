use contest_storage::{ContestStore, dto::ranking::ContestStats};

use crate::error::WebResult;

/// Get contest totals and the current top entries
pub async fn get_stats(store: ContestStore) -> WebResult<ContestStats> {
    let stats = tokio::task::spawn_blocking(move || store.stats()).await?;
    Ok(stats)
}
