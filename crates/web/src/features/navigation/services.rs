use contest_storage::{
    ContestStore,
    models::{Page, Route},
};

use crate::error::{WebError, WebResult};

/// Resolve a shareable path; unknown paths land on the home page
pub fn resolve(store: &ContestStore, path: &str) -> Route {
    store.routes().resolve_path(path)
}

/// Build the shareable path of a page
pub fn build(store: &ContestStore, page: &str, participant_id: Option<&str>) -> WebResult<String> {
    let page: Page = page
        .parse()
        .map_err(|_| WebError::BadRequest(format!("Unknown page '{}'", page)))?;

    Ok(store.routes().build(page, participant_id))
}
