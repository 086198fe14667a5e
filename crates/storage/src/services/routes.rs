use std::collections::HashMap;

use crate::models::{Page, Route};
use crate::repository::Catalog;

/// Bidirectional slug/id index over the catalog, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    by_slug: HashMap<String, String>,
    by_id: HashMap<String, String>,
}

impl RouteIndex {
    pub fn new(catalog: &Catalog) -> Self {
        let mut by_slug = HashMap::with_capacity(catalog.len());
        let mut by_id = HashMap::with_capacity(catalog.len());

        for participant in catalog.iter() {
            by_slug.insert(participant.slug.clone(), participant.id.clone());
            by_id.insert(participant.id.clone(), participant.slug.clone());
        }

        Self { by_slug, by_id }
    }

    pub fn participant_id(&self, slug: &str) -> Option<&str> {
        self.by_slug.get(slug).map(String::as_str)
    }

    pub fn slug(&self, participant_id: &str) -> Option<&str> {
        self.by_id.get(participant_id).map(String::as_str)
    }

    /// Resolves already split path fragments. Unrecognised input falls back to home.
    pub fn resolve(&self, fragments: &[&str]) -> Route {
        let Some((first, rest)) = fragments.split_first() else {
            return Route::fallback();
        };
        let Some(page) = Page::from_segment(first) else {
            return Route::fallback();
        };

        match rest.first() {
            Some(slug) if page.is_entity_scoped() => match self.participant_id(slug) {
                Some(id) => Route::new(page, Some(id.to_string())),
                None => Route::fallback(),
            },
            None if page.requires_participant() => Route::fallback(),
            _ => Route::new(page, None),
        }
    }

    /// Resolves a shareable path such as `#/vote/la-burger-triana`.
    ///
    /// The leading `#` and slashes are optional and empty segments are skipped.
    pub fn resolve_path(&self, path: &str) -> Route {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let fragments: Vec<&str> = trimmed.split('/').filter(|f| !f.is_empty()).collect();

        self.resolve(&fragments)
    }

    /// Shareable path for a page, embedding the participant slug on entity pages.
    pub fn build(&self, page: Page, participant_id: Option<&str>) -> String {
        let slug = participant_id
            .filter(|_| page.is_entity_scoped())
            .and_then(|id| self.slug(id));

        match slug {
            Some(slug) => format!("#/{}/{}", page.segment(), slug),
            None => format!("#/{}", page.segment()),
        }
    }
}
