use crate::dto::ranking::RankingView;
use crate::models::RankingEntry;

use super::ranking::compare_entries;

/// Filters and reorders a ranking without touching the input.
///
/// Filters combine conjunctively. Positions are renumbered `1..=M` within the
/// view, while `previous_position` and `trend` keep their global meaning.
pub fn apply_view(entries: &[RankingEntry], view: &RankingView) -> Vec<RankingEntry> {
    let mut filtered: Vec<RankingEntry> = entries
        .iter()
        .filter(|entry| {
            view.category
                .is_none_or(|category| entry.participant.category == category)
        })
        .filter(|entry| {
            view.district
                .is_none_or(|district| entry.participant.district == district)
        })
        .cloned()
        .collect();

    filtered.sort_by(|a, b| compare_entries(a, b, view.sort_by));

    if let Some(limit) = view.limit {
        filtered.truncate(limit as usize);
    }

    for (index, entry) in filtered.iter_mut().enumerate() {
        entry.position = index as u32 + 1;
    }

    filtered
}
