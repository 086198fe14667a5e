use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Utc;

use crate::dto::ranking::SortKey;
use crate::models::{DataIntegrityWarning, RankingEntry, RankingSnapshot, Trend, Vote};
use crate::repository::Catalog;

use super::scoring::{composite_score, round_score};

/// Output of one aggregation pass.
#[derive(Debug, Clone)]
pub struct RankingComputation {
    pub snapshot: RankingSnapshot,
    pub warnings: Vec<DataIntegrityWarning>,
}

#[derive(Default)]
struct Tally {
    total: f64,
    count: u32,
}

/// Aggregates `votes` over the catalog and orders the result.
///
/// Trend and `previous_position` are taken from `previous`. Votes whose
/// participant is not in the catalog are skipped and reported as warnings.
pub fn compute_ranking<'a>(
    catalog: &Catalog,
    votes: impl IntoIterator<Item = &'a Vote>,
    previous: Option<&RankingSnapshot>,
) -> RankingComputation {
    let mut tallies: HashMap<&str, Tally> = HashMap::with_capacity(catalog.len());
    let mut warnings = Vec::new();
    let mut log_len = 0;

    for vote in votes {
        log_len += 1;
        if !catalog.contains(&vote.participant_id) {
            let warning = DataIntegrityWarning {
                vote_id: vote.id,
                participant_id: vote.participant_id.clone(),
            };
            tracing::warn!(%warning, "Excluding orphaned vote from ranking");
            warnings.push(warning);
            continue;
        }

        let tally = tallies.entry(vote.participant_id.as_str()).or_default();
        tally.total += composite_score(&vote.ratings);
        tally.count += 1;
    }

    let mut entries: Vec<RankingEntry> = catalog
        .iter()
        .map(|participant| {
            let (average_score, vote_count) = match tallies.get(participant.id.as_str()) {
                Some(tally) if tally.count > 0 => {
                    (round_score(tally.total / f64::from(tally.count)), tally.count)
                }
                _ => (0.0, 0),
            };

            RankingEntry {
                participant: participant.clone(),
                average_score,
                vote_count,
                position: 0,
                previous_position: None,
                trend: Trend::Stable,
            }
        })
        .collect();

    entries.sort_by(|a, b| compare_entries(a, b, SortKey::Score));

    let previous_positions: HashMap<&str, u32> = previous
        .map(|snapshot| {
            snapshot
                .entries
                .iter()
                .map(|entry| (entry.participant.id.as_str(), entry.position))
                .collect()
        })
        .unwrap_or_default();

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.position = index as u32 + 1;
        entry.previous_position = previous_positions
            .get(entry.participant.id.as_str())
            .copied();
        entry.trend = Trend::between(entry.previous_position, entry.position);
    }

    RankingComputation {
        snapshot: RankingSnapshot {
            entries,
            log_len,
            computed_at: Utc::now(),
        },
        warnings,
    }
}

/// Total order used by every ranking: the primary key descending, the other
/// key descending, then participant id ascending.
pub fn compare_entries(a: &RankingEntry, b: &RankingEntry, key: SortKey) -> Ordering {
    let by_score = b.average_score.total_cmp(&a.average_score);
    let by_votes = b.vote_count.cmp(&a.vote_count);

    let primary = match key {
        SortKey::Score => by_score.then(by_votes),
        SortKey::Votes => by_votes.then(by_score),
    };

    primary.then_with(|| a.participant.id.cmp(&b.participant.id))
}
