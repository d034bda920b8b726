//! Listing order for the summary view.

use crate::models::FootballMatch;

/// Order a snapshot of active matches for the summary view.
///
/// Primary key: total goals, descending. Ties: most recently started first,
/// where recency is the match's position in the store's active collection
/// (later insertion = more recent), not a wall-clock timestamp. The input
/// must therefore be in insertion order, oldest first, as
/// [`crate::store::MatchStore::active`] guarantees.
pub(super) fn rank(active: Vec<FootballMatch>) -> Vec<FootballMatch> {
    let mut indexed: Vec<(usize, FootballMatch)> = active.into_iter().enumerate().collect();

    // (total desc, index desc) is a total order since indices are unique,
    // so the result is deterministic regardless of sort stability.
    indexed.sort_by(|(left_index, left), (right_index, right)| {
        right
            .total_score()
            .cmp(&left.total_score())
            .then(right_index.cmp(left_index))
    });

    indexed.into_iter().map(|(_, m)| m).collect()
}
