//! Match storage.
//!
//! The store owns the authoritative collections of matches, partitioned
//! into an active set and an ended set. Only the scoreboard writes to them:
//! add on start, move on end, score updates through the mutable lookup.

use thiserror::Error;

use crate::models::FootballMatch;

mod memory;

pub use memory::InMemoryMatchStore;

/// Errors reported by a match store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Removal was requested for a pair that is not in the active partition.
    #[error("No active match found between {home} and {away}")]
    NotActive { home: String, away: String },

    /// A team appears in more than one active match. The scoreboard's
    /// mutual-exclusion checks make this unreachable through normal use, so
    /// any occurrence signals corrupted store state.
    #[error("{team} appears in more than one active match")]
    DuplicateTeam { team: String },
}

/// Storage capability for active and ended matches.
///
/// Implementations must preserve insertion order in [`MatchStore::active`]
/// (oldest first): the listing tie-break uses position in the active
/// collection as its recency proxy.
pub trait MatchStore {
    /// Register a new active match. The caller guarantees the team pair is
    /// not already active.
    fn add(&mut self, football_match: FootballMatch);

    /// Exact ordered-pair lookup among active matches only.
    fn active_match(&self, home_team: &str, away_team: &str) -> Option<&FootballMatch>;

    /// Mutable exact ordered-pair lookup among active matches only.
    fn active_match_mut(&mut self, home_team: &str, away_team: &str)
        -> Option<&mut FootballMatch>;

    /// First active match involving the team on either side, or a
    /// [`StoreError::DuplicateTeam`] if the team is somehow active twice.
    fn active_match_for(&self, team_name: &str) -> Result<Option<&FootballMatch>, StoreError>;

    /// Move the match for the pair from the active to the ended partition
    /// and return it.
    fn end_match(&mut self, home_team: &str, away_team: &str)
        -> Result<FootballMatch, StoreError>;

    /// Snapshot of the active partition in insertion order, oldest first.
    fn active(&self) -> Vec<FootballMatch>;

    /// Snapshot of the ended partition, retained for history.
    fn ended(&self) -> Vec<FootballMatch>;
}
