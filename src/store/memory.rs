//! In-memory, list-backed match store.

use tracing::debug;

use super::{MatchStore, StoreError};
use crate::models::FootballMatch;

/// Store holding both partitions in plain `Vec`s.
///
/// Linear scans are fine here: a competition runs a handful of simultaneous
/// matches, and the `Vec` preserves the insertion order the listing
/// tie-break depends on.
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    active: Vec<FootballMatch>,
    ended: Vec<FootballMatch>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn add(&mut self, football_match: FootballMatch) {
        debug!("Storing active match: {}", football_match);
        self.active.push(football_match);
    }

    fn active_match(&self, home_team: &str, away_team: &str) -> Option<&FootballMatch> {
        self.active
            .iter()
            .find(|m| m.is_between(home_team, away_team))
    }

    fn active_match_mut(
        &mut self,
        home_team: &str,
        away_team: &str,
    ) -> Option<&mut FootballMatch> {
        self.active
            .iter_mut()
            .find(|m| m.is_between(home_team, away_team))
    }

    fn active_match_for(&self, team_name: &str) -> Result<Option<&FootballMatch>, StoreError> {
        let mut involving = self.active.iter().filter(|m| m.involves(team_name));

        let first = involving.next();
        if first.is_some() && involving.next().is_some() {
            return Err(StoreError::DuplicateTeam {
                team: team_name.to_string(),
            });
        }

        Ok(first)
    }

    fn end_match(
        &mut self,
        home_team: &str,
        away_team: &str,
    ) -> Result<FootballMatch, StoreError> {
        let position = self
            .active
            .iter()
            .position(|m| m.is_between(home_team, away_team))
            .ok_or_else(|| StoreError::NotActive {
                home: home_team.to_string(),
                away: away_team.to_string(),
            })?;

        let removed = self.active.remove(position);
        debug!("Moving match to history: {}", removed);
        self.ended.push(removed.clone());

        Ok(removed)
    }

    fn active(&self) -> Vec<FootballMatch> {
        self.active.clone()
    }

    fn ended(&self) -> Vec<FootballMatch> {
        self.ended.clone()
    }
}
