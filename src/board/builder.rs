//! Fluent composition of a scoreboard from its collaborators.

use thiserror::Error;

use super::Scoreboard;
use crate::store::{InMemoryMatchStore, MatchStore};
use crate::validate::{InMemoryTeamValidator, TeamValidator};

/// Errors from scoreboard composition.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No team validator was configured.
    #[error("A scoreboard needs a team validator; none was configured")]
    MissingValidator,
}

/// Builder for [`Scoreboard`].
///
/// The store defaults to the in-memory backend. A validator must be chosen
/// explicitly, since eligibility is competition-specific.
///
/// ```
/// use pitchside::board::Scoreboard;
///
/// let board = Scoreboard::builder()
///     .with_team_roster(vec!["Mexico".to_string(), "Canada".to_string()])
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct ScoreboardBuilder {
    store: Option<Box<dyn MatchStore>>,
    validator: Option<Box<dyn TeamValidator>>,
}

impl ScoreboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific match store backend.
    pub fn with_store(mut self, store: impl MatchStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Use the list-backed in-memory store.
    pub fn with_in_memory_store(self) -> Self {
        self.with_store(InMemoryMatchStore::new())
    }

    /// Use a specific team validator.
    pub fn with_validator(mut self, validator: impl TeamValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Validate team names against a fixed competition roster.
    pub fn with_team_roster(self, roster: Vec<String>) -> Self {
        self.with_validator(InMemoryTeamValidator::new(roster))
    }

    /// Assemble the scoreboard.
    pub fn build(self) -> Result<Scoreboard, BuildError> {
        let store = self
            .store
            .unwrap_or_else(|| Box::new(InMemoryMatchStore::new()));
        let validator = self.validator.ok_or(BuildError::MissingValidator)?;

        Ok(Scoreboard::new(store, validator))
    }
}
