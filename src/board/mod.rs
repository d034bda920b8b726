//! Scoreboard orchestration.
//!
//! The scoreboard composes a [`TeamValidator`] and a [`MatchStore`] and owns
//! the cross-match rules: a team plays at most one active match at a time,
//! matches start at nil-nil between validated teams, and the summary view
//! is ordered by total goals with a recency tie-break. It keeps no state of
//! its own beyond the two collaborators.

mod builder;
mod ranking;

pub use builder::{BuildError, ScoreboardBuilder};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{FootballMatch, MatchError};
use crate::store::{MatchStore, StoreError};
use crate::validate::TeamValidator;

/// Broad classification of scoreboard failures, for callers that map errors
/// onto transport-specific responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or semantically illegal input.
    InvalidArgument,
    /// The requested match is not in the active set.
    NotFound,
    /// The store contradicted a prior existence check.
    StoreConsistency,
}

/// Errors surfaced by scoreboard operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The team is already in an active match.
    #[error("{team} is already playing against {opponent}")]
    AlreadyPlaying { team: String, opponent: String },

    /// Neither of the two names passed validation.
    #[error("Neither team name provided is valid")]
    NoValidTeams,

    /// One specific name failed validation.
    #[error("'{0}' is not a valid team name")]
    InvalidTeamName(String),

    /// No active match exists for the ordered pair.
    #[error("No match found between {home} and {away}")]
    MatchNotFound { home: String, away: String },

    /// The match rejected a score transition.
    #[error(transparent)]
    Score(#[from] MatchError),

    /// The store contradicted itself; a bug or a concurrent-mutation race,
    /// not a normal user error.
    #[error("Match store inconsistency: {0}")]
    StoreConsistency(StoreError),
}

impl BoardError {
    /// The broad kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::AlreadyPlaying { .. }
            | BoardError::NoValidTeams
            | BoardError::InvalidTeamName(_)
            | BoardError::Score(_) => ErrorKind::InvalidArgument,
            BoardError::MatchNotFound { .. } => ErrorKind::NotFound,
            BoardError::StoreConsistency(_) => ErrorKind::StoreConsistency,
        }
    }
}

/// Live scoreboard for a single competition.
///
/// All operations are synchronous and atomic from the caller's perspective:
/// every check runs before the first mutation, so a failing call leaves the
/// store exactly as it found it.
pub struct Scoreboard {
    store: Box<dyn MatchStore>,
    validator: Box<dyn TeamValidator>,
}

impl Scoreboard {
    /// Compose a scoreboard from its two collaborators.
    pub fn new(store: Box<dyn MatchStore>, validator: Box<dyn TeamValidator>) -> Self {
        Self { store, validator }
    }

    /// Start building a scoreboard.
    pub fn builder() -> ScoreboardBuilder {
        ScoreboardBuilder::new()
    }

    /// Start a new match at nil-nil between the two teams.
    ///
    /// Checks run in order and stop at the first failure: an active match
    /// involving the home team, one involving the away team, then name
    /// validation. An already-playing team always reports its conflict,
    /// even when its name would no longer validate.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<(), BoardError> {
        if let Some(opponent) = self.active_opponent_of(home_team)? {
            warn!("Rejected start: {} is already playing {}", home_team, opponent);
            return Err(BoardError::AlreadyPlaying {
                team: home_team.to_string(),
                opponent,
            });
        }

        if let Some(opponent) = self.active_opponent_of(away_team)? {
            warn!("Rejected start: {} is already playing {}", away_team, opponent);
            return Err(BoardError::AlreadyPlaying {
                team: away_team.to_string(),
                opponent,
            });
        }

        let home_valid = self.validator.is_valid(home_team);
        let away_valid = self.validator.is_valid(away_team);

        if !home_valid && !away_valid {
            return Err(BoardError::NoValidTeams);
        }
        if !home_valid {
            return Err(BoardError::InvalidTeamName(home_team.to_string()));
        }
        if !away_valid {
            return Err(BoardError::InvalidTeamName(away_team.to_string()));
        }

        self.store.add(FootballMatch::new(home_team, away_team));
        info!("Started match: {} vs {}", home_team, away_team);

        Ok(())
    }

    /// End the active match between the ordered pair, moving it to history.
    ///
    /// An ended match is never reactivated; it stays retrievable through
    /// [`Scoreboard::match_history`] only.
    pub fn end_match(&mut self, home_team: &str, away_team: &str) -> Result<(), BoardError> {
        if self.store.active_match(home_team, away_team).is_none() {
            return Err(BoardError::MatchNotFound {
                home: home_team.to_string(),
                away: away_team.to_string(),
            });
        }

        // The lookup just succeeded; a removal failure here means the store
        // contradicted itself, which is a different failure than "no such
        // match".
        let ended = self
            .store
            .end_match(home_team, away_team)
            .map_err(BoardError::StoreConsistency)?;
        info!("Ended match: {}", ended);

        Ok(())
    }

    /// The active match for the exact ordered pair.
    ///
    /// Ended matches are not searched.
    pub fn get_match(&self, home_team: &str, away_team: &str) -> Result<&FootballMatch, BoardError> {
        self.store
            .active_match(home_team, away_team)
            .ok_or_else(|| BoardError::MatchNotFound {
                home: home_team.to_string(),
                away: away_team.to_string(),
            })
    }

    /// Record a goal by proposing the new total score for each side.
    ///
    /// The legality of the transition is decided by the match itself; see
    /// [`FootballMatch::update_score`]. Call once per goal event.
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
    ) -> Result<(), BoardError> {
        let football_match = self
            .store
            .active_match_mut(home_team, away_team)
            .ok_or_else(|| BoardError::MatchNotFound {
                home: home_team.to_string(),
                away: away_team.to_string(),
            })?;

        football_match.update_score(home_score, away_score)?;
        info!("Score update: {}", football_match);

        Ok(())
    }

    /// All active matches, most interesting first.
    ///
    /// Ordered by total goals descending; matches tied on total goals are
    /// listed most recently started first. Empty when nothing is active.
    pub fn current_matches(&self) -> Vec<FootballMatch> {
        let ranked = ranking::rank(self.store.active());
        debug!("Listing {} active matches", ranked.len());
        ranked
    }

    /// Ended matches retained for history, oldest first.
    pub fn match_history(&self) -> Vec<FootballMatch> {
        self.store.ended()
    }

    /// The opponent the team is currently playing against, if any.
    fn active_opponent_of(&self, team_name: &str) -> Result<Option<String>, BoardError> {
        let found = self
            .store
            .active_match_for(team_name)
            .map_err(BoardError::StoreConsistency)?;

        Ok(found.and_then(|m| m.opponent_of(team_name)).map(String::from))
    }
}
