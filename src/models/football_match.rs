//! Live match model and score-progression rules.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by an illegal score update.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The proposed scores equal the current scores exactly.
    #[error("No update required, score is already set to the requested values")]
    NoUpdateRequired,

    /// Any transition other than a single-goal increment for one side.
    #[error("Score can only be incremented one team at a time")]
    InvalidTransition,
}

/// A live match between two teams.
///
/// Team names are fixed at creation. Scores start at nil-nil and only move
/// through [`FootballMatch::update_score`], one goal at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootballMatch {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,

    /// When the match was started. History/display only: the listing
    /// tie-break uses store insertion order, never this timestamp.
    started_at: DateTime<Utc>,
}

impl FootballMatch {
    /// Create a new match with a nil-nil score.
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
            started_at: Utc::now(),
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Total goals scored by both sides, the primary listing key.
    pub fn total_score(&self) -> u32 {
        self.home_score + self.away_score
    }

    /// Whether the given team plays in this match on either side.
    pub fn involves(&self, team_name: &str) -> bool {
        self.home_team == team_name || self.away_team == team_name
    }

    /// Whether this match is between exactly this ordered pair.
    pub fn is_between(&self, home_team: &str, away_team: &str) -> bool {
        self.home_team == home_team && self.away_team == away_team
    }

    /// The opposing team of `team_name`, if that team plays in this match.
    pub fn opponent_of(&self, team_name: &str) -> Option<&str> {
        if self.home_team == team_name {
            Some(&self.away_team)
        } else if self.away_team == team_name {
            Some(&self.home_team)
        } else {
            None
        }
    }

    /// Apply a score update given the proposed new totals for both sides.
    ///
    /// Exactly one side's proposed score must be its current score plus one
    /// while the other side's is unchanged. Re-submitting the current score
    /// is rejected with [`MatchError::NoUpdateRequired`]; every other
    /// combination (a multi-goal jump, a decrease, both sides changing at
    /// once) is rejected with [`MatchError::InvalidTransition`]. The match
    /// is left untouched on rejection.
    pub fn update_score(&mut self, home_score: u32, away_score: u32) -> Result<(), MatchError> {
        if home_score == self.home_score + 1 && away_score == self.away_score {
            self.home_score = home_score;
            return Ok(());
        }

        if away_score == self.away_score + 1 && home_score == self.home_score {
            self.away_score = away_score;
            return Ok(());
        }

        if home_score == self.home_score && away_score == self.away_score {
            return Err(MatchError::NoUpdateRequired);
        }

        Err(MatchError::InvalidTransition)
    }
}

impl fmt::Display for FootballMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_match_starts_nil_nil() {
        let m = FootballMatch::new("Mexico", "Canada");

        assert_eq!(m.home_team(), "Mexico");
        assert_eq!(m.away_team(), "Canada");
        assert_eq!(m.home_score(), 0);
        assert_eq!(m.away_score(), 0);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn test_update_score_home_goal() {
        let mut m = FootballMatch::new("Mexico", "Canada");

        m.update_score(1, 0).unwrap();

        assert_eq!(m.home_score(), 1);
        assert_eq!(m.away_score(), 0);
    }

    #[test]
    fn test_update_score_away_goal() {
        let mut m = FootballMatch::new("Mexico", "Canada");

        m.update_score(0, 1).unwrap();

        assert_eq!(m.home_score(), 0);
        assert_eq!(m.away_score(), 1);
    }

    #[test]
    fn test_update_score_sequence_is_monotonic() {
        let mut m = FootballMatch::new("Uruguay", "Italy");

        for goal in 1..=6 {
            m.update_score(goal, m.away_score()).unwrap();
        }
        for goal in 1..=6 {
            m.update_score(m.home_score(), goal).unwrap();
        }

        assert_eq!(m.home_score(), 6);
        assert_eq!(m.away_score(), 6);
        assert_eq!(m.total_score(), 12);
    }

    #[test]
    fn test_update_score_same_values_rejected_as_no_update() {
        let mut m = FootballMatch::new("Mexico", "Canada");
        m.update_score(1, 0).unwrap();

        let err = m.update_score(1, 0).unwrap_err();

        assert_eq!(err, MatchError::NoUpdateRequired);
        assert_eq!(m.home_score(), 1);
        assert_eq!(m.away_score(), 0);
    }

    #[test]
    fn test_update_score_multi_goal_jump_rejected() {
        let mut m = FootballMatch::new("Mexico", "Canada");

        let err = m.update_score(2, 0).unwrap_err();

        assert_eq!(err, MatchError::InvalidTransition);
        assert_eq!(m.home_score(), 0);
    }

    #[test]
    fn test_update_score_decrease_rejected() {
        let mut m = FootballMatch::new("Mexico", "Canada");
        m.update_score(1, 0).unwrap();
        m.update_score(2, 0).unwrap();

        let err = m.update_score(1, 0).unwrap_err();

        assert_eq!(err, MatchError::InvalidTransition);
        assert_eq!(m.home_score(), 2);
    }

    #[test]
    fn test_update_score_both_sides_at_once_rejected() {
        let mut m = FootballMatch::new("Mexico", "Canada");

        let err = m.update_score(1, 1).unwrap_err();

        assert_eq!(err, MatchError::InvalidTransition);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn test_involves_and_opponent_of() {
        let m = FootballMatch::new("Spain", "Brazil");

        assert!(m.involves("Spain"));
        assert!(m.involves("Brazil"));
        assert!(!m.involves("France"));

        assert_eq!(m.opponent_of("Spain"), Some("Brazil"));
        assert_eq!(m.opponent_of("Brazil"), Some("Spain"));
        assert_eq!(m.opponent_of("France"), None);
    }

    #[test]
    fn test_is_between_is_ordered() {
        let m = FootballMatch::new("Spain", "Brazil");

        assert!(m.is_between("Spain", "Brazil"));
        assert!(!m.is_between("Brazil", "Spain"));
    }

    #[test]
    fn test_display_format() {
        let mut m = FootballMatch::new("Spain", "Brazil");
        m.update_score(1, 0).unwrap();

        assert_eq!(format!("{}", m), "Spain 1 - 0 Brazil");
    }

    #[test]
    fn test_match_serialization() {
        let mut m = FootballMatch::new("Germany", "France");
        m.update_score(0, 1).unwrap();

        let json = serde_json::to_string(&m).unwrap();
        let deserialized: FootballMatch = serde_json::from_str(&json).unwrap();

        assert_eq!(m, deserialized);
    }
}
