//! Team eligibility checking.
//!
//! The scoreboard treats eligibility as a pure predicate behind the
//! [`TeamValidator`] trait so the source of truth (a fixed roster, a
//! federation registry, anything else) stays swappable.

/// Capability for checking whether a team name is eligible to start a match
/// (for example, entered in the current competition).
pub trait TeamValidator {
    /// True if the name refers to an eligible team.
    fn is_valid(&self, team_name: &str) -> bool;
}

/// Roster-backed validator.
///
/// A name is valid when it appears in the configured list of competing
/// teams. Comparison is exact; no trimming or case folding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamValidator {
    valid_team_names: Vec<String>,
}

impl InMemoryTeamValidator {
    pub fn new(valid_team_names: Vec<String>) -> Self {
        Self { valid_team_names }
    }
}

impl TeamValidator for InMemoryTeamValidator {
    fn is_valid(&self, team_name: &str) -> bool {
        self.valid_team_names.iter().any(|name| name == team_name)
    }
}
