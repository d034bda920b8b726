//! Core data models for the scoreboard.

mod football_match;

pub use football_match::*;
