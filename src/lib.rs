//! # Pitchside
//!
//! A live scoreboard for a football competition: start matches, record
//! goals one at a time, end matches, and list everything in play ordered by
//! how interesting it is (total goals, then most recently started).
//!
//! ## Architecture
//!
//! - **models**: Core data structures (the live match and its score rules)
//! - **board**: Scoreboard orchestration, ranking, and composition
//! - **store**: Match storage behind the `MatchStore` capability trait
//! - **validate**: Team eligibility behind the `TeamValidator` trait
//! - **config**: Configuration loading and validation
//!
//! The scoreboard only ever talks to its collaborators through the two
//! traits, so the in-memory backends that ship here can be swapped for any
//! other backing technology.

pub mod board;
pub mod config;
pub mod models;
pub mod store;
pub mod validate;

pub use models::*;
