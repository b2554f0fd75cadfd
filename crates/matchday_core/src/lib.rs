//! # matchday_core - Toy Football Match Simulation
//!
//! Loads a player roster from CSV, deals two random teams, simulates a
//! nine-round match biased by mean overall rating, settles a simple
//! win/lose bet, and appends the result to a local SQLite table.
//!
//! ## Features
//! - Deterministic simulation (same seed = same draw and same score)
//! - Step API (`MatchEngine::tick`) so a front-end can render
//!   play-by-play between rounds
//! - No rendering dependencies: the whole crate is testable headless

pub mod bet;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod models;
pub mod roster;
pub mod store;

pub use bet::{outcome_url, Bet, BetOutcome, CELEBRATION_URL, CONSOLATION_URL};
pub use config::Config;
pub use draw::{draw_teams, DEFAULT_TEAM_SIZE};
pub use engine::{MatchEngine, MatchPlan, RoundUpdate, ROUNDS_PER_MATCH};
pub use error::{Result, SimError};
pub use models::{MatchResult, Player, Team, TeamSide};
pub use roster::load_roster;
pub use store::ResultStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
