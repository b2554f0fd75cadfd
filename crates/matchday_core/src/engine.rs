//! Match simulation: nine biased rounds driven by team mean ratings.
//!
//! Each round is a coin flip weighted by relative strength, not a
//! possession or event model. The engine is seeded and deterministic
//! (same plan, same seed, same score) and never touches a rendering
//! surface: callers step it round by round with [`MatchEngine::tick`]
//! or drain it with [`MatchEngine::simulate`].

use crate::models::{MatchResult, Team, TeamSide};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Discrete scoring opportunities per match.
pub const ROUNDS_PER_MATCH: u8 = 9;

/// Everything the engine needs to play one match.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    pub home: Team,
    pub away: Team,
    pub seed: u64,
}

/// One round's outcome, emitted for play-by-play rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundUpdate {
    /// 1-based round number.
    pub round: u8,
    pub scorer: TeamSide,
    pub home_score: u8,
    pub away_score: u8,
}

pub struct MatchEngine {
    home: Team,
    away: Team,
    home_rating: f32,
    away_rating: f32,
    rng: StdRng,
    round: u8,
    home_score: u8,
    away_score: u8,
}

impl MatchEngine {
    pub fn new(plan: MatchPlan) -> Self {
        let home_rating = plan.home.average_overall();
        let away_rating = plan.away.average_overall();
        tracing::debug!(home_rating, away_rating, seed = plan.seed, "match engine ready");
        Self {
            home: plan.home,
            away: plan.away,
            home_rating,
            away_rating,
            rng: StdRng::seed_from_u64(plan.seed),
            round: 0,
            home_score: 0,
            away_score: 0,
        }
    }

    pub fn ratings(&self) -> (f32, f32) {
        (self.home_rating, self.away_rating)
    }

    pub fn score(&self) -> (u8, u8) {
        (self.home_score, self.away_score)
    }

    pub fn is_finished(&self) -> bool {
        self.round >= ROUNDS_PER_MATCH
    }

    /// Play the next round. Returns `None` once all nine are played.
    pub fn tick(&mut self) -> Option<RoundUpdate> {
        if self.is_finished() {
            return None;
        }
        self.round += 1;

        let scorer = self.draw_round();
        match scorer {
            TeamSide::Home => self.home_score += 1,
            TeamSide::Away => self.away_score += 1,
        }
        tracing::debug!(
            round = self.round,
            home = self.home_score,
            away = self.away_score,
            "round scored"
        );

        Some(RoundUpdate {
            round: self.round,
            scorer,
            home_score: self.home_score,
            away_score: self.away_score,
        })
    }

    // Draw uniformly in [0, home + away); Home scores when the draw falls
    // below its rating. A non-positive combined rating leaves the range
    // empty and the point goes to Away, the same outcome as a zero draw
    // failing the strict comparison.
    fn draw_round(&mut self) -> TeamSide {
        let total = self.home_rating + self.away_rating;
        if total > 0.0 && self.rng.gen_range(0.0..total) < self.home_rating {
            TeamSide::Home
        } else {
            TeamSide::Away
        }
    }

    /// Drain any remaining rounds and produce the final result.
    pub fn simulate(&mut self) -> MatchResult {
        while self.tick().is_some() {}
        MatchResult::from_final_score(&self.home, &self.away, self.home_score, self.away_score)
    }
}
