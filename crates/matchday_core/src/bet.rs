//! Win/lose betting: a flavor prediction with no stake or payout.

use crate::models::TeamSide;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown to a winning bettor.
pub const CELEBRATION_URL: &str =
    "https://t3.ftcdn.net/jpg/02/82/23/94/360_F_282239447_9JUkxLmUPzBvOrEAXVEx2GpNd1EkPOSO.jpg";

/// Image shown to a losing bettor.
pub const CONSOLATION_URL: &str =
    "https://i1.sndcdn.com/artworks-BBMnwmO6ymZ90v3V-zYlw4g-t500x500.jpg";

/// The side a user backed before kick-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub side: TeamSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetOutcome {
    Won,
    Lost,
}

impl fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetOutcome::Won => write!(f, "won"),
            BetOutcome::Lost => write!(f, "lost"),
        }
    }
}

impl Bet {
    pub fn new(side: TeamSide) -> Self {
        Self { side }
    }

    /// Compare the pick against the final score. Nine rounds cannot end
    /// level, so any non-Home-win is an Away win.
    pub fn settle(&self, home_score: u8, away_score: u8) -> BetOutcome {
        let winner = if home_score > away_score { TeamSide::Home } else { TeamSide::Away };
        if winner == self.side {
            BetOutcome::Won
        } else {
            BetOutcome::Lost
        }
    }
}

/// Fixed image URL for a settled bet.
pub fn outcome_url(outcome: BetOutcome) -> &'static str {
    match outcome {
        BetOutcome::Won => CELEBRATION_URL,
        BetOutcome::Lost => CONSOLATION_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_on_winner_pays_off() {
        assert_eq!(Bet::new(TeamSide::Home).settle(6, 3), BetOutcome::Won);
        assert_eq!(Bet::new(TeamSide::Away).settle(2, 7), BetOutcome::Won);
    }

    #[test]
    fn test_bet_on_loser_goes_down() {
        assert_eq!(Bet::new(TeamSide::Away).settle(6, 3), BetOutcome::Lost);
        assert_eq!(Bet::new(TeamSide::Home).settle(2, 7), BetOutcome::Lost);
    }

    #[test]
    fn test_outcome_urls_are_fixed() {
        assert_eq!(outcome_url(BetOutcome::Won), CELEBRATION_URL);
        assert_eq!(outcome_url(BetOutcome::Lost), CONSOLATION_URL);
    }
}
