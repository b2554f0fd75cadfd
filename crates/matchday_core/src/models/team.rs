use super::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two drawn sides a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn other(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => write!(f, "Home"),
            TeamSide::Away => write!(f, "Away"),
        }
    }
}

/// An ordered list of players dealt from the shuffled pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { name: name.into(), players }
    }

    /// Arithmetic mean of member overall ratings. 0.0 for an empty team.
    pub fn average_overall(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.players.iter().map(|p| p.overall_rating as u32).sum();
        sum as f32 / self.players.len() as f32
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}
