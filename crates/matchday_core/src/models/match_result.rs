use super::{Team, TeamSide};
use serde::{Deserialize, Serialize};

/// Outcome of one simulated match, as appended to the results table.
/// Created once per match; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub winner_names: Vec<String>,
    pub loser_names: Vec<String>,
    pub home_score: u8,
    pub away_score: u8,
}

impl MatchResult {
    /// Build from the two sides and the final score.
    ///
    /// Nine rounds cannot end level, so a strict comparison is enough:
    /// anything that is not a Home win is an Away win.
    pub fn from_final_score(home: &Team, away: &Team, home_score: u8, away_score: u8) -> Self {
        let (winner, loser) = if home_score > away_score { (home, away) } else { (away, home) };
        Self {
            winner_names: winner.player_names(),
            loser_names: loser.player_names(),
            home_score,
            away_score,
        }
    }

    pub fn winning_side(&self) -> TeamSide {
        if self.home_score > self.away_score {
            TeamSide::Home
        } else {
            TeamSide::Away
        }
    }

    /// Comma-joined winner names, the encoding used by the results table.
    pub fn winner_label(&self) -> String {
        self.winner_names.join(",")
    }

    /// Comma-joined loser names, the encoding used by the results table.
    pub fn loser_label(&self) -> String {
        self.loser_names.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    fn make_player(name: &str) -> Player {
        Player {
            name: name.to_string(),
            full_name: name.to_string(),
            birth_date: String::new(),
            age: 25,
            height_cm: 180.0,
            weight_kgs: 75.0,
            positions: vec!["CM".to_string()],
            nationality: "Utopia".to_string(),
            overall_rating: 70,
            potential: 70,
            value_euro: 0.0,
            wage_euro: 0.0,
        }
    }

    #[test]
    fn test_home_win_assigns_winner_names() {
        let home = Team::new("Home", vec![make_player("H1"), make_player("H2")]);
        let away = Team::new("Away", vec![make_player("A1"), make_player("A2")]);

        let result = MatchResult::from_final_score(&home, &away, 6, 3);
        assert_eq!(result.winning_side(), TeamSide::Home);
        assert_eq!(result.winner_names, vec!["H1", "H2"]);
        assert_eq!(result.loser_names, vec!["A1", "A2"]);
        assert_eq!(result.winner_label(), "H1,H2");
    }

    #[test]
    fn test_away_win_assigns_winner_names() {
        let home = Team::new("Home", vec![make_player("H1")]);
        let away = Team::new("Away", vec![make_player("A1")]);

        let result = MatchResult::from_final_score(&home, &away, 2, 7);
        assert_eq!(result.winning_side(), TeamSide::Away);
        assert_eq!(result.winner_label(), "A1");
        assert_eq!(result.loser_label(), "H1");
    }
}
