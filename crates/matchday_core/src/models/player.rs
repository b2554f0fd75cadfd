use serde::{Deserialize, Serialize};

/// A single roster entry, loaded once per CSV row and immutable after
/// construction.
///
/// Numeric fields are lossy: the roster loader degrades malformed values
/// to 0 instead of rejecting the row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub full_name: String,
    pub birth_date: String,
    pub age: u8,
    pub height_cm: f32,
    pub weight_kgs: f32,
    /// Playing positions, split from the comma-separated CSV field.
    pub positions: Vec<String>,
    pub nationality: String,
    /// Overall rating, the sole strength signal for simulation.
    pub overall_rating: u8,
    pub potential: u8,
    pub value_euro: f64,
    pub wage_euro: f64,
}

impl Player {
    /// Positions joined for display, e.g. "ST, CF".
    pub fn position_summary(&self) -> String {
        self.positions.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_summary_joins_positions() {
        let player = Player {
            name: "A. Keeper".to_string(),
            full_name: "Alex Keeper".to_string(),
            birth_date: "1990-01-01".to_string(),
            age: 28,
            height_cm: 188.0,
            weight_kgs: 82.0,
            positions: vec!["ST".to_string(), "CF".to_string()],
            nationality: "Utopia".to_string(),
            overall_rating: 77,
            potential: 80,
            value_euro: 1_000_000.0,
            wage_euro: 10_000.0,
        };
        assert_eq!(player.position_summary(), "ST, CF");
    }
}
