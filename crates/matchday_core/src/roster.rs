//! Roster loading: player CSV → `Vec<Player>`.
//!
//! The file is a headered CSV with the columns `name, full_name,
//! birth_date, age, height_cm, weight_kgs, positions, nationality,
//! overall_rating, potential, value_euro, wage_euro` (`positions` is
//! comma-separated inside the field). Every field arrives as text and
//! numeric conversion is lossy: malformed values degrade to 0 rather
//! than failing the row. Structural problems (missing file, missing
//! column, bad quoting) propagate as errors.

use crate::error::Result;
use crate::models::Player;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    full_name: String,
    birth_date: String,
    age: String,
    height_cm: String,
    weight_kgs: String,
    positions: String,
    nationality: String,
    overall_rating: String,
    potential: String,
    value_euro: String,
    wage_euro: String,
}

fn lossy_u8(field: &str) -> u8 {
    field.trim().parse().unwrap_or(0)
}

fn lossy_f32(field: &str) -> f32 {
    field.trim().parse().unwrap_or(0.0)
}

fn lossy_f64(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

impl RawRow {
    fn into_player(self) -> Player {
        Player {
            name: self.name.trim().trim_start_matches('\u{feff}').to_string(), // Strip BOM
            full_name: self.full_name.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
            age: lossy_u8(&self.age),
            height_cm: lossy_f32(&self.height_cm),
            weight_kgs: lossy_f32(&self.weight_kgs),
            positions: self
                .positions
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            nationality: self.nationality.trim().to_string(),
            overall_rating: lossy_u8(&self.overall_rating),
            potential: lossy_u8(&self.potential),
            value_euro: lossy_f64(&self.value_euro),
            wage_euro: lossy_f64(&self.wage_euro),
        }
    }
}

/// Read the full player roster from a headered CSV file.
pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut players = Vec::new();
    for row in reader.deserialize() {
        let row: RawRow = row?;
        players.push(row.into_player());
    }

    tracing::debug!(count = players.len(), path = %path.display(), "roster loaded");
    Ok(players)
}
