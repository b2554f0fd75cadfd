//! Result persistence: an append-only `results` table in a local SQLite
//! file. One connection per write: callers open the store, append one
//! row, and drop it. No updates, deletes, or reads elsewhere.

use crate::error::Result;
use crate::models::MatchResult;
use rusqlite::{params, Connection};
use std::path::Path;

pub struct ResultStore {
    conn: Connection,
}

impl ResultStore {
    /// Open (or create) the database and ensure the results table exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS results (
                 id INTEGER PRIMARY KEY,
                 winner TEXT NOT NULL,
                 loser TEXT NOT NULL,
                 team1_score INTEGER NOT NULL,
                 team2_score INTEGER NOT NULL
             )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Append one match result. Returns the new rowid.
    pub fn append(&self, result: &MatchResult) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO results (winner, loser, team1_score, team2_score)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                result.winner_label(),
                result.loser_label(),
                result.home_score,
                result.away_score
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, home = result.home_score, away = result.away_score, "result stored");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(home_score: u8, away_score: u8) -> MatchResult {
        MatchResult {
            winner_names: vec!["W1".to_string(), "W2".to_string()],
            loser_names: vec!["L1".to_string(), "L2".to_string()],
            home_score,
            away_score,
        }
    }

    #[test]
    fn test_append_creates_exactly_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.db");

        let store = ResultStore::open(&path).unwrap();
        let id = store.append(&sample_result(6, 3)).unwrap();
        assert_eq!(id, 1);

        let (count, winner, team1, team2): (i64, String, u8, u8) = store
            .conn
            .query_row(
                "SELECT COUNT(*), winner, team1_score, team2_score FROM results",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(winner, "W1,W2");
        assert_eq!((team1, team2), (6, 3));
    }

    #[test]
    fn test_reopen_appends_to_existing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.db");

        // Connection opened and closed around each write.
        ResultStore::open(&path).unwrap().append(&sample_result(6, 3)).unwrap();
        let id = ResultStore::open(&path).unwrap().append(&sample_result(4, 5)).unwrap();
        assert_eq!(id, 2);

        let store = ResultStore::open(&path).unwrap();
        let count: i64 =
            store.conn.query_row("SELECT COUNT(*) FROM results", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 2);
    }
}
