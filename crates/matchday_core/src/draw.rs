//! Team distribution: shuffle the pool, deal two disjoint teams.

use crate::error::{Result, SimError};
use crate::models::{Player, Team};
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_TEAM_SIZE: usize = 10;

/// Randomly permute `players` and deal two non-overlapping teams of
/// `team_size`. Purely positional after the shuffle; no balancing.
/// Players beyond `2 * team_size` sit the match out.
pub fn draw_teams(
    mut players: Vec<Player>,
    team_size: usize,
    rng: &mut impl Rng,
) -> Result<(Team, Team)> {
    let needed = team_size * 2;
    if players.len() < needed {
        return Err(SimError::RosterTooSmall { needed, found: players.len() });
    }

    players.shuffle(rng);
    players.truncate(needed);
    let away_players = players.split_off(team_size);

    tracing::debug!(team_size, "teams drawn");
    Ok((Team::new("Home", players), Team::new("Away", away_players)))
}
