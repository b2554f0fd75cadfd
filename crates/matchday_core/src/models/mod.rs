pub mod match_result;
pub mod player;
pub mod team;

pub use match_result::MatchResult;
pub use player::Player;
pub use team::{Team, TeamSide};
