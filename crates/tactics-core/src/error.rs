//! Board error types

use thiserror::Error;

use crate::player::{PlayerId, Team};

/// Errors returned by board edits that reference players
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("player {player} does not belong to team {team}")]
    WrongTeam { player: PlayerId, team: Team },
}

pub type BoardResult<T> = Result<T, BoardError>;
