use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {0}, expected 0 through 8")]
    InvalidIndex(CellIndex),
    #[error("No computer move is pending")]
    NotComputerTurn,
    #[error("Move selector returned no move while cells are open")]
    NoMoveSelected,
    #[error("Move selector picked cell {0}, which is not empty")]
    IllegalSelection(CellIndex),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("unexpected board character {0:?}")]
    InvalidChar(char),
    #[error("expected 9 cells, found {0}")]
    WrongLength(usize),
}

pub type Result<T> = core::result::Result<T, GameError>;
