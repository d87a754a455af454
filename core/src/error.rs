use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Header cells are read-only")]
    ReadOnlyCell,
    #[error("Answers must be at most three decimal digits")]
    InvalidAnswer,
}

pub type Result<T> = core::result::Result<T, GameError>;
