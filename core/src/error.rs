use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board dimensions {width}x{height}, each side must be between 1 and 255")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Invalid mine ratio, the denominator must be at least 1")]
    InvalidMineRatio,
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
