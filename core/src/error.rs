use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must have at least one cell")]
    InvalidGridSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Base multiplier must be a positive finite number")]
    InvalidMultiplier,
    #[error("Risk factor must be a non-negative finite number")]
    InvalidRiskFactor,
    #[error("Layout does not match declared grid size")]
    InvalidLayout,
    #[error("Invalid cell index")]
    InvalidIndex,
    #[error("Stake must be a non-negative finite number")]
    InvalidStake,
}

pub type Result<T> = core::result::Result<T, GameError>;
