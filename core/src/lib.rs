#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use odds::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod odds;
mod session;
mod types;

/// Immutable configuration of a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub grid_size: CellCount,
    pub mine_count: CellCount,
    pub base_multiplier: f64,
    pub risk_factor: f64,
}

impl GameSettings {
    pub const fn new_unchecked(
        grid_size: CellCount,
        mine_count: CellCount,
        base_multiplier: f64,
        risk_factor: f64,
    ) -> Self {
        Self {
            grid_size,
            mine_count,
            base_multiplier,
            risk_factor,
        }
    }

    pub fn new(
        grid_size: CellCount,
        mine_count: CellCount,
        base_multiplier: f64,
        risk_factor: f64,
    ) -> Result<Self> {
        let settings = Self::new_unchecked(grid_size, mine_count, base_multiplier, risk_factor);
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(GameError::InvalidGridSize);
        }
        if self.mine_count > self.grid_size {
            return Err(GameError::TooManyMines);
        }
        if !self.base_multiplier.is_finite() || self.base_multiplier <= 0.0 {
            return Err(GameError::InvalidMultiplier);
        }
        if !self.risk_factor.is_finite() || self.risk_factor < 0.0 {
            return Err(GameError::InvalidRiskFactor);
        }
        Ok(())
    }

    /// Fraction of the grid expected to hold traps.
    pub fn trap_ratio(&self) -> f64 {
        f64::from(self.mine_count) / f64::from(self.grid_size)
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.grid_size {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new_unchecked(25, 5, 1.2, 0.1)
    }
}

/// Hidden contents of the grid: `true` marks a gem, `false` a ruby.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GemLayout {
    blocks: Vec<bool>,
    gem_count: CellCount,
}

impl GemLayout {
    pub fn from_blocks(blocks: Vec<bool>) -> Result<Self> {
        let Ok(len) = CellCount::try_from(blocks.len()) else {
            return Err(GameError::InvalidGridSize);
        };
        if len == 0 {
            return Err(GameError::InvalidGridSize);
        }
        Ok(Self::from_blocks_unchecked(blocks))
    }

    pub(crate) fn from_blocks_unchecked(blocks: Vec<bool>) -> Self {
        let gem_count = blocks.iter().filter(|&&is_gem| is_gem).count() as CellCount;
        Self { blocks, gem_count }
    }

    pub fn from_trap_indices(grid_size: CellCount, traps: &[CellIndex]) -> Result<Self> {
        if grid_size == 0 {
            return Err(GameError::InvalidGridSize);
        }
        let mut blocks = vec![true; grid_size.into()];

        for &index in traps {
            if index >= grid_size {
                return Err(GameError::InvalidIndex);
            }
            blocks[index.to_slice_index()] = false;
        }

        Ok(Self::from_blocks_unchecked(blocks))
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index.to_slice_index() < self.blocks.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn grid_size(&self) -> CellCount {
        self.blocks.len() as CellCount
    }

    pub fn gem_count(&self) -> CellCount {
        self.gem_count
    }

    pub fn trap_count(&self) -> CellCount {
        self.grid_size() - self.gem_count
    }

    pub fn is_gem(&self, index: CellIndex) -> bool {
        self[index]
    }

    pub fn blocks(&self) -> &[bool] {
        &self.blocks
    }
}

impl Index<CellIndex> for GemLayout {
    type Output = bool;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.blocks[index.to_slice_index()]
    }
}

/// Signal emitted by a reveal, distinguishing a found gem from a hit ruby.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Gem,
    Ruby,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Gem => true,
            Ruby => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StakeOutcome {
    NoChange,
    Changed,
}

impl StakeOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_classic_board() {
        let settings = GameSettings::default();

        assert_eq!(settings.grid_size, 25);
        assert_eq!(settings.mine_count, 5);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn settings_reject_degenerate_configuration() {
        assert_eq!(
            GameSettings::new(0, 0, 1.2, 0.1),
            Err(GameError::InvalidGridSize)
        );
        assert_eq!(
            GameSettings::new(4, 5, 1.2, 0.1),
            Err(GameError::TooManyMines)
        );
        assert_eq!(
            GameSettings::new(4, 1, 0.0, 0.1),
            Err(GameError::InvalidMultiplier)
        );
        assert_eq!(
            GameSettings::new(4, 1, f64::NAN, 0.1),
            Err(GameError::InvalidMultiplier)
        );
        assert_eq!(
            GameSettings::new(4, 1, 1.2, -0.5),
            Err(GameError::InvalidRiskFactor)
        );
        assert!(GameSettings::new(4, 4, 1.0, 0.0).is_ok());
    }

    #[test]
    fn layout_from_trap_indices_marks_rubies() {
        let layout = GemLayout::from_trap_indices(5, &[1, 3]).unwrap();

        assert_eq!(layout.blocks(), &[true, false, true, false, true]);
        assert_eq!(layout.gem_count(), 3);
        assert_eq!(layout.trap_count(), 2);
        assert!(!layout.is_gem(3));
    }

    #[test]
    fn layout_rejects_out_of_range_traps() {
        assert_eq!(
            GemLayout::from_trap_indices(5, &[5]),
            Err(GameError::InvalidIndex)
        );
        assert_eq!(
            GemLayout::from_blocks(Vec::new()),
            Err(GameError::InvalidGridSize)
        );
    }

    #[test]
    fn reveal_outcome_reports_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Gem.has_update());
        assert!(RevealOutcome::Ruby.has_update());
        assert!(StakeOutcome::Changed.has_update());
    }
}
