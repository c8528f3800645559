use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Stake the player starts every game with.
pub const DEFAULT_STAKE: f64 = 1.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing found yet, the stake can still be changed.
    FirstMove,
    /// At least one gem found, the stake is locked in.
    Locked,
    Over,
}

impl GamePhase {
    pub const fn is_first_move(self) -> bool {
        matches!(self, Self::FirstMove)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::FirstMove
    }
}

/// Deals a fresh game, rejecting settings that would produce a degenerate grid.
pub fn init_game(settings: GameSettings, generator: impl GridGenerator) -> Result<GameState> {
    settings.validate()?;
    GameState::from_layout(settings, generator.generate(settings))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    settings: GameSettings,
    layout: GemLayout,
    revealed: Vec<bool>,
    revealed_count: CellCount,
    phase: GamePhase,
    score: CellCount,
    stake: f64,
    multiplier: f64,
    potential_payout: f64,
}

impl GameState {
    pub fn from_layout(settings: GameSettings, layout: GemLayout) -> Result<Self> {
        settings.validate()?;
        if layout.grid_size() != settings.grid_size {
            return Err(GameError::InvalidLayout);
        }
        Ok(Self::new_unchecked(settings, layout))
    }

    pub(crate) fn new_unchecked(settings: GameSettings, layout: GemLayout) -> Self {
        let multiplier = settings.base_multiplier;
        log::debug!(
            "New game: {} cells, {} rubies dealt",
            layout.grid_size(),
            layout.trap_count()
        );
        Self {
            revealed: vec![false; layout.grid_size().into()],
            settings,
            layout,
            revealed_count: 0,
            phase: Default::default(),
            score: 0,
            stake: DEFAULT_STAKE,
            multiplier,
            potential_payout: calculate_potential_payout(DEFAULT_STAKE, multiplier),
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Whether the stake can no longer be edited: the game is over or a cell was already revealed.
    pub fn is_stake_locked(&self) -> bool {
        self.is_game_over() || self.revealed_count > 0
    }

    pub fn blocks(&self) -> &[bool] {
        self.layout.blocks()
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn score(&self) -> CellCount {
        self.score
    }

    pub fn stake(&self) -> f64 {
        self.stake
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn potential_payout(&self) -> f64 {
        self.potential_payout
    }

    /// Odds that the next pick is a gem, as shown next to the board.
    pub fn current_odds(&self) -> f64 {
        calculate_odds(
            self.settings.grid_size,
            self.settings.mine_count,
            self.revealed_count,
        )
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<CellView> {
        let index = self.layout.validate_index(index)?;
        Ok(self.view_of(index.to_slice_index()))
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        (0..self.revealed.len()).map(|i| self.view_of(i))
    }

    pub fn reveal_cell(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let index = self.layout.validate_index(index)?;
        let slot = index.to_slice_index();

        if self.phase.is_over() || self.revealed[slot] {
            return Ok(RevealOutcome::NoChange);
        }

        self.revealed[slot] = true;
        self.revealed_count += 1;

        if self.layout[index] {
            self.score += 1;
            self.multiplier = calculate_multiplier(
                self.settings.base_multiplier,
                self.settings.risk_factor,
                self.score,
            );
            self.update_payout();
            self.phase = GamePhase::Locked;
            log::trace!(
                "Gem at {}, score {}, multiplier {:.4}",
                index,
                self.score,
                self.multiplier
            );
            Ok(RevealOutcome::Gem)
        } else {
            self.phase = GamePhase::Over;
            log::trace!("Ruby at {}, game over with score {}", index, self.score);
            Ok(RevealOutcome::Ruby)
        }
    }

    pub fn set_stake(&mut self, stake: f64) -> Result<StakeOutcome> {
        if !stake.is_finite() || stake < 0.0 {
            return Err(GameError::InvalidStake);
        }

        if !self.phase.is_first_move() {
            return Ok(StakeOutcome::NoChange);
        }

        self.stake = stake;
        self.update_payout();
        Ok(StakeOutcome::Changed)
    }

    fn update_payout(&mut self) {
        self.potential_payout = calculate_potential_payout(self.stake, self.multiplier);
    }

    fn view_of(&self, slot: usize) -> CellView {
        match (self.revealed[slot], self.layout.blocks()[slot]) {
            (false, _) => CellView::Hidden,
            (true, true) => CellView::Gem,
            (true, false) => CellView::Ruby,
        }
    }
}
