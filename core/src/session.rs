use rand::prelude::*;

use crate::*;

/// Owns the game a single player is working on, along with what it needs to deal the next one.
#[derive(Clone, Debug)]
pub struct GameSession {
    placement: Placement,
    seeds: SmallRng,
    state: GameState,
}

impl GameSession {
    pub fn new(settings: GameSettings, seed: u64) -> Result<Self> {
        Self::with_placement(settings, Placement::default(), seed)
    }

    pub fn with_placement(settings: GameSettings, placement: Placement, seed: u64) -> Result<Self> {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let generator = RandomGridGenerator::new(seeds.next_u64(), placement);
        let state = init_game(settings, generator)?;
        Ok(Self {
            placement,
            seeds,
            state,
        })
    }

    pub fn settings(&self) -> &GameSettings {
        self.state.settings()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn reveal_cell(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        self.state.reveal_cell(index)
    }

    pub fn set_stake(&mut self, stake: f64) -> Result<StakeOutcome> {
        self.state.set_stake(stake)
    }

    /// Throws the current game away and deals a new one with the same settings.
    pub fn reset_game(&mut self) {
        let settings = *self.state.settings();
        let generator = RandomGridGenerator::new(self.seeds.next_u64(), self.placement);
        log::debug!("Resetting game after score {}", self.state.score());
        self.state = GameState::new_unchecked(settings, generator.generate(settings));
    }
}
