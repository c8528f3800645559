use crate::*;
pub use random::*;

mod random;

pub trait GridGenerator {
    fn generate(self, settings: GameSettings) -> GemLayout;
}

/// How traps are spread over the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Every cell is independently a ruby with probability `mine_count / grid_size`, so the actual
    /// number of rubies varies from game to game.
    #[default]
    PerCell,
    /// Exactly `mine_count` rubies at distinct, uniformly chosen cells.
    Exact,
}
