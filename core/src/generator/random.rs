use super::*;
use alloc::vec;
use alloc::vec::Vec;

/// Generation strategy that scatters rubies with a seeded pseudo-random source. Nothing about it is auditable, the
/// seed only makes a deal reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomGridGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, settings: GameSettings) -> GemLayout {
        use Placement::*;
        use rand::prelude::*;

        let grid_size = usize::from(settings.grid_size);
        let mine_count = usize::from(settings.mine_count);

        if mine_count > grid_size {
            log::warn!(
                "Grid already full, generated anyway, requested {} but only fits {}",
                mine_count,
                grid_size
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let blocks: Vec<bool> = match self.placement {
            PerCell => {
                let trap_ratio = settings.trap_ratio().clamp(0.0, 1.0);
                (0..grid_size)
                    .map(|_| !rng.random_bool(trap_ratio))
                    .collect()
            }
            Exact => {
                let mine_count = mine_count.min(grid_size);
                let mut blocks = vec![true; grid_size];
                for index in rand::seq::index::sample(&mut rng, grid_size, mine_count) {
                    blocks[index] = false;
                }
                blocks
            }
        };

        let layout = GemLayout::from_blocks_unchecked(blocks);
        if layout.trap_count() != settings.mine_count {
            match self.placement {
                PerCell => log::debug!(
                    "Dealt {} rubies, expected {}",
                    layout.trap_count(),
                    settings.mine_count
                ),
                Exact => log::warn!(
                    "Generated grid count mismatch, actual: {}, requested: {}",
                    layout.trap_count(),
                    settings.mine_count
                ),
            }
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_placement_deals_requested_rubies() {
        let settings = GameSettings::default();

        for seed in 0..32 {
            let layout = RandomGridGenerator::new(seed, Placement::Exact).generate(settings);
            assert_eq!(layout.grid_size(), 25);
            assert_eq!(layout.trap_count(), 5);
        }
    }

    #[test]
    fn same_seed_deals_same_grid() {
        let settings = GameSettings::default();

        let first = RandomGridGenerator::new(7, Placement::PerCell).generate(settings);
        let second = RandomGridGenerator::new(7, Placement::PerCell).generate(settings);

        assert_eq!(first, second);
    }

    #[test]
    fn per_cell_placement_respects_extremes() {
        let all_gems = GameSettings::new(16, 0, 1.0, 0.1).unwrap();
        let all_rubies = GameSettings::new(16, 16, 1.0, 0.1).unwrap();

        let layout = RandomGridGenerator::new(3, Placement::PerCell).generate(all_gems);
        assert_eq!(layout.trap_count(), 0);

        let layout = RandomGridGenerator::new(3, Placement::PerCell).generate(all_rubies);
        assert_eq!(layout.gem_count(), 0);
    }

    #[test]
    fn per_cell_placement_approximates_ratio() {
        let settings = GameSettings::new(1000, 200, 1.0, 0.1).unwrap();

        let layout = RandomGridGenerator::new(42, Placement::PerCell).generate(settings);

        // 200 expected with a standard deviation of about 12.6
        assert!((120..=280).contains(&layout.trap_count()));
    }
}
