//! Closed-form calculators backing the stats panel of a game.
//!
//! These are free functions so front-ends can show figures before a game has
//! state to speak of, e.g. the odds of the very first pick.

use crate::*;

/// Probability that the next unrevealed cell is a gem, given that
/// `revealed_count` gems were already found.
///
/// Returns `0.0` once no cell is left to reveal.
pub fn calculate_odds(
    grid_size: CellCount,
    mine_count: CellCount,
    revealed_count: CellCount,
) -> f64 {
    let remaining = grid_size.saturating_sub(revealed_count);
    if remaining == 0 {
        return 0.0;
    }

    let safe_remaining = f64::from(grid_size) - f64::from(mine_count) - f64::from(revealed_count);
    (safe_remaining / f64::from(remaining)).clamp(0.0, 1.0)
}

/// Multiplier after `score` gems: `base_multiplier * (1 + risk_factor)^score`.
pub fn calculate_multiplier(base_multiplier: f64, risk_factor: f64, score: CellCount) -> f64 {
    base_multiplier * powu(1.0 + risk_factor, score)
}

pub fn calculate_potential_payout(stake: f64, multiplier: f64) -> f64 {
    stake * multiplier
}

/// Integer power by squaring, `f64::powi` is not available without `std`.
fn powu(mut base: f64, mut exp: CellCount) -> f64 {
    let mut acc = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= base;
        }
        base *= base;
        exp >>= 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        let diff = a - b;
        diff < 1e-9 && diff > -1e-9
    }

    #[test]
    fn odds_of_first_pick_on_classic_board() {
        assert!(approx_eq(calculate_odds(25, 5, 0), 0.8));
    }

    #[test]
    fn odds_shrink_as_gems_are_found() {
        assert!(approx_eq(calculate_odds(25, 5, 10), 10.0 / 15.0));
        assert!(approx_eq(calculate_odds(25, 5, 20), 0.0));
    }

    #[test]
    fn odds_are_zero_when_nothing_is_left() {
        assert_eq!(calculate_odds(25, 5, 25), 0.0);
        assert_eq!(calculate_odds(25, 0, 30), 0.0);
    }

    #[test]
    fn odds_are_clamped_past_the_last_gem() {
        assert_eq!(calculate_odds(25, 5, 22), 0.0);
        assert_eq!(calculate_odds(10, 0, 3), 1.0);
    }

    #[test]
    fn multiplier_compounds_per_gem() {
        assert!(approx_eq(calculate_multiplier(1.2, 0.1, 0), 1.2));
        assert!(approx_eq(calculate_multiplier(1.2, 0.1, 3), 1.5972));
        assert!(approx_eq(calculate_multiplier(2.0, 1.0, 10), 2048.0));
    }

    #[test]
    fn multiplier_is_flat_without_risk() {
        assert!(approx_eq(calculate_multiplier(1.5, 0.0, 7), 1.5));
    }

    #[test]
    fn payout_is_stake_times_multiplier() {
        assert!(approx_eq(calculate_potential_payout(2.0, 1.5972), 3.1944));
        assert_eq!(calculate_potential_payout(0.0, 3.0), 0.0);
    }
}
