//! Win bias for games that steer their draw.

use super::Draw;
use arcade_types::casino::DEFAULT_WIN_PROBABILITY;

/// Probability that a biased game forces a winning draw.
///
/// Always within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bias {
    win_probability: f64,
}

impl Bias {
    /// Bias with the given win probability, clamped into `[0, 1]` (NaN is 0).
    pub fn new(win_probability: f64) -> Self {
        let win_probability = if win_probability.is_nan() {
            0.0
        } else {
            win_probability.clamp(0.0, 1.0)
        };
        Self { win_probability }
    }

    pub fn always_win() -> Self {
        Self::new(1.0)
    }

    pub fn never_win() -> Self {
        Self::new(0.0)
    }

    pub fn win_probability(&self) -> f64 {
        self.win_probability
    }

    /// Single Bernoulli draw deciding whether this round is forced to win.
    pub fn should_player_win(&self, rng: &mut impl Draw) -> bool {
        rng.chance(self.win_probability)
    }
}

impl Default for Bias {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_PROBABILITY)
    }
}
