//! Single-zero roulette with color bets.
//!
//! A biased win lands uniformly on a pocket of the chosen color. Otherwise
//! the wheel is respun until the color differs, bounded by [MAX_REROLLS].

use super::{Bias, Draw};
use arcade_types::casino::{Category, Multiplier, PayoutResult, RouletteColor, MAX_REROLLS};

/// Red numbers on a roulette wheel.
pub const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Black numbers on a roulette wheel.
pub const BLACK_NUMBERS: [u8; 18] = [2, 4, 6, 8, 10, 11, 13, 15, 17, 20, 22, 24, 26, 28, 29, 31, 33, 35];

const GREEN_NUMBERS: [u8; 1] = [0];

/// Color of a pocket. Numbers above 36 are not on the wheel and read as green.
pub fn color_of(number: u8) -> RouletteColor {
    if RED_NUMBERS.contains(&number) {
        RouletteColor::Red
    } else if BLACK_NUMBERS.contains(&number) {
        RouletteColor::Black
    } else {
        RouletteColor::Green
    }
}

/// Pockets of a color.
pub fn numbers_of(color: RouletteColor) -> &'static [u8] {
    match color {
        RouletteColor::Red => &RED_NUMBERS,
        RouletteColor::Black => &BLACK_NUMBERS,
        RouletteColor::Green => &GREEN_NUMBERS,
    }
}

/// Pocket returned when respins run out. Never the backed color.
fn fallback_loss(selection: RouletteColor) -> u8 {
    match selection {
        RouletteColor::Red => 2,
        RouletteColor::Black | RouletteColor::Green => 1,
    }
}

/// Spin the wheel against a color bet.
pub fn generate(selection: RouletteColor, bias: &Bias, rng: &mut impl Draw) -> u8 {
    if bias.should_player_win(rng) {
        let pockets = numbers_of(selection);
        return rng.pick(pockets).copied().unwrap_or(pockets[0]);
    }

    for _ in 0..MAX_REROLLS {
        let number = rng.spin_roulette();
        if color_of(number) != selection {
            return number;
        }
    }
    fallback_loss(selection)
}

/// Price a color bet. Green pays 35x, red and black pay 2x.
pub fn payout(selection: RouletteColor, number: u8) -> PayoutResult {
    if color_of(number) != selection {
        return PayoutResult::loss();
    }
    let multiplier = match selection {
        RouletteColor::Green => Multiplier::whole(35),
        RouletteColor::Red | RouletteColor::Black => Multiplier::whole(2),
    };
    PayoutResult::new(multiplier, Category::Win)
}
