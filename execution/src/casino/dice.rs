//! Two-dice over/under. Always drawn fairly.

use super::Draw;
use arcade_types::casino::{Category, DiceBet, Multiplier, PayoutResult};

/// Roll two dice.
pub fn roll(rng: &mut impl Draw) -> (u8, u8) {
    (rng.roll_die(), rng.roll_die())
}

/// Price a range bet. Low and high pay 2x, seven pays 5x.
pub fn payout(selection: DiceBet, first: u8, second: u8) -> PayoutResult {
    if !selection.contains(first.saturating_add(second)) {
        return PayoutResult::loss();
    }
    let multiplier = match selection {
        DiceBet::Seven => Multiplier::whole(5),
        DiceBet::Low | DiceBet::High => Multiplier::whole(2),
    };
    PayoutResult::new(multiplier, Category::Win)
}
