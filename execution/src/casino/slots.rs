//! Three-reel slot machine.
//!
//! A biased win repeats one uniformly chosen symbol on every reel. Otherwise
//! reels are redrawn until no two match, bounded by [MAX_REROLLS].

use super::{Bias, Draw};
use arcade_types::casino::{Category, Multiplier, PayoutResult, Symbol, MAX_REROLLS};

/// Reels returned when redraws run out. No two symbols match.
const FALLBACK_LOSS: [Symbol; 3] = [Symbol::Diamond, Symbol::Seven, Symbol::Star];

/// Three-of-a-kind multiplier for each symbol.
pub fn multiplier(symbol: Symbol) -> Multiplier {
    match symbol {
        Symbol::Diamond => Multiplier::whole(100),
        Symbol::Seven => Multiplier::whole(50),
        Symbol::Star => Multiplier::whole(20),
        Symbol::Cherry => Multiplier::whole(10),
        Symbol::Bell => Multiplier::whole(5),
        Symbol::Lemon => Multiplier::whole(3),
    }
}

fn random_symbol(rng: &mut impl Draw) -> Symbol {
    rng.pick(&Symbol::ALL).copied().unwrap_or(Symbol::Lemon)
}

/// Whether any two reels show the same symbol.
pub fn has_match(reels: &[Symbol; 3]) -> bool {
    let [a, b, c] = reels;
    a == b || b == c || a == c
}

/// Spin the reels.
pub fn generate(bias: &Bias, rng: &mut impl Draw) -> [Symbol; 3] {
    if bias.should_player_win(rng) {
        let symbol = random_symbol(rng);
        return [symbol; 3];
    }

    for _ in 0..MAX_REROLLS {
        let reels = [random_symbol(rng), random_symbol(rng), random_symbol(rng)];
        if !has_match(&reels) {
            return reels;
        }
    }
    FALLBACK_LOSS
}

/// Price a spin.
///
/// Two matching reels only return the stake, so they settle as a push.
pub fn payout(reels: &[Symbol; 3]) -> PayoutResult {
    let [a, b, c] = reels;
    if a == b && b == c {
        return PayoutResult::new(multiplier(*a), Category::Win);
    }
    if has_match(reels) {
        return PayoutResult::new(Multiplier::ONE, Category::Push);
    }
    PayoutResult::loss()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::GameRng;
    use crate::mocks::{Fixed, OutOfRange};

    #[test]
    fn test_forced_win_is_three_of_a_kind() {
        for round in 0..200 {
            let mut rng = GameRng::new(1, round);
            let [a, b, c] = generate(&Bias::always_win(), &mut rng);
            assert!(a == b && b == c);
        }
    }

    #[test]
    fn test_forced_loss_has_no_match() {
        for round in 0..200 {
            let mut rng = GameRng::new(2, round);
            let reels = generate(&Bias::never_win(), &mut rng);
            assert!(!has_match(&reels), "{reels:?}");
        }
    }

    #[test]
    fn test_forced_loss_falls_back_when_rng_stuck() {
        // Every reel draws the same symbol, so redraws never escape.
        let mut rng = Fixed::new(vec![4]);
        let reels = generate(&Bias::never_win(), &mut rng);
        assert_eq!(reels, FALLBACK_LOSS);
        assert!(!has_match(&reels));
    }

    #[test]
    fn test_out_of_range_draws() {
        let [a, b, c] = generate(&Bias::always_win(), &mut OutOfRange);
        assert!(a == b && b == c);

        let reels = generate(&Bias::never_win(), &mut OutOfRange);
        assert_eq!(reels, FALLBACK_LOSS);
        assert_eq!(payout(&reels).category, Category::Loss);
    }

    #[test]
    fn test_three_of_a_kind_payouts() {
        let expected = [
            (Symbol::Diamond, 100),
            (Symbol::Seven, 50),
            (Symbol::Star, 20),
            (Symbol::Cherry, 10),
            (Symbol::Bell, 5),
            (Symbol::Lemon, 3),
        ];
        for (symbol, times) in expected {
            let result = payout(&[symbol; 3]);
            assert_eq!(result.category, Category::Win);
            assert_eq!(result.payout(5), 5 * times);
        }
    }

    #[test]
    fn test_table_follows_symbol_rank() {
        for pair in Symbol::ALL.windows(2) {
            assert!(multiplier(pair[0]).apply(1) > multiplier(pair[1]).apply(1));
        }
    }

    #[test]
    fn test_pair_returns_stake() {
        for reels in [
            [Symbol::Bell, Symbol::Bell, Symbol::Lemon],
            [Symbol::Bell, Symbol::Lemon, Symbol::Lemon],
            [Symbol::Lemon, Symbol::Bell, Symbol::Lemon],
        ] {
            let result = payout(&reels);
            assert_eq!(result.category, Category::Push);
            assert_eq!(result.payout(10), 10);
        }
    }

    #[test]
    fn test_no_match_loses() {
        let result = payout(&[Symbol::Cherry, Symbol::Bell, Symbol::Lemon]);
        assert_eq!(result, PayoutResult::loss());
        assert_eq!(result.payout(10), 0);
    }
}
