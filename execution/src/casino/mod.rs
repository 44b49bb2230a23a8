//! Casino game execution module.
//!
//! This module contains the draw and payout logic for every game:
//! - Slots
//! - Roulette
//! - Dice
//! - Blackjack
//!
//! Slots and roulette consult a [Bias] to steer their draw; dice and
//! blackjack always draw uniformly.

pub mod bias;
pub mod blackjack;
pub mod dice;
pub mod roulette;
pub mod slots;

pub use bias::Bias;

use arcade_types::casino::{
    Bet, Card, DiceBet, GameType, Outcome, PayoutResult, RouletteColor, Selection, DECK_SIZE,
};
use commonware_cryptography::{sha256::Sha256, Hasher};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of every random draw made by a game.
///
/// Games only ever ask for a uniform integer; swapping the implementation
/// swaps the entropy source (seeded hash chain, OS entropy, or a fixed
/// sequence in tests).
pub trait Draw {
    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0.
    fn uniform(&mut self, n: u32) -> u32;

    /// [Draw::uniform] folded back into `[0, n)`, so helpers stay in range
    /// even when an implementation does not.
    fn bounded(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.uniform(n) % n
    }

    /// Roll a single die (1-6).
    fn roll_die(&mut self) -> u8 {
        self.bounded(6) as u8 + 1
    }

    /// Spin roulette wheel (0-36).
    fn spin_roulette(&mut self) -> u8 {
        self.bounded(37) as u8
    }

    /// Bernoulli draw that succeeds with `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 || probability.is_nan() {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        let threshold = (probability * CHANCE_RESOLUTION as f64) as u32;
        self.uniform(CHANCE_RESOLUTION) < threshold
    }

    /// Pick one element uniformly. Returns `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.uniform(items.len() as u32) as usize)
    }

    /// Shuffle a slice in place using Fisher-Yates.
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.bounded((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Create a shuffled deck of 52 cards.
    fn create_deck(&mut self) -> Vec<Card>
    where
        Self: Sized,
    {
        let mut deck: Vec<Card> = (0..DECK_SIZE).filter_map(Card::from_index).collect();
        self.shuffle(&mut deck);
        deck
    }
}

impl<D: Draw + ?Sized> Draw for &mut D {
    fn uniform(&mut self, n: u32) -> u32 {
        (**self).uniform(n)
    }
}

impl<D: Draw + ?Sized> Draw for Box<D> {
    fn uniform(&mut self, n: u32) -> u32 {
        (**self).uniform(n)
    }
}

/// Granularity of [Draw::chance].
const CHANCE_RESOLUTION: u32 = 1_000_000;

/// Deterministic random number generator.
///
/// Uses SHA256 hash chains to generate random numbers deterministically
/// from a seed and round number, so any round can be replayed.
#[derive(Clone)]
pub struct GameRng {
    state: [u8; 32],
    index: usize,
}

impl GameRng {
    /// Create a new RNG from a seed and round number.
    pub fn new(seed: u64, round: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(&seed.to_be_bytes());
        hasher.update(&round.to_be_bytes());
        Self {
            state: hasher.finalize().0,
            index: 0,
        }
    }

    /// Get the next random byte.
    fn next_byte(&mut self) -> u8 {
        if self.index >= 32 {
            // Rehash to get more bytes
            let mut hasher = Sha256::new();
            hasher.update(&self.state);
            self.state = hasher.finalize().0;
            self.index = 0;
        }
        let result = self.state[self.index];
        self.index += 1;
        result
    }

    /// Get a random u32 value.
    pub fn next_u32(&mut self) -> u32 {
        u32::from_be_bytes([
            self.next_byte(),
            self.next_byte(),
            self.next_byte(),
            self.next_byte(),
        ])
    }
}

impl Draw for GameRng {
    fn uniform(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        // Rejection sampling for unbiased distribution
        let limit = u32::MAX - (u32::MAX % n);
        loop {
            let value = self.next_u32();
            if value < limit {
                return value % n;
            }
        }
    }
}

/// Draws backed by the platform entropy source.
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Draw for EntropyRng {
    fn uniform(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.inner.gen_range(0..n)
    }
}

/// Error during a game move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move is not allowed in the current stage.
    InvalidMove,
    /// No active round with this id.
    RoundNotFound,
    /// Round has already settled.
    RoundComplete,
    /// Deck is exhausted (no more cards to draw).
    DeckExhausted,
}

/// A validated bet, narrowed to the selection its game needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wager {
    Slots,
    Roulette(RouletteColor),
    Dice(DiceBet),
    Blackjack,
}

impl Wager {
    /// Narrow a bet to its wager. `None` if the selection is missing or
    /// belongs to another game.
    pub fn from_bet(bet: &Bet) -> Option<Wager> {
        match (bet.game, bet.selection) {
            (GameType::Slots, None) => Some(Wager::Slots),
            (GameType::Roulette, Some(Selection::Roulette(color))) => Some(Wager::Roulette(color)),
            (GameType::Dice, Some(Selection::Dice(range))) => Some(Wager::Dice(range)),
            (GameType::Blackjack, None) => Some(Wager::Blackjack),
            _ => None,
        }
    }

    pub fn game(&self) -> GameType {
        match self {
            Wager::Slots => GameType::Slots,
            Wager::Roulette(_) => GameType::Roulette,
            Wager::Dice(_) => GameType::Dice,
            Wager::Blackjack => GameType::Blackjack,
        }
    }
}

/// Draw and price a single-draw game.
///
/// Returns `None` for blackjack, which is played move by move through
/// [blackjack::BlackjackState].
pub fn play_instant(
    wager: Wager,
    bias: &Bias,
    rng: &mut impl Draw,
) -> Option<(Outcome, PayoutResult)> {
    match wager {
        Wager::Slots => {
            let reels = slots::generate(bias, rng);
            Some((Outcome::Slots(reels), slots::payout(&reels)))
        }
        Wager::Roulette(color) => {
            let number = roulette::generate(color, bias, rng);
            Some((Outcome::Roulette { number }, roulette::payout(color, number)))
        }
        Wager::Dice(range) => {
            let (first, second) = dice::roll(rng);
            Some((
                Outcome::Dice { first, second },
                dice::payout(range, first, second),
            ))
        }
        Wager::Blackjack => None,
    }
}
