//! Helpers for driving games and the engine from tests.

use crate::casino::Draw;
use crate::wallet::{Memory, Wallet};

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound, so `Fixed::new(vec![0])`
/// always returns the lowest option.
#[derive(Clone, Debug, Default)]
pub struct Fixed {
    values: Vec<u32>,
    index: usize,
}

impl Fixed {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl Draw for Fixed {
    fn uniform(&mut self, n: u32) -> u32 {
        if n == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value % n
    }
}

/// Ignores the requested bound and always returns `u32::MAX`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutOfRange;

impl Draw for OutOfRange {
    fn uniform(&mut self, _: u32) -> u32 {
        u32::MAX
    }
}

/// Creates an in-memory wallet holding `balance` coins.
pub fn create_wallet(balance: u64) -> Wallet<Memory> {
    Wallet::with_balance(Memory::default(), balance)
}
