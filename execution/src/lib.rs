//! Wagering engine for the arcade games.
//!
//! The [engine::Arcade] sequences every round against a single [wallet::Wallet]:
//! the stake is debited up front, the outcome is drawn after a delay, and any
//! payout is credited before listeners hear about the settlement.

pub mod casino;
pub mod engine;
pub mod shop;
pub mod wallet;
pub mod withdrawal;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use casino::{Bias, Draw, EntropyRng, GameError, GameRng};
pub use engine::{Arcade, Config, HandView, Rejection, Ticket};
pub use wallet::{FileStore, Memory, Store, StoreError, Wallet};
