//! Common types used throughout arcade.
//!
//! Everything in this crate is plain data: bets, draws, cards and settlement
//! records. Game logic lives in `arcade-execution`.

pub mod casino;
