mod card;
mod constants;
mod game;
mod outcome;
mod payout;

pub use card::*;
pub use constants::*;
pub use game::*;
pub use outcome::*;
pub use payout::*;

#[cfg(test)]
mod tests;
