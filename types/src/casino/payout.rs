use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use std::fmt;

use super::{GameType, Outcome};

/// Non-negative rational applied to a stake to compute the payout.
///
/// Payouts are floored: `payout = floor(stake * numerator / denominator)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Multiplier {
    numerator: u32,
    denominator: u32,
}

impl Multiplier {
    pub const ZERO: Multiplier = Multiplier::whole(0);
    pub const ONE: Multiplier = Multiplier::whole(1);

    pub const fn whole(value: u32) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Multiplier of `numerator / denominator`. A zero denominator is treated as one.
    pub const fn ratio(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator: if denominator == 0 { 1 } else { denominator },
        }
    }

    /// Coins returned for `stake` (floored, saturating at `u64::MAX`).
    pub fn apply(&self, stake: u64) -> u64 {
        let total = (stake as u128) * (self.numerator as u128) / (self.denominator as u128);
        total.min(u64::MAX as u128) as u64
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.numerator / self.denominator;
        let rest = self.numerator % self.denominator;
        if rest == 0 {
            write!(f, "{whole}x")
        } else {
            let tenths = rest * 10 / self.denominator;
            write!(f, "{whole}.{tenths}x")
        }
    }
}

impl Write for Multiplier {
    fn write(&self, writer: &mut impl BufMut) {
        self.numerator.write(writer);
        self.denominator.write(writer);
    }
}

impl Read for Multiplier {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let numerator = u32::read(reader)?;
        let denominator = u32::read(reader)?;
        if denominator == 0 {
            return Err(Error::Invalid("Multiplier", "zero denominator"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl FixedSize for Multiplier {
    const SIZE: usize = 8;
}

/// How a round ended, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    Win = 0,
    Push = 1,
    Loss = 2,
    Bust = 3,
    DealerBust = 4,
    Blackjack = 5,
}

impl Category {
    /// Whether the player came out ahead.
    pub fn is_win(&self) -> bool {
        matches!(
            self,
            Category::Win | Category::DealerBust | Category::Blackjack
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Win => write!(f, "win"),
            Category::Push => write!(f, "push"),
            Category::Loss => write!(f, "loss"),
            Category::Bust => write!(f, "bust"),
            Category::DealerBust => write!(f, "dealer bust"),
            Category::Blackjack => write!(f, "blackjack"),
        }
    }
}

impl Write for Category {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for Category {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Win),
            1 => Ok(Self::Push),
            2 => Ok(Self::Loss),
            3 => Ok(Self::Bust),
            4 => Ok(Self::DealerBust),
            5 => Ok(Self::Blackjack),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for Category {
    const SIZE: usize = 1;
}

/// Result of a payout calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayoutResult {
    pub multiplier: Multiplier,
    pub category: Category,
}

impl PayoutResult {
    pub const fn new(multiplier: Multiplier, category: Category) -> Self {
        Self {
            multiplier,
            category,
        }
    }

    pub const fn loss() -> Self {
        Self::new(Multiplier::ZERO, Category::Loss)
    }

    pub fn payout(&self, stake: u64) -> u64 {
        self.multiplier.apply(stake)
    }
}

/// A settled round as reported to listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub round: u64,
    pub stake: u64,
    pub outcome: Outcome,
    pub payout: u64,
    pub category: Category,
    /// Wallet balance once the payout was credited.
    pub balance: u64,
}

impl Resolution {
    pub fn game(&self) -> GameType {
        self.outcome.game()
    }

    /// Change to the balance over the whole round.
    pub fn net(&self) -> i128 {
        self.payout as i128 - self.stake as i128
    }
}

impl Write for Resolution {
    fn write(&self, writer: &mut impl BufMut) {
        self.round.write(writer);
        self.stake.write(writer);
        self.outcome.write(writer);
        self.payout.write(writer);
        self.category.write(writer);
        self.balance.write(writer);
    }
}

impl Read for Resolution {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            round: u64::read(reader)?,
            stake: u64::read(reader)?,
            outcome: Outcome::read(reader)?,
            payout: u64::read(reader)?,
            category: Category::read(reader)?,
            balance: u64::read(reader)?,
        })
    }
}

impl EncodeSize for Resolution {
    fn encode_size(&self) -> usize {
        self.round.encode_size()
            + self.stake.encode_size()
            + self.outcome.encode_size()
            + self.payout.encode_size()
            + self.category.encode_size()
            + self.balance.encode_size()
    }
}
