use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, ReadRangeExt, Write};
use std::fmt;

use super::{Card, GameType, MAX_HAND_SIZE};

/// Reel symbols, ordered from highest payout to lowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    Diamond = 0,
    Seven = 1,
    Star = 2,
    Cherry = 3,
    Bell = 4,
    Lemon = 5,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Diamond,
        Symbol::Seven,
        Symbol::Star,
        Symbol::Cherry,
        Symbol::Bell,
        Symbol::Lemon,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Diamond => "💎",
            Symbol::Seven => "7️⃣",
            Symbol::Star => "⭐",
            Symbol::Cherry => "🍒",
            Symbol::Bell => "🔔",
            Symbol::Lemon => "🍋",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl Write for Symbol {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for Symbol {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        Symbol::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidEnum(value))
    }
}

impl FixedSize for Symbol {
    const SIZE: usize = 1;
}

/// The draw of a single round. Produced once and never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Slots([Symbol; 3]),
    Roulette { number: u8 },
    Dice { first: u8, second: u8 },
    Blackjack { player: Vec<Card>, dealer: Vec<Card> },
}

impl Outcome {
    pub fn game(&self) -> GameType {
        match self {
            Outcome::Slots(_) => GameType::Slots,
            Outcome::Roulette { .. } => GameType::Roulette,
            Outcome::Dice { .. } => GameType::Dice,
            Outcome::Blackjack { .. } => GameType::Blackjack,
        }
    }
}

fn write_hand(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Slots([a, b, c]) => write!(f, "{a} {b} {c}"),
            Outcome::Roulette { number } => write!(f, "{number}"),
            Outcome::Dice { first, second } => {
                write!(f, "{first} + {second} = {}", first.saturating_add(*second))
            }
            Outcome::Blackjack { player, dealer } => {
                f.write_str("player [")?;
                write_hand(f, player)?;
                f.write_str("] dealer [")?;
                write_hand(f, dealer)?;
                f.write_str("]")
            }
        }
    }
}

impl Write for Outcome {
    fn write(&self, writer: &mut impl BufMut) {
        self.game().write(writer);
        match self {
            Outcome::Slots(reels) => {
                for symbol in reels {
                    symbol.write(writer);
                }
            }
            Outcome::Roulette { number } => number.write(writer),
            Outcome::Dice { first, second } => {
                first.write(writer);
                second.write(writer);
            }
            Outcome::Blackjack { player, dealer } => {
                player.write(writer);
                dealer.write(writer);
            }
        }
    }
}

impl Read for Outcome {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        match GameType::read(reader)? {
            GameType::Slots => Ok(Outcome::Slots([
                Symbol::read(reader)?,
                Symbol::read(reader)?,
                Symbol::read(reader)?,
            ])),
            GameType::Roulette => {
                let number = u8::read(reader)?;
                if number > 36 {
                    return Err(Error::Invalid("Outcome", "roulette number out of range"));
                }
                Ok(Outcome::Roulette { number })
            }
            GameType::Dice => {
                let first = u8::read(reader)?;
                let second = u8::read(reader)?;
                if !(1..=6).contains(&first) || !(1..=6).contains(&second) {
                    return Err(Error::Invalid("Outcome", "die face out of range"));
                }
                Ok(Outcome::Dice { first, second })
            }
            GameType::Blackjack => Ok(Outcome::Blackjack {
                player: Vec::<Card>::read_range(reader, 0..=MAX_HAND_SIZE)?,
                dealer: Vec::<Card>::read_range(reader, 0..=MAX_HAND_SIZE)?,
            }),
        }
    }
}

impl EncodeSize for Outcome {
    fn encode_size(&self) -> usize {
        GameType::SIZE
            + match self {
                Outcome::Slots(_) => 3 * Symbol::SIZE,
                Outcome::Roulette { number } => number.encode_size(),
                Outcome::Dice { first, second } => first.encode_size() + second.encode_size(),
                Outcome::Blackjack { player, dealer } => {
                    player.encode_size() + dealer.encode_size()
                }
            }
    }
}
