use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use std::{fmt, str::FromStr};

/// Games offered by the arcade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GameType {
    Slots = 0,
    Roulette = 1,
    Dice = 2,
    Blackjack = 3,
}

impl GameType {
    pub const ALL: [GameType; 4] = [
        GameType::Slots,
        GameType::Roulette,
        GameType::Dice,
        GameType::Blackjack,
    ];

    /// Whether a bet on this game must name a selection.
    pub fn requires_selection(&self) -> bool {
        matches!(self, GameType::Roulette | GameType::Dice)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::Slots => write!(f, "slots"),
            GameType::Roulette => write!(f, "roulette"),
            GameType::Dice => write!(f, "dice"),
            GameType::Blackjack => write!(f, "blackjack"),
        }
    }
}

impl Write for GameType {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for GameType {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Slots),
            1 => Ok(Self::Roulette),
            2 => Ok(Self::Dice),
            3 => Ok(Self::Blackjack),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for GameType {
    const SIZE: usize = 1;
}

/// Pocket colors on the roulette wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RouletteColor {
    Red = 0,
    Black = 1,
    Green = 2,
}

impl fmt::Display for RouletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouletteColor::Red => write!(f, "red"),
            RouletteColor::Black => write!(f, "black"),
            RouletteColor::Green => write!(f, "green"),
        }
    }
}

impl FromStr for RouletteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(RouletteColor::Red),
            "black" => Ok(RouletteColor::Black),
            "green" => Ok(RouletteColor::Green),
            other => Err(format!("unknown roulette color: {other}")),
        }
    }
}

impl Write for RouletteColor {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for RouletteColor {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Red),
            1 => Ok(Self::Black),
            2 => Ok(Self::Green),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for RouletteColor {
    const SIZE: usize = 1;
}

/// Ranges of the two-dice sum a player can back.
///
/// The three ranges partition 2..=12: low is 2-6, seven is 7, high is 8-12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DiceBet {
    Low = 0,
    Seven = 1,
    High = 2,
}

impl DiceBet {
    /// Classify a two-dice sum. Sums outside 2..=12 belong to no range.
    pub fn of(sum: u8) -> Option<DiceBet> {
        match sum {
            2..=6 => Some(DiceBet::Low),
            7 => Some(DiceBet::Seven),
            8..=12 => Some(DiceBet::High),
            _ => None,
        }
    }

    pub fn contains(&self, sum: u8) -> bool {
        DiceBet::of(sum) == Some(*self)
    }
}

impl fmt::Display for DiceBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceBet::Low => write!(f, "low"),
            DiceBet::Seven => write!(f, "seven"),
            DiceBet::High => write!(f, "high"),
        }
    }
}

impl FromStr for DiceBet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(DiceBet::Low),
            "seven" | "7" => Ok(DiceBet::Seven),
            "high" => Ok(DiceBet::High),
            other => Err(format!("unknown dice bet: {other}")),
        }
    }
}

impl Write for DiceBet {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for DiceBet {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::Seven),
            2 => Ok(Self::High),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for DiceBet {
    const SIZE: usize = 1;
}

/// What a bet backs, for games that ask the player to choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    Roulette(RouletteColor),
    Dice(DiceBet),
}

impl Selection {
    /// Game this selection belongs to.
    pub fn game(&self) -> GameType {
        match self {
            Selection::Roulette(_) => GameType::Roulette,
            Selection::Dice(_) => GameType::Dice,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Roulette(color) => fmt::Display::fmt(color, f),
            Selection::Dice(bet) => fmt::Display::fmt(bet, f),
        }
    }
}

impl Write for Selection {
    fn write(&self, writer: &mut impl BufMut) {
        self.game().write(writer);
        match self {
            Selection::Roulette(color) => color.write(writer),
            Selection::Dice(bet) => bet.write(writer),
        }
    }
}

impl Read for Selection {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        match GameType::read(reader)? {
            GameType::Roulette => Ok(Selection::Roulette(RouletteColor::read(reader)?)),
            GameType::Dice => Ok(Selection::Dice(DiceBet::read(reader)?)),
            game => Err(Error::InvalidEnum(game as u8)),
        }
    }
}

impl FixedSize for Selection {
    const SIZE: usize = 2;
}

/// A wager submitted to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bet {
    pub game: GameType,
    pub stake: u64,
    pub selection: Option<Selection>,
}

impl Bet {
    pub fn slots(stake: u64) -> Self {
        Self {
            game: GameType::Slots,
            stake,
            selection: None,
        }
    }

    pub fn roulette(stake: u64, color: RouletteColor) -> Self {
        Self {
            game: GameType::Roulette,
            stake,
            selection: Some(Selection::Roulette(color)),
        }
    }

    pub fn dice(stake: u64, bet: DiceBet) -> Self {
        Self {
            game: GameType::Dice,
            stake,
            selection: Some(Selection::Dice(bet)),
        }
    }

    pub fn blackjack(stake: u64) -> Self {
        Self {
            game: GameType::Blackjack,
            stake,
            selection: None,
        }
    }
}

impl Write for Bet {
    fn write(&self, writer: &mut impl BufMut) {
        self.game.write(writer);
        self.stake.write(writer);
        self.selection.write(writer);
    }
}

impl Read for Bet {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            game: GameType::read(reader)?,
            stake: u64::read(reader)?,
            selection: Option::<Selection>::read(reader)?,
        })
    }
}

impl EncodeSize for Bet {
    fn encode_size(&self) -> usize {
        self.game.encode_size() + self.stake.encode_size() + self.selection.encode_size()
    }
}
