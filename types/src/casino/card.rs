use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, Read, ReadExt, Write};
use std::fmt;

/// Number of cards in a standard deck.
pub const DECK_SIZE: u8 = 52;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank from its ordinal (1 = Ace, 13 = King).
    pub fn from_u8(value: u8) -> Option<Rank> {
        Rank::ALL.get(value.checked_sub(1)? as usize).copied()
    }

    /// Blackjack value with aces counted high.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => *other as u8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A playing card. Suit never affects value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Card from its deck index: suit = index / 13, rank = index % 13.
    pub fn from_index(index: u8) -> Option<Card> {
        if index >= DECK_SIZE {
            return None;
        }
        let rank = Rank::from_u8(index % 13 + 1)?;
        let suit = Suit::ALL[(index / 13) as usize];
        Some(Card { rank, suit })
    }

    pub fn index(&self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8 - 1)
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl Write for Card {
    fn write(&self, writer: &mut impl BufMut) {
        self.index().write(writer);
    }
}

impl Read for Card {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let index = u8::read(reader)?;
        Card::from_index(index).ok_or(Error::Invalid("Card", "index out of range"))
    }
}

impl FixedSize for Card {
    const SIZE: usize = 1;
}
