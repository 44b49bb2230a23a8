//! Blackjack against a dealer who stands on 17.
//!
//! A round deals two cards to the player and two to the dealer from a freshly
//! shuffled deck, then moves through the stages:
//!
//! ```text
//! PlayerTurn --hit (<= 21)--> PlayerTurn
//! PlayerTurn --hit (> 21)---> Settled        (bust, dealer never plays)
//! PlayerTurn --stand--------> DealerTurn --play_dealer--> Settled
//! deal (natural 21) --------> Settled
//! ```

use super::{Draw, GameError};
use arcade_types::casino::{
    Card, Category, Multiplier, Outcome, PayoutResult, BLACKJACK, DEALER_STANDS_ON, MAX_HAND_SIZE,
};

/// Blackjack game stages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// Calculate the value of a blackjack hand.
///
/// Aces count 11 and drop to 1, one at a time, while the hand is over 21.
/// Returns the value and whether an ace is still counted as 11.
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += card.value() as u16;
    }

    while value > BLACKJACK as u16 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK as u16;
    (value.min(255) as u8, is_soft)
}

/// Check if hand is a natural (21 with 2 cards).
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards).0 == BLACKJACK
}

/// Settle a finished hand. The first matching rule wins:
/// player bust, dealer bust, unmatched natural (2.5x), higher total, tie, lower total.
pub fn payout(player: &[Card], dealer: &[Card]) -> PayoutResult {
    let (p_val, _) = hand_value(player);
    let (d_val, _) = hand_value(dealer);

    if p_val > BLACKJACK {
        PayoutResult::new(Multiplier::ZERO, Category::Bust)
    } else if d_val > BLACKJACK {
        PayoutResult::new(Multiplier::whole(2), Category::DealerBust)
    } else if is_natural(player) && !is_natural(dealer) {
        PayoutResult::new(Multiplier::ratio(5, 2), Category::Blackjack)
    } else if p_val > d_val {
        PayoutResult::new(Multiplier::whole(2), Category::Win)
    } else if p_val == d_val {
        PayoutResult::new(Multiplier::ONE, Category::Push)
    } else {
        PayoutResult::loss()
    }
}

/// Game state for one blackjack round.
#[derive(Clone, Debug)]
pub struct BlackjackState {
    player: Vec<Card>,
    dealer: Vec<Card>,
    shoe: Vec<Card>,
    stage: Stage,
}

impl BlackjackState {
    /// Deal from a freshly shuffled deck.
    pub fn deal(rng: &mut impl Draw) -> Result<Self, GameError> {
        Self::deal_from(rng.create_deck())
    }

    /// Deal from a prepared shoe. Cards are drawn from the back.
    pub fn deal_from(shoe: Vec<Card>) -> Result<Self, GameError> {
        let mut state = Self {
            player: Vec::with_capacity(MAX_HAND_SIZE),
            dealer: Vec::with_capacity(MAX_HAND_SIZE),
            shoe,
            stage: Stage::PlayerTurn,
        };
        for _ in 0..2 {
            let card = state.draw()?;
            state.player.push(card);
        }
        for _ in 0..2 {
            let card = state.draw()?;
            state.dealer.push(card);
        }
        if is_natural(&state.player) {
            state.stage = Stage::Settled;
        }
        Ok(state)
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.shoe.pop().ok_or(GameError::DeckExhausted)
    }

    fn expect_player_turn(&self) -> Result<(), GameError> {
        match self.stage {
            Stage::PlayerTurn => Ok(()),
            Stage::DealerTurn => Err(GameError::InvalidMove),
            Stage::Settled => Err(GameError::RoundComplete),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn player(&self) -> &[Card] {
        &self.player
    }

    pub fn dealer(&self) -> &[Card] {
        &self.dealer
    }

    pub fn player_value(&self) -> u8 {
        hand_value(&self.player).0
    }

    pub fn dealer_value(&self) -> u8 {
        hand_value(&self.dealer).0
    }

    /// Whether the player was dealt a natural.
    pub fn is_natural(&self) -> bool {
        is_natural(&self.player)
    }

    /// Draw a card for the player. Busting settles the round.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.expect_player_turn()?;
        if self.player.len() >= MAX_HAND_SIZE {
            return Err(GameError::InvalidMove);
        }
        let card = self.draw()?;
        self.player.push(card);
        if self.player_value() > BLACKJACK {
            self.stage = Stage::Settled;
        }
        Ok(card)
    }

    /// End the player's turn.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.expect_player_turn()?;
        self.stage = Stage::DealerTurn;
        Ok(())
    }

    /// Dealer draws until reaching 17, then the round settles.
    pub fn play_dealer(&mut self) -> Result<(), GameError> {
        if self.stage != Stage::DealerTurn {
            return Err(GameError::InvalidMove);
        }
        while self.dealer_value() < DEALER_STANDS_ON && self.dealer.len() < MAX_HAND_SIZE {
            match self.shoe.pop() {
                Some(card) => self.dealer.push(card),
                None => break,
            }
        }
        self.stage = Stage::Settled;
        Ok(())
    }

    pub fn payout(&self) -> PayoutResult {
        payout(&self.player, &self.dealer)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::Blackjack {
            player: self.player.clone(),
            dealer: self.dealer.clone(),
        }
    }
}
