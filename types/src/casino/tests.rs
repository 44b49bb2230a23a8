use super::*;
use commonware_codec::{DecodeExt, Encode, EncodeSize, ReadExt};

#[test]
fn test_game_type_roundtrip() {
    for game_type in GameType::ALL {
        let encoded = game_type.encode();
        let decoded = GameType::read(&mut &encoded[..]).unwrap();
        assert_eq!(game_type, decoded);
    }
}

#[test]
fn test_game_type_rejects_unknown_tag() {
    let encoded = [9u8];
    assert!(GameType::read(&mut &encoded[..]).is_err());
}

#[test]
fn test_bet_roundtrip() {
    for bet in [
        Bet::slots(10),
        Bet::roulette(25, RouletteColor::Green),
        Bet::dice(5, DiceBet::Seven),
        Bet::blackjack(10),
    ] {
        let encoded = bet.encode();
        assert_eq!(encoded.len(), bet.encode_size());
        let decoded = Bet::decode(encoded).unwrap();
        assert_eq!(bet, decoded);
    }
}

#[test]
fn test_selection_game_mismatch_rejected() {
    // A slots tag is not a valid selection.
    let encoded = [GameType::Slots as u8, 0];
    assert!(Selection::read(&mut &encoded[..]).is_err());
}

#[test]
fn test_requires_selection() {
    assert!(!GameType::Slots.requires_selection());
    assert!(GameType::Roulette.requires_selection());
    assert!(GameType::Dice.requires_selection());
    assert!(!GameType::Blackjack.requires_selection());
}

#[test]
fn test_dice_bets_partition_sums() {
    for sum in 2..=12u8 {
        let matching = [DiceBet::Low, DiceBet::Seven, DiceBet::High]
            .iter()
            .filter(|bet| bet.contains(sum))
            .count();
        assert_eq!(matching, 1, "sum {sum} must fall in exactly one range");
    }
    assert_eq!(DiceBet::of(6), Some(DiceBet::Low));
    assert_eq!(DiceBet::of(7), Some(DiceBet::Seven));
    assert_eq!(DiceBet::of(8), Some(DiceBet::High));
    assert_eq!(DiceBet::of(1), None);
    assert_eq!(DiceBet::of(13), None);
}

#[test]
fn test_selection_parsing() {
    assert_eq!("Red".parse::<RouletteColor>(), Ok(RouletteColor::Red));
    assert_eq!("7".parse::<DiceBet>(), Ok(DiceBet::Seven));
    assert!("purple".parse::<RouletteColor>().is_err());
}

#[test]
fn test_card_index_covers_deck() {
    let mut seen = std::collections::HashSet::new();
    for index in 0..DECK_SIZE {
        let card = Card::from_index(index).unwrap();
        assert_eq!(card.index(), index);
        assert!(seen.insert(card));
    }
    assert!(Card::from_index(DECK_SIZE).is_none());
}

#[test]
fn test_card_values() {
    assert_eq!(Rank::Ace.value(), 11);
    assert_eq!(Rank::Seven.value(), 7);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::King.value(), 10);
    assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Q♥");
}

#[test]
fn test_multiplier_floors() {
    let blackjack = Multiplier::ratio(5, 2);
    assert_eq!(blackjack.apply(10), 25);
    assert_eq!(blackjack.apply(5), 12);
    assert_eq!(Multiplier::whole(100).apply(5), 500);
    assert_eq!(Multiplier::ZERO.apply(1_000), 0);
    assert_eq!(Multiplier::whole(2).apply(u64::MAX), u64::MAX);
    assert_eq!(blackjack.to_string(), "2.5x");
    assert_eq!(Multiplier::whole(35).to_string(), "35x");
}

#[test]
fn test_outcome_roundtrip() {
    let outcome = Outcome::Blackjack {
        player: vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Clubs),
        ],
        dealer: vec![
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Diamonds),
        ],
    };
    let encoded = outcome.encode();
    assert_eq!(encoded.len(), outcome.encode_size());
    assert_eq!(Outcome::decode(encoded).unwrap(), outcome);

    let invalid = [GameType::Dice as u8, 0, 3];
    assert!(Outcome::read(&mut &invalid[..]).is_err());
}

#[test]
fn test_resolution_roundtrip() {
    let resolution = Resolution {
        round: 7,
        stake: 5,
        outcome: Outcome::Slots([Symbol::Diamond; 3]),
        payout: 500,
        category: Category::Win,
        balance: 595,
    };
    let encoded = resolution.encode();
    let decoded = Resolution::decode(encoded).unwrap();
    assert_eq!(decoded, resolution);
    assert_eq!(decoded.game(), GameType::Slots);
    assert_eq!(decoded.net(), 495);
}
