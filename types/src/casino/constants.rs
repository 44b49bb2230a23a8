/// Key under which the wallet balance is persisted.
pub const WALLET_KEY: &str = "casino-coins";

/// Balance granted to a wallet that has never been saved.
pub const DEFAULT_BALANCE: u64 = 100;

/// Stake used when a caller does not pick one.
pub const DEFAULT_STAKE: u64 = 10;

/// Probability that a biased game forces a winning draw.
pub const DEFAULT_WIN_PROBABILITY: f64 = 0.15;

/// Upper bound on redraws when rejection-sampling a losing outcome.
pub const MAX_REROLLS: usize = 256;

/// Maximum cards in a blackjack hand (four aces, four twos, four threes, then one more).
pub const MAX_HAND_SIZE: usize = 12;

/// Best blackjack hand value.
pub const BLACKJACK: u8 = 21;

/// Dealer draws until reaching at least this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// Smallest withdrawal accepted, in coins.
pub const MIN_WITHDRAWAL: u64 = 100;

/// Value of one coin when withdrawn, in cents.
pub const COIN_VALUE_CENTS: u64 = 18;

/// Withdrawal fee in basis points.
pub const WITHDRAWAL_FEE_BPS: u64 = 1_500;

/// Maximum length of a withdrawal payout key.
pub const MAX_PAYOUT_KEY_LENGTH: usize = 128;
