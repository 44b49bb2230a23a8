//! Cashing coins out to an external payout key.
//!
//! Amounts are quoted in cents. The fee is taken in basis points of the gross
//! value and rounds down.

use crate::wallet::{Store, Wallet};
use arcade_types::casino::{
    COIN_VALUE_CENTS, MAX_PAYOUT_KEY_LENGTH, MIN_WITHDRAWAL, WITHDRAWAL_FEE_BPS,
};
use thiserror::Error;
use tracing::info;

const BPS_DENOMINATOR: u64 = 10_000;

/// Terms applied to every withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub minimum: u64,
    pub coin_value_cents: u64,
    pub fee_bps: u64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            minimum: MIN_WITHDRAWAL,
            coin_value_cents: COIN_VALUE_CENTS,
            fee_bps: WITHDRAWAL_FEE_BPS,
        }
    }
}

impl Policy {
    /// Price `coins` without touching any wallet.
    pub fn quote(&self, coins: u64) -> Receipt {
        let gross = coins.saturating_mul(self.coin_value_cents);
        let fee = (gross as u128 * self.fee_bps.min(BPS_DENOMINATOR) as u128
            / BPS_DENOMINATOR as u128) as u64;
        Receipt {
            coins,
            gross_cents: gross,
            fee_cents: fee,
            net_cents: gross - fee,
        }
    }
}

/// Breakdown of an accepted withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub coins: u64,
    pub gross_cents: u64,
    pub fee_cents: u64,
    pub net_cents: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WithdrawalError {
    #[error("withdrawal of {amount} coins is below the minimum of {minimum}")]
    BelowMinimum { amount: u64, minimum: u64 },
    #[error("payout key is required")]
    MissingPayoutKey,
    #[error("payout key exceeds {max} characters")]
    PayoutKeyTooLong { max: usize },
    #[error("insufficient funds: balance {balance}, requested {amount}")]
    InsufficientFunds { balance: u64, amount: u64 },
}

/// Debit `amount` coins for payout to `key`.
pub fn request<S: Store>(
    wallet: &mut Wallet<S>,
    policy: &Policy,
    amount: u64,
    key: &str,
) -> Result<Receipt, WithdrawalError> {
    if amount < policy.minimum {
        return Err(WithdrawalError::BelowMinimum {
            amount,
            minimum: policy.minimum,
        });
    }
    let key = key.trim();
    if key.is_empty() {
        return Err(WithdrawalError::MissingPayoutKey);
    }
    if key.chars().count() > MAX_PAYOUT_KEY_LENGTH {
        return Err(WithdrawalError::PayoutKeyTooLong {
            max: MAX_PAYOUT_KEY_LENGTH,
        });
    }
    if !wallet.debit(amount) {
        return Err(WithdrawalError::InsufficientFunds {
            balance: wallet.balance(),
            amount,
        });
    }
    let receipt = policy.quote(amount);
    info!(
        coins = receipt.coins,
        net_cents = receipt.net_cents,
        balance = wallet.balance(),
        "withdrawal accepted"
    );
    Ok(receipt)
}
