//! Coin packages sold by the shop. Pricing lives with the storefront.

use crate::wallet::{Store, Wallet};
use std::fmt;

/// A purchasable bundle of coins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Package {
    pub coins: u64,
    pub bonus: u64,
}

impl Package {
    pub const fn new(coins: u64, bonus: u64) -> Self {
        Self { coins, bonus }
    }

    /// Coins credited for this package, bonus included.
    pub fn total(&self) -> u64 {
        self.coins.saturating_add(self.bonus)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bonus == 0 {
            write!(f, "{} coins", self.coins)
        } else {
            write!(f, "{} coins (+{} bonus)", self.coins, self.bonus)
        }
    }
}

/// Packages on offer, smallest first.
pub const PACKAGES: [Package; 5] = [
    Package::new(25, 0),
    Package::new(50, 10),
    Package::new(100, 25),
    Package::new(250, 75),
    Package::new(500, 200),
];

/// Credit a package to the wallet. Returns the coins added.
pub fn purchase<S: Store>(wallet: &mut Wallet<S>, package: &Package) -> u64 {
    let total = package.total();
    wallet.credit(total);
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::create_wallet;

    #[test]
    fn test_purchase_credits_bonus() {
        let mut wallet = create_wallet(0);
        assert_eq!(purchase(&mut wallet, &PACKAGES[1]), 60);
        assert_eq!(wallet.balance(), 60);
        assert_eq!(purchase(&mut wallet, &PACKAGES[4]), 700);
        assert_eq!(wallet.balance(), 760);
    }

    #[test]
    fn test_packages_ordered() {
        for pair in PACKAGES.windows(2) {
            assert!(pair[0].total() < pair[1].total());
        }
        assert_eq!(PACKAGES[0].to_string(), "25 coins");
        assert_eq!(PACKAGES[2].to_string(), "100 coins (+25 bonus)");
    }
}
