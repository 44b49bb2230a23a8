//! Coin ledger and the key-value stores that persist it.
//!
//! The balance is a single `u64` under [WALLET_KEY]. Every mutation is written
//! through to the store immediately; write failures are logged and never
//! surface to the caller. A value that exists but cannot be read is reported
//! and left on disk untouched.

use arcade_types::casino::{DEFAULT_BALANCE, WALLET_KEY};
use commonware_codec::{DecodeExt, Encode};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

/// A stored value exists but could not be recovered.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read {path:?}: {source}")]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("corrupt value in {path:?}: {source}")]
    Corrupt {
        path: PathBuf,
        source: commonware_codec::Error,
    },
}

/// Persistent key-value storage for ledger values.
pub trait Store {
    /// `Ok(None)` only when nothing was ever saved under `key`.
    fn load(&self, key: &str) -> Result<Option<u64>, StoreError>;
    fn save(&mut self, key: &str, value: u64);
}

/// Store kept in process memory.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    state: HashMap<String, u64>,
}

impl Store for Memory {
    fn load(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.state.get(key).copied())
    }

    fn save(&mut self, key: &str, value: u64) {
        self.state.insert(key.to_string(), value);
    }
}

/// Store writing one file per key under a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `directory`, creating it if needed.
    pub fn new(directory: impl AsRef<Path>) -> io::Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

impl Store for FileStore {
    fn load(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let path = self.path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Unreadable { path, source }),
        };
        match u64::decode(bytes.as_slice()) {
            Ok(value) => Ok(Some(value)),
            Err(source) => Err(StoreError::Corrupt { path, source }),
        }
    }

    fn save(&mut self, key: &str, value: u64) {
        let path = self.path(key);
        if let Err(e) = fs::write(&path, value.encode()) {
            warn!(?path, "Store error during save operation: {:?}", e);
        }
    }
}

/// The player's coin balance.
///
/// The balance never goes negative: a debit larger than the balance is
/// refused and leaves it untouched.
#[derive(Debug)]
pub struct Wallet<S: Store> {
    store: S,
    balance: u64,
}

impl<S: Store> Wallet<S> {
    /// Load the balance from `store`, seeding [DEFAULT_BALANCE] when absent.
    ///
    /// A balance that is present but unreadable is returned as an error and
    /// never overwritten.
    pub fn open(mut store: S) -> Result<Self, StoreError> {
        let balance = match store.load(WALLET_KEY) {
            Ok(Some(balance)) => balance,
            Ok(None) => {
                store.save(WALLET_KEY, DEFAULT_BALANCE);
                DEFAULT_BALANCE
            }
            Err(e) => {
                warn!(error = %e, "wallet could not be loaded");
                return Err(e);
            }
        };
        debug!(balance, "wallet opened");
        Ok(Self { store, balance })
    }

    /// Overwrite whatever `store` holds with `balance`.
    pub fn with_balance(mut store: S, balance: u64) -> Self {
        store.save(WALLET_KEY, balance);
        Self { store, balance }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Remove `amount` if the balance covers it.
    pub fn debit(&mut self, amount: u64) -> bool {
        let Some(remaining) = self.balance.checked_sub(amount) else {
            return false;
        };
        self.balance = remaining;
        self.store.save(WALLET_KEY, remaining);
        true
    }

    /// Add `amount`, saturating at `u64::MAX`.
    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        self.store.save(WALLET_KEY, self.balance);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
