//! In-memory capability implementations for tests and local tooling.

use std::collections::HashMap;

use async_trait::async_trait;
use orbit_common::address::ModernAddress;
use orbit_common::error::{OrbitError, Result};

use crate::ledger::LedgerApi;
use crate::store::StateStore;

/// In-memory chain-state store backed by a plain map.
#[derive(Debug, Default, Clone)]
pub struct MockStateStore {
    pub values: HashMap<Vec<u8>, Vec<u8>>,
}

impl MockStateStore {
    pub fn new() -> Self {
        MockStateStore::default()
    }
}

#[async_trait]
impl StateStore for MockStateStore {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.values.get(key).cloned())
    }

    async fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()> {
        self.values.insert(key.to_vec(), value);
        Ok(())
    }
}

/// In-memory token ledger.
///
/// Balances are keyed by raw address bytes so both address formats coexist,
/// mirroring the host ledger during migration. Every `credit` call is also
/// recorded for assertions. `fail_reads` makes `get_balance` return a
/// capability error, for exercising the genesis fatality path.
#[derive(Debug, Default, Clone)]
pub struct MockLedger {
    pub balances: HashMap<Vec<u8>, u64>,
    pub credits: Vec<(ModernAddress, u64)>,
    pub fail_reads: bool,
}

impl MockLedger {
    pub fn new() -> Self {
        MockLedger::default()
    }

    pub fn with_balance(mut self, address: &[u8], amount: u64) -> Self {
        self.balances.insert(address.to_vec(), amount);
        self
    }

    /// Total amount credited to the given modern address so far.
    pub fn credited(&self, address: &ModernAddress) -> u64 {
        self.credits
            .iter()
            .filter(|(a, _)| a == address)
            .map(|(_, amount)| *amount)
            .sum()
    }
}

#[async_trait]
impl LedgerApi for MockLedger {
    async fn get_balance(&self, address: &[u8]) -> Result<u64> {
        if self.fail_reads {
            return Err(OrbitError::Capability(
                "ledger unavailable".to_string(),
            ));
        }
        Ok(self.balances.get(address).copied().unwrap_or(0))
    }

    async fn credit(&mut self, address: ModernAddress, amount: u64) -> Result<()> {
        let balance = self.balances.entry(address.to_vec()).or_insert(0);
        *balance += amount;
        self.credits.push((address, amount));
        Ok(())
    }
}
