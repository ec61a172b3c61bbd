use std::collections::HashSet;

use orbit_common::address::{legacy_from_bytes, AddressKind};
use orbit_common::genesis::GenesisState;

use crate::error::{LegacyError, Result};
use crate::ledger::LedgerApi;
use crate::registry::{LegacyEntry, Registry, REGISTRY_STATE_KEY};
use crate::store::StateStore;

/// Builds the legacy-balance registry during genesis-block processing.
///
/// Runs exactly once per chain. Partitions the genesis accounts by address
/// format, reads each legacy account's balance from the host ledger, and
/// writes the encoded registry under the reserved chain-state key.
///
/// Any failure here is fatal to node startup: every node must produce the
/// same registry byte-for-byte, so there is no partial or best-effort mode.
pub async fn init_genesis_state(
    genesis: &GenesisState,
    ledger: &dyn LedgerApi,
    store: &mut dyn StateStore,
) -> Result<Registry> {
    let mut seen: HashSet<[u8; 8]> = HashSet::new();
    let mut entries = Vec::new();
    let mut skipped_zero = 0usize;

    for account in &genesis.accounts {
        match AddressKind::classify(&account.address) {
            AddressKind::Modern => continue,
            AddressKind::Unknown => {
                tracing::error!(
                    "❌ Genesis account with malformed address ({} bytes)",
                    account.address.len()
                );
                return Err(LegacyError::InvalidGenesisAddress(account.address.len()));
            }
            AddressKind::Legacy => {}
        }

        let address = legacy_from_bytes(&account.address)
            .map_err(|_| LegacyError::InvalidGenesisAddress(account.address.len()))?;

        if !seen.insert(address) {
            return Err(LegacyError::DuplicateGenesisAddress(hex::encode(address)));
        }

        let balance = ledger.get_balance(&account.address).await?;
        if balance == 0 {
            skipped_zero += 1;
            continue;
        }

        entries.push(LegacyEntry { address, balance });
    }

    // Canonical ordering: the blob feeds the state commitment, so it must not
    // depend on how the host ordered the genesis account list.
    entries.sort_by(|a, b| a.address.cmp(&b.address));

    let registry = Registry::new(entries);
    store.set(REGISTRY_STATE_KEY, registry.encode()?).await?;

    tracing::info!(
        "🏛️ Legacy registry initialized: {} entries, {} unclaimed ({} zero-balance accounts skipped)",
        registry.len(),
        registry.total_balance(),
        skipped_zero
    );

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use orbit_common::genesis::GenesisAccount;

    use super::*;
    use crate::mock::{MockLedger, MockStateStore};

    fn account(address: &[u8]) -> GenesisAccount {
        GenesisAccount {
            address: address.to_vec(),
        }
    }

    /// Shuffled genesis input must yield the same registry blob.
    #[tokio::test]
    async fn test_registry_blob_is_order_independent() {
        let a = [9u8; 8];
        let b = [1u8; 8];
        let ledger = MockLedger::new().with_balance(&a, 10).with_balance(&b, 20);

        let genesis_ab = GenesisState {
            accounts: vec![account(&a), account(&b)],
        };
        let genesis_ba = GenesisState {
            accounts: vec![account(&b), account(&a)],
        };

        let mut store1 = MockStateStore::new();
        let mut store2 = MockStateStore::new();
        init_genesis_state(&genesis_ab, &ledger, &mut store1).await.unwrap();
        init_genesis_state(&genesis_ba, &ledger, &mut store2).await.unwrap();

        assert_eq!(
            store1.values.get(REGISTRY_STATE_KEY),
            store2.values.get(REGISTRY_STATE_KEY)
        );
    }

    /// Modern 20-byte accounts are ignored, zero balances are skipped.
    #[tokio::test]
    async fn test_partitioning_and_zero_balances() {
        let legacy = [7u8; 8];
        let broke = [8u8; 8];
        let modern = [2u8; 20];
        let ledger = MockLedger::new()
            .with_balance(&legacy, 500)
            .with_balance(&modern, 999);

        let genesis = GenesisState {
            accounts: vec![account(&modern), account(&legacy), account(&broke)],
        };

        let mut store = MockStateStore::new();
        let registry = init_genesis_state(&genesis, &ledger, &mut store).await.unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entries()[0], LegacyEntry { address: legacy, balance: 500 });
    }

    #[tokio::test]
    async fn test_malformed_address_aborts_genesis() {
        let genesis = GenesisState {
            accounts: vec![account(&[1u8; 12])],
        };
        let mut store = MockStateStore::new();
        let err = init_genesis_state(&genesis, &MockLedger::new(), &mut store)
            .await
            .unwrap_err();

        assert!(matches!(err, LegacyError::InvalidGenesisAddress(12)));
        assert!(store.values.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_legacy_address_aborts_genesis() {
        let dup = [3u8; 8];
        let genesis = GenesisState {
            accounts: vec![account(&dup), account(&dup)],
        };
        let ledger = MockLedger::new().with_balance(&dup, 1);

        let mut store = MockStateStore::new();
        let err = init_genesis_state(&genesis, &ledger, &mut store).await.unwrap_err();

        assert!(matches!(err, LegacyError::DuplicateGenesisAddress(_)));
        assert!(store.values.is_empty());
    }

    /// A failing balance read is fatal; nothing is written.
    #[tokio::test]
    async fn test_balance_read_failure_aborts_genesis() {
        let mut ledger = MockLedger::new().with_balance(&[4u8; 8], 77);
        ledger.fail_reads = true;

        let genesis = GenesisState {
            accounts: vec![account(&[4u8; 8])],
        };
        let mut store = MockStateStore::new();
        let err = init_genesis_state(&genesis, &ledger, &mut store).await.unwrap_err();

        assert!(matches!(err, LegacyError::Capability(_)));
        assert!(store.values.is_empty());
    }

    /// An all-modern genesis still writes a (empty) registry, recording that
    /// migration ran.
    #[tokio::test]
    async fn test_empty_registry_is_still_written() {
        let genesis = GenesisState {
            accounts: vec![account(&[5u8; 20])],
        };
        let mut store = MockStateStore::new();
        let registry = init_genesis_state(&genesis, &MockLedger::new(), &mut store)
            .await
            .unwrap();

        assert!(registry.is_empty());
        let blob = store.values.get(REGISTRY_STATE_KEY).unwrap();
        assert_eq!(Registry::decode(blob).unwrap(), Registry::default());
    }
}
