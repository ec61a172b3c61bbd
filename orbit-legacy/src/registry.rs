use orbit_common::address::LegacyAddress;
use serde::{Deserialize, Serialize};

use crate::error::{LegacyError, Result};

/// Reserved chain-state key owning the registry blob. No other key is ever
/// read or written by this subsystem.
pub const REGISTRY_STATE_KEY: &[u8] = b"legacy:registry";

/// One unclaimed legacy balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyEntry {
    pub address: LegacyAddress,
    pub balance: u64,
}

/// The ordered collection of unclaimed legacy balances.
///
/// Created exactly once at genesis, then only ever shrinks: a successful
/// claim removes its entry, nothing is ever added or modified in place. The
/// value persists under [`REGISTRY_STATE_KEY`] indefinitely, possibly empty,
/// as the permanent record that migration completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    entries: Vec<LegacyEntry>,
}

impl Registry {
    pub fn new(entries: Vec<LegacyEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LegacyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all unclaimed balances. Saturating: the genesis supply fits in
    /// u64, so saturation is unreachable on well-formed registries.
    pub fn total_balance(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.balance))
    }

    /// Finds the entry for the given legacy address by byte equality.
    pub fn find(&self, address: &LegacyAddress) -> Option<&LegacyEntry> {
        self.entries.iter().find(|e| &e.address == address)
    }

    /// Removes the entry for the given address, preserving the order of the
    /// remaining entries. Returns whether an entry was removed.
    pub fn remove(&mut self, address: &LegacyAddress) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.address != address);
        before != self.entries.len()
    }

    /// Encodes the registry into its deterministic binary form. Fixed-width
    /// integers, insertion order preserved, no canonicalization here.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(&self.entries)
            .map_err(|e| LegacyError::CorruptRegistry(e.to_string()))
    }

    /// Decodes a registry blob read from chain state.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let entries: Vec<LegacyEntry> = bincode::deserialize(bytes)
            .map_err(|e| LegacyError::CorruptRegistry(e.to_string()))?;
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        Registry::new(vec![
            LegacyEntry {
                address: [1, 2, 3, 4, 5, 6, 7, 8],
                balance: 100_000_000_000,
            },
            LegacyEntry {
                address: [9, 9, 9, 9, 9, 9, 9, 9],
                balance: 42,
            },
        ])
    }

    /// decode(encode(x)) == x, including the empty registry.
    #[test]
    fn test_roundtrip() {
        let registry = sample();
        let blob = registry.encode().unwrap();
        assert_eq!(Registry::decode(&blob).unwrap(), registry);

        let empty = Registry::default();
        assert_eq!(Registry::decode(&empty.encode().unwrap()).unwrap(), empty);
    }

    /// The encoding is stable byte-for-byte: length prefix plus fixed-width
    /// little-endian fields in insertion order.
    #[test]
    fn test_encoding_is_deterministic() {
        let registry = sample();
        let blob = registry.encode().unwrap();
        assert_eq!(blob, registry.encode().unwrap());
        // u64 count + 2 * (8-byte address + u64 balance)
        assert_eq!(blob.len(), 8 + 2 * 16);
        assert_eq!(&blob[..8], &2u64.to_le_bytes());
        assert_eq!(&blob[8..16], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&blob[16..24], &100_000_000_000u64.to_le_bytes());
    }

    #[test]
    fn test_decode_rejects_truncated_blob() {
        let mut blob = sample().encode().unwrap();
        blob.truncate(blob.len() - 3);
        assert!(matches!(
            Registry::decode(&blob),
            Err(LegacyError::CorruptRegistry(_))
        ));
    }

    #[test]
    fn test_find_and_remove_preserve_order() {
        let mut registry = Registry::new(vec![
            LegacyEntry { address: [1u8; 8], balance: 1 },
            LegacyEntry { address: [2u8; 8], balance: 2 },
            LegacyEntry { address: [3u8; 8], balance: 3 },
        ]);

        assert_eq!(registry.find(&[2u8; 8]).unwrap().balance, 2);
        assert!(registry.find(&[4u8; 8]).is_none());

        assert!(registry.remove(&[2u8; 8]));
        assert!(!registry.remove(&[2u8; 8]));
        assert_eq!(
            registry.entries().iter().map(|e| e.address[0]).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_total_balance() {
        assert_eq!(sample().total_balance(), 100_000_000_042);
        assert_eq!(Registry::default().total_balance(), 0);
    }
}
