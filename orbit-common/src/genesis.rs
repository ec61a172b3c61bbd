use serde::{Deserialize, Serialize};

/// One account record from the genesis asset.
///
/// The genesis format carries more fields than this subsystem needs; only
/// the raw address bytes are consumed here. Legacy accounts store an 8-byte
/// address, migrated accounts a 20-byte one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisAccount {
    #[serde(with = "hex::serde")]
    pub address: Vec<u8>,
}

/// Represents the initial state of the chain, consumed exactly once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub accounts: Vec<GenesisAccount>,
}

impl GenesisState {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }
}
