use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Payload of a reclaim transaction. The claimant's addresses are derived
/// from the sender public key, never carried in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReclaimParams {
    pub amount: u64,
}

impl ReclaimParams {
    pub fn encode(&self) -> Result<Vec<u8>, OrbitError> {
        bincode::serialize(self).map_err(|e| OrbitError::Serialization(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, OrbitError> {
        bincode::deserialize(bytes).map_err(|e| OrbitError::Serialization(e.to_string()))
    }
}

/// Execution context handed to a command by the transaction pipeline.
///
/// The sender public key has already been authenticated (signature checked
/// against the transaction envelope) before any command runs.
#[derive(Debug, Clone)]
pub struct TxContext {
    pub sender_public_key: VerifyingKey,
}

impl TxContext {
    pub fn new(sender_public_key: VerifyingKey) -> Self {
        Self { sender_public_key }
    }
}
