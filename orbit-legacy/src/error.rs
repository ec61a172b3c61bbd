use orbit_common::error::OrbitError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LegacyError>;

/// Represents errors raised by the legacy-balance subsystem.
///
/// Claim-time variants reject the individual transaction without touching
/// chain state; genesis-time variants abort node initialization, since the
/// registry must be bit-identical across every node.
#[derive(Debug, Error)]
pub enum LegacyError {
    /// The reserved chain-state key holds no registry at claim time.
    ///
    /// Post-genesis the registry always exists on a chain that performed the
    /// migration (possibly empty); absence signals misconfiguration.
    #[error("No unregistered addresses: legacy registry missing from chain state")]
    MissingRegistry,

    /// No registry entry matches the legacy address derived from the sender
    /// public key. Covers both "never had a legacy balance" and "already
    /// claimed" — deliberately indistinguishable.
    #[error("Legacy address {} not found in registry", hex::encode(.0))]
    EntryNotFound([u8; 8]),

    /// The declared claim amount differs from the registered balance.
    /// Partial claims are not allowed, over or under.
    #[error("Invalid amount: registry holds {expected}, claim declared {declared}")]
    AmountMismatch { expected: u64, declared: u64 },

    /// The stored registry blob failed to decode.
    #[error("Corrupt legacy registry: {0}")]
    CorruptRegistry(String),

    /// A genesis account address is neither 8 nor 20 bytes.
    #[error("Invalid genesis address of {0} bytes (expected 8 or 20)")]
    InvalidGenesisAddress(usize),

    /// The same 8-byte address appeared twice in the genesis account list.
    #[error("Duplicate legacy address {0} in genesis accounts")]
    DuplicateGenesisAddress(String),

    /// The reclaim payload could not be decoded.
    #[error("Invalid reclaim payload: {0}")]
    InvalidPayload(String),

    /// A host capability (state store, ledger) failed.
    #[error(transparent)]
    Capability(#[from] OrbitError),
}
