use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrbitError>;

/// Workspace-level error type shared by all Orbit crates.
#[derive(Debug, Error)]
pub enum OrbitError {
    /// An address could not be parsed or derived.
    #[error("Address error: {0}")]
    Address(#[from] crate::address::errors::AddressError),

    /// A value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A host capability (state store, ledger) reported a failure.
    #[error("Capability error: {0}")]
    Capability(String),

    #[error("{0}")]
    Other(String),
}
