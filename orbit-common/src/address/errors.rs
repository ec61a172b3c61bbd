use thiserror::Error;

/// Represents errors that can occur while parsing or deriving addresses.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The byte string has the wrong length for the expected address format.
    #[error("Invalid address length: {0}")]
    InvalidLength(usize),
}
