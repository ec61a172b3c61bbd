use ed25519_dalek::VerifyingKey;

use super::errors::AddressError;
use crate::crypto::hash::sha256;

/// Length in bytes of the deprecated short-form address.
pub const LEGACY_ADDRESS_LEN: usize = 8;
/// Length in bytes of the current address format.
pub const MODERN_ADDRESS_LEN: usize = 20;

pub type LegacyAddress = [u8; LEGACY_ADDRESS_LEN];
pub type ModernAddress = [u8; MODERN_ADDRESS_LEN];

/// Address format, decided purely by byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Legacy,
    Modern,
    Unknown,
}

impl AddressKind {
    pub fn classify(bytes: &[u8]) -> AddressKind {
        match bytes.len() {
            LEGACY_ADDRESS_LEN => AddressKind::Legacy,
            MODERN_ADDRESS_LEN => AddressKind::Modern,
            _ => AddressKind::Unknown,
        }
    }
}

/// Derives the deprecated 8-byte address from a public key.
///
/// The derivation takes the first eight bytes of the key's SHA-256 digest
/// and reverses their byte order. Legacy wallets displayed this value as a
/// decimal number, hence the reversal.
pub fn legacy_address(public_key: &VerifyingKey) -> LegacyAddress {
    let digest = sha256(public_key.as_bytes());
    let mut address = [0u8; LEGACY_ADDRESS_LEN];
    address.copy_from_slice(&digest[..LEGACY_ADDRESS_LEN]);
    address.reverse();
    address
}

/// Derives the current 20-byte address from a public key.
///
/// Truncates the key's SHA-256 digest to 20 bytes, no reversal. The distinct
/// derivation keeps the two address spaces from colliding.
pub fn modern_address(public_key: &VerifyingKey) -> ModernAddress {
    let digest = sha256(public_key.as_bytes());
    let mut address = [0u8; MODERN_ADDRESS_LEN];
    address.copy_from_slice(&digest[..MODERN_ADDRESS_LEN]);
    address
}

/// Converts raw bytes into a fixed-width legacy address.
pub fn legacy_from_bytes(bytes: &[u8]) -> Result<LegacyAddress, AddressError> {
    bytes
        .try_into()
        .map_err(|_| AddressError::InvalidLength(bytes.len()))
}
