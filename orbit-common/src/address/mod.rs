pub mod address;
pub mod errors;

pub use address::{
    legacy_address, legacy_from_bytes, modern_address, AddressKind, LegacyAddress, ModernAddress,
    LEGACY_ADDRESS_LEN, MODERN_ADDRESS_LEN,
};
