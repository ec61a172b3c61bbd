pub mod address;
pub mod crypto;
pub mod error;
pub mod genesis;
pub mod transactions;

pub use error::{OrbitError, Result};
