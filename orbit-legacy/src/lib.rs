//! Legacy-balance registry and its reclaim protocol.
//!
//! At genesis every account still stored under the deprecated 8-byte address
//! format has its balance captured into a registry held under one reserved
//! chain-state key. The original key-holder later redeems that balance
//! exactly once with a reclaim transaction: the handler derives both address
//! forms from the authenticated sender key, consumes the matching registry
//! entry, and credits the modern address.
//!
//! The chain-state store and the token ledger are host capabilities injected
//! into every operation; this crate performs no I/O of its own and relies on
//! the host pipeline's one-transaction-at-a-time discipline.

pub mod error;
pub mod genesis;
pub mod ledger;
pub mod mock;
pub mod reclaim;
pub mod registry;
pub mod store;

pub use error::{LegacyError, Result};
pub use genesis::init_genesis_state;
pub use ledger::LedgerApi;
pub use reclaim::ReclaimCommand;
pub use registry::{LegacyEntry, Registry, REGISTRY_STATE_KEY};
pub use store::StateStore;
