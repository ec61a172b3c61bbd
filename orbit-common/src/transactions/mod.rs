pub mod types;

pub use types::{ReclaimParams, TxContext};
