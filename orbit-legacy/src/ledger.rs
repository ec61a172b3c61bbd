use async_trait::async_trait;
use orbit_common::address::ModernAddress;
use orbit_common::error::Result;

/// Token-ledger capability provided by the host.
///
/// The host exposes a generic named-invoke surface into its subsystems; this
/// trait narrows it to the two operations the legacy subsystem consumes.
/// `get_balance` is called only during genesis processing, `credit` only
/// while applying a reclaim transaction, and the explicit `(address, amount)`
/// pair form is used so no unrelated account state can be mutated.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Current balance of the account stored under the given raw address
    /// bytes (legacy or modern format).
    async fn get_balance(&self, address: &[u8]) -> Result<u64>;

    /// Credits `amount` to the account at the given modern address.
    async fn credit(&mut self, address: ModernAddress, amount: u64) -> Result<()>;
}
