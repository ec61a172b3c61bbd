use async_trait::async_trait;
use orbit_common::error::Result;

/// Chain-state key-value capability provided by the host.
///
/// Injected into every operation rather than reached through a global; this
/// subsystem only ever touches [`crate::registry::REGISTRY_STATE_KEY`].
/// Atomicity of the writes performed during one transaction is the host
/// pipeline's commit/rollback responsibility.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Returns the value under `key`, or `None` if the key is absent.
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Writes `value` under `key`, overwriting any previous value.
    async fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()>;
}
