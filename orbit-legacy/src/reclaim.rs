use orbit_common::address::{legacy_address, modern_address};
use orbit_common::transactions::{ReclaimParams, TxContext};

use crate::error::{LegacyError, Result};
use crate::ledger::LedgerApi;
use crate::registry::{Registry, REGISTRY_STATE_KEY};
use crate::store::StateStore;

/// The reclaim transaction command.
///
/// Consumes exactly one registry entry per successful invocation: the entry
/// whose address matches the one derived from the authenticated sender key.
/// The at-most-once guarantee is the entry removal itself — a replayed claim
/// finds nothing and is rejected the same way as a never-eligible key.
pub struct ReclaimCommand;

impl ReclaimCommand {
    /// Decodes a raw payload and executes the claim.
    pub async fn execute_raw(
        ctx: &TxContext,
        payload: &[u8],
        ledger: &mut dyn LedgerApi,
        store: &mut dyn StateStore,
    ) -> Result<()> {
        let params = ReclaimParams::decode(payload)
            .map_err(|e| LegacyError::InvalidPayload(e.to_string()))?;
        Self::execute(ctx, &params, ledger, store).await
    }

    /// Executes one claim against the registry. Runs inside the host's
    /// per-transaction commit/rollback boundary; every check fails fast and
    /// no state is touched before all checks pass.
    pub async fn execute(
        ctx: &TxContext,
        params: &ReclaimParams,
        ledger: &mut dyn LedgerApi,
        store: &mut dyn StateStore,
    ) -> Result<()> {
        // 1. Load the registry
        let blob = store
            .get(REGISTRY_STATE_KEY)
            .await?
            .ok_or(LegacyError::MissingRegistry)?;

        // 2. Decode
        let mut registry = Registry::decode(&blob)?;

        // 3. Derive the claimant's legacy address
        let legacy = legacy_address(&ctx.sender_public_key);

        // 4. Locate the entry
        let entry = *registry
            .find(&legacy)
            .ok_or(LegacyError::EntryNotFound(legacy))?;

        // 5. Exact amount only, no partial claims
        if params.amount != entry.balance {
            tracing::warn!(
                "⚠️ Reclaim rejected for {}: declared {} but registry holds {}",
                hex::encode(legacy),
                params.amount,
                entry.balance
            );
            return Err(LegacyError::AmountMismatch {
                expected: entry.balance,
                declared: params.amount,
            });
        }

        // 6. Credit the modern address, consume the entry, rewrite the blob
        let modern = modern_address(&ctx.sender_public_key);
        ledger.credit(modern, entry.balance).await?;
        registry.remove(&legacy);
        store.set(REGISTRY_STATE_KEY, registry.encode()?).await?;

        tracing::info!(
            "✅ Reclaimed {} from legacy {} to {} ({} entries left)",
            entry.balance,
            hex::encode(legacy),
            hex::encode(modern),
            registry.len()
        );

        Ok(())
    }
}
