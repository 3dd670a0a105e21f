use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

/// Lock access that survives a panic in another holder.
///
/// Registries and translation state stay usable after a poisoning panic; the
/// recovery is logged with the owning module and operation.
pub(crate) trait RecoverRwLock<T> {
    fn read_or_recover(&self, source: &'static str, op: &'static str) -> RwLockReadGuard<'_, T>;
    fn write_or_recover(&self, source: &'static str, op: &'static str)
    -> RwLockWriteGuard<'_, T>;
}

impl<T> RecoverRwLock<T> for RwLock<T> {
    fn read_or_recover(&self, source: &'static str, op: &'static str) -> RwLockReadGuard<'_, T> {
        self.read()
            .unwrap_or_else(|poisoned| recovered(poisoned, source, op, "read"))
    }

    fn write_or_recover(
        &self,
        source: &'static str,
        op: &'static str,
    ) -> RwLockWriteGuard<'_, T> {
        self.write()
            .unwrap_or_else(|poisoned| recovered(poisoned, source, op, "write"))
    }
}

fn recovered<G>(
    poisoned: PoisonError<G>,
    source: &'static str,
    op: &'static str,
    access: &'static str,
) -> G {
    warn!(
        source,
        op,
        access,
        "recovered poisoned lock; state may predate the panic"
    );
    poisoned.into_inner()
}
