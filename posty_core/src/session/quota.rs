use std::fmt::Debug;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::session::storage::KeyValueStore;

/// Generations a guest may run before being asked to sign in.
pub const GUEST_GENERATION_LIMIT: u32 = 2;

/// Key under which the guest counter lives in the client-local store.
pub const GUEST_COUNT_KEY: &str = "posty_guest_generations";

/// Soft, client-side gate on guest generations.
///
/// Anyone able to clear the local store can bypass it; it is a growth gate,
/// not an authorization boundary. Without a store (`detached`) the count is
/// always 0 and increments are dropped.
#[derive(Clone)]
pub struct GuestQuota {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl Debug for GuestQuota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestQuota")
            .field("attached", &self.store.is_some())
            .finish()
    }
}

impl GuestQuota {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        GuestQuota { store: Some(store) }
    }

    pub fn detached() -> Self {
        GuestQuota { store: None }
    }

    pub fn count(&self) -> u32 {
        let Some(store) = &self.store else {
            return 0;
        };
        match store.get(GUEST_COUNT_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u32>().unwrap_or_else(|e| {
                warn!("Ignoring unreadable guest counter {raw:?}: {e}");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!("Failed to read guest counter: {e}");
                0
            }
        }
    }

    /// Read-modify-write of the counter; returns the new value.
    pub fn increment(&self) -> Result<u32> {
        let Some(store) = &self.store else {
            return Ok(0);
        };
        let next = self.count().saturating_add(1);
        store.set(GUEST_COUNT_KEY, &next.to_string())?;
        debug!("Guest generation count is now {next}");
        Ok(next)
    }

    /// Drops the persisted counter entirely.
    pub fn reset(&self) -> Result<()> {
        if let Some(store) = &self.store {
            store.remove(GUEST_COUNT_KEY)?;
        }
        Ok(())
    }

    pub fn remaining(&self) -> u32 {
        GUEST_GENERATION_LIMIT.saturating_sub(self.count())
    }

    pub fn is_exhausted(&self) -> bool {
        self.count() >= GUEST_GENERATION_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryKeyValueStore;

    fn quota() -> (GuestQuota, Arc<MemoryKeyValueStore>) {
        let store = Arc::new(MemoryKeyValueStore::new());
        (GuestQuota::new(store.clone()), store)
    }

    #[test]
    fn test_absent_counter_reads_zero() {
        let (quota, _) = quota();
        assert_eq!(quota.count(), 0);
        assert_eq!(quota.remaining(), GUEST_GENERATION_LIMIT);
    }

    #[test]
    fn test_increment_until_exhausted() {
        let (quota, store) = quota();
        assert_eq!(quota.increment().unwrap(), 1);
        assert!(!quota.is_exhausted());
        assert_eq!(quota.increment().unwrap(), 2);
        assert!(quota.is_exhausted());
        assert_eq!(quota.remaining(), 0);
        assert_eq!(store.get(GUEST_COUNT_KEY).unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_reset_removes_key() {
        let (quota, store) = quota();
        quota.increment().unwrap();
        quota.reset().unwrap();
        assert_eq!(store.get(GUEST_COUNT_KEY).unwrap(), None);
        assert_eq!(quota.count(), 0);
    }

    #[test]
    fn test_garbage_counter_reads_zero() {
        let (quota, store) = quota();
        store.set(GUEST_COUNT_KEY, "beaucoup").unwrap();
        assert_eq!(quota.count(), 0);
    }

    #[test]
    fn test_detached_quota_never_counts() {
        let quota = GuestQuota::detached();
        assert_eq!(quota.increment().unwrap(), 0);
        assert_eq!(quota.count(), 0);
        quota.reset().unwrap();
    }
}
