use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ErrorCore, Result};

/// Lock helpers that turn poisoning into an `ErrorCore` carrying the call site context.
pub trait RwLockExt<T> {
    fn read_lock(&self, context: &str) -> Result<RwLockReadGuard<'_, T>>;
    fn write_lock(&self, context: &str) -> Result<RwLockWriteGuard<'_, T>>;
}

impl<T> RwLockExt<T> for RwLock<T> {
    fn read_lock(&self, context: &str) -> Result<RwLockReadGuard<'_, T>> {
        self.read()
            .map_err(|e| ErrorCore::LockPoisoned(format!("{context}: {e}")))
    }

    fn write_lock(&self, context: &str) -> Result<RwLockWriteGuard<'_, T>> {
        self.write()
            .map_err(|e| ErrorCore::LockPoisoned(format!("{context}: {e}")))
    }
}
