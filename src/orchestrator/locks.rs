//! Per-application mutual exclusion.

use crate::application::domain::ApplicationId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of async locks keyed by application.
///
/// Holding the guard returned by [`ApplicationLocks::acquire`] keeps every
/// other acquirer for the same application waiting. Idle slots are pruned on
/// each acquisition.
#[derive(Debug, Clone, Default)]
pub struct ApplicationLocks {
    slots: Arc<Mutex<HashMap<ApplicationId, Arc<AsyncMutex<()>>>>>,
}

impl ApplicationLocks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `application_id`.
    pub async fn acquire(&self, application_id: ApplicationId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
            Arc::clone(slots.entry(application_id).or_default())
        };
        slot.lock_owned().await
    }

    /// Returns the number of applications with a held or awaited lock.
    #[must_use]
    pub fn active(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| Arc::strong_count(slot) > 1)
            .count()
    }
}
