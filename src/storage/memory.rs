// src/storage/memory.rs

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use crate::errors::Result;
use crate::model::Activity;
use crate::storage::ActivityStorage;

#[derive(Debug, Default)]
struct MemoryState {
    activities: Vec<Activity>,
    saves: usize,
    fail_saves: bool,
}

/// In-memory backend. Clones share the same state, so a test can keep one
/// clone to inspect what the runtime saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(activities: Vec<Activity>) -> Self {
        let storage = Self::new();
        if let Ok(mut state) = storage.state.lock() {
            state.activities = activities;
        }
        storage
    }

    /// Make every following `save` fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.fail_saves = fail;
        }
    }

    /// Last saved (or seeded) collection.
    pub fn snapshot(&self) -> Vec<Activity> {
        self.state
            .lock()
            .map(|s| s.activities.clone())
            .unwrap_or_default()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.state.lock().map(|s| s.saves).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("memory storage lock poisoned").into())
    }
}

impl ActivityStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Activity>> {
        Ok(self.lock()?.activities.clone())
    }

    fn save(&self, activities: &[Activity]) -> Result<()> {
        let mut state = self.lock()?;
        if state.fail_saves {
            return Err(anyhow!("injected save failure").into());
        }
        state.activities = activities.to_vec();
        state.saves += 1;
        Ok(())
    }
}
