// src/engine/core.rs

//! Pure in-memory activity store.
//!
//! The store owns the authoritative ordered collection. Every mutation is
//! applied to a working copy, its predecessors checked for cycles, relations
//! synchronized, its successors checked, and only then swapped in, so a
//! rejected mutation leaves the collection untouched.
//!
//! No channels, no Tokio and no IO live here; persistence is the job of the
//! async shell in [`crate::engine::runtime`].

use tracing::info;

use crate::dag::{ensure_acyclic, ensure_successors_acyclic, synchronize};
use crate::engine::schedule::Schedule;
use crate::errors::{ConstruplanError, Result};
use crate::model::{Activity, ActivityId, NewActivity, ValidPatch, find, find_mut};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    /// Wrap a loaded collection as-is. Nothing is repaired on load.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// The whole collection in stored order.
    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        find(&self.activities, id)
    }

    /// `max(existing ids) + 1`, or 1 for an empty collection.
    pub fn next_id(&self) -> ActivityId {
        self.activities.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    pub fn create(&mut self, new: NewActivity) -> Result<Activity> {
        let id = self.next_id();
        let mut working = self.activities.clone();
        working.push(new.into_activity(id));

        let created = self.commit(working, id)?;
        info!(id, title = %created.title, "activity created");
        Ok(created)
    }

    /// Merge `patch` onto activity `id`.
    pub fn update(&mut self, id: ActivityId, patch: ValidPatch) -> Result<Activity> {
        let mut working = self.activities.clone();
        let target = find_mut(&mut working, id).ok_or(ConstruplanError::NotFound(id))?;
        patch.apply_to(target);

        let updated = self.commit(working, id)?;
        info!(id, "activity updated");
        Ok(updated)
    }

    /// Drop activity `id`. Other activities keep their references to it.
    pub fn remove(&mut self, id: ActivityId) -> Result<Activity> {
        let index = self
            .activities
            .iter()
            .position(|a| a.id == id)
            .ok_or(ConstruplanError::NotFound(id))?;

        let removed = self.activities.remove(index);
        info!(id, "activity removed");
        Ok(removed)
    }

    /// Resolve and lay out the current collection.
    pub fn schedule(&self) -> Result<Schedule> {
        Schedule::build(&self.activities)
    }

    fn commit(&mut self, mut working: Vec<Activity>, id: ActivityId) -> Result<Activity> {
        ensure_acyclic(&working, id)?;

        synchronize(&mut working, id);

        ensure_successors_acyclic(&working, id)?;

        let activity = find(&working, id)
            .cloned()
            .ok_or(ConstruplanError::NotFound(id))?;
        self.activities = working;
        Ok(activity)
    }
}
