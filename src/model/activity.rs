// src/model/activity.rs

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical activity identifier. Ids are positive and unique per collection.
pub type ActivityId = u64;

/// A schedulable unit of construction work.
///
/// Serialized with the same field names as the on-disk `activities.json`:
///
/// ```json
/// {
///   "id": 2,
///   "title": "Framing",
///   "start": "2024-01-01",
///   "duration": 3,
///   "predecessors": [1],
///   "successors": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,

    /// Declared start. Only used when no predecessor resolves.
    pub start: NaiveDate,

    /// Length in whole days (always >= 1 once through the boundary).
    pub duration: u32,

    /// Activities this one depends on. Authoritative.
    #[serde(default)]
    pub predecessors: BTreeSet<ActivityId>,

    /// Activities depending on this one. Kept in step with `predecessors`
    /// by [`crate::dag::relations::synchronize`].
    #[serde(default)]
    pub successors: BTreeSet<ActivityId>,
}

/// Look up an activity by id in an ordered collection.
pub fn find(activities: &[Activity], id: ActivityId) -> Option<&Activity> {
    activities.iter().find(|a| a.id == id)
}

pub fn find_mut(activities: &mut [Activity], id: ActivityId) -> Option<&mut Activity> {
    activities.iter_mut().find(|a| a.id == id)
}
