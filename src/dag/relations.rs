// src/dag/relations.rs

//! Predecessor/successor symmetry maintenance.

use std::collections::BTreeSet;

use tracing::debug;

use crate::model::{Activity, ActivityId, find, find_mut};

/// Restore `B ∈ A.predecessors ⇔ A ∈ B.successors` between `id` and its
/// direct neighbours, after `id`'s relation lists were written.
///
/// Edges between two activities neither of which is `id` are left alone.
/// Steps run in this order:
///
/// 1. drop back-references the item no longer backs: `O.predecessors` loses
///    `id` unless `id` lists `O` as a successor, and `O.successors` loses `id`
///    unless `id` lists `O` as a predecessor;
/// 2. every existing predecessor of `id` gains `id` as a successor;
/// 3. every existing successor of `id` gains `id` as a predecessor.
///
/// Referenced ids missing from the collection are skipped silently.
pub fn synchronize(activities: &mut [Activity], id: ActivityId) {
    let Some(item) = find(activities, id) else {
        return;
    };
    let item_preds: BTreeSet<ActivityId> = item.predecessors.clone();
    let item_succs: BTreeSet<ActivityId> = item.successors.clone();

    for other in activities.iter_mut().filter(|a| a.id != id) {
        if other.predecessors.contains(&id) && !item_succs.contains(&other.id) {
            other.predecessors.remove(&id);
            debug!(activity = other.id, removed = id, "dropped stale predecessor");
        }
        if other.successors.contains(&id) && !item_preds.contains(&other.id) {
            other.successors.remove(&id);
            debug!(activity = other.id, removed = id, "dropped stale successor");
        }
    }

    for pred in item_preds {
        match find_mut(activities, pred) {
            Some(p) => {
                p.successors.insert(id);
            }
            None => debug!(activity = id, predecessor = pred, "skipping dangling predecessor"),
        }
    }

    for succ in item_succs {
        match find_mut(activities, succ) {
            Some(s) => {
                s.predecessors.insert(id);
            }
            None => debug!(activity = id, successor = succ, "skipping dangling successor"),
        }
    }
}
