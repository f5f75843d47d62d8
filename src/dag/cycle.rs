// src/dag/cycle.rs

//! Cycle detection for proposed predecessor edges.
//!
//! Making `P` a predecessor of `I` adds the edge `P -> I`. That closes a loop
//! exactly when `I` can already reach `P` through successor edges, so each
//! candidate is a single reachability query from `I`.

use tracing::debug;

use crate::dag::graph::ActivityGraph;
use crate::errors::{ConstruplanError, Result};
use crate::model::{Activity, ActivityId, find};

/// Whether making `candidate_predecessor` a predecessor of `item` would
/// create a cycle in `activities`.
pub fn would_create_cycle(
    activities: &[Activity],
    item: ActivityId,
    candidate_predecessor: ActivityId,
) -> bool {
    ActivityGraph::from_successors(activities).has_path(item, candidate_predecessor)
}

/// Check every predecessor of `item` against the collection it lives in.
///
/// `activities` is the candidate state, i.e. it already contains the proposed
/// version of `item`. Fails on the first predecessor that closes a loop; the
/// caller is expected to discard the whole candidate state in that case.
pub fn ensure_acyclic(activities: &[Activity], item: ActivityId) -> Result<()> {
    let Some(activity) = find(activities, item) else {
        return Ok(());
    };

    let graph = ActivityGraph::from_successors(activities);

    for &predecessor in &activity.predecessors {
        if graph.has_path(item, predecessor) {
            debug!(activity = item, predecessor, "predecessor would close a cycle");
            return Err(ConstruplanError::CycleDetected {
                activity: item,
                predecessor,
            });
        }
    }

    Ok(())
}

/// Check the successor side of `item` on an already synchronized collection.
///
/// Listing `S` as a successor of `item` adds the edge `item -> S`, which closes
/// a loop when `S` already reaches `item`. Run after synchronization so stale
/// back-references that synchronization dropped are not followed.
pub fn ensure_successors_acyclic(activities: &[Activity], item: ActivityId) -> Result<()> {
    let Some(activity) = find(activities, item) else {
        return Ok(());
    };

    let graph = ActivityGraph::from_successors(activities);

    for &successor in &activity.successors {
        if graph.has_path(successor, item) {
            debug!(activity = item, successor, "successor would close a cycle");
            return Err(ConstruplanError::CycleDetected {
                activity: successor,
                predecessor: item,
            });
        }
    }

    Ok(())
}
