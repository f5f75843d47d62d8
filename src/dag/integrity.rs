// src/dag/integrity.rs

//! Read-only diagnostics for a loaded collection.
//!
//! The store never repairs data on load; a hand-edited `activities.json` can
//! carry duplicate ids, one-sided edges or even cycles. This module reports
//! them so `construplan check` can surface them.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::dag::graph::ActivityGraph;
use crate::model::{Activity, ActivityId, find};

/// Which list the one-sided edge was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    /// `successor.predecessors` has the edge, `predecessor.successors` lacks it.
    Predecessors,
    /// `predecessor.successors` has the edge, `successor.predecessors` lacks it.
    Successors,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct AsymmetricEdge {
    pub predecessor: ActivityId,
    pub successor: ActivityId,
    pub recorded_in: EdgeSide,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DanglingReference {
    pub activity: ActivityId,
    pub missing: ActivityId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub duplicate_ids: Vec<ActivityId>,
    pub asymmetric_edges: Vec<AsymmetricEdge>,
    pub dangling_references: Vec<DanglingReference>,
    pub cycles: Vec<Vec<ActivityId>>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
            && self.asymmetric_edges.is_empty()
            && self.dangling_references.is_empty()
            && self.cycles.is_empty()
    }
}

pub fn check_integrity(activities: &[Activity]) -> IntegrityReport {
    let mut seen = HashSet::new();
    let duplicate_ids: BTreeSet<ActivityId> = activities
        .iter()
        .filter(|a| !seen.insert(a.id))
        .map(|a| a.id)
        .collect();

    let mut asymmetric = BTreeSet::new();
    let mut dangling = BTreeSet::new();

    for activity in activities {
        for &pred in &activity.predecessors {
            match find(activities, pred) {
                None => {
                    dangling.insert(DanglingReference {
                        activity: activity.id,
                        missing: pred,
                    });
                }
                Some(p) if !p.successors.contains(&activity.id) => {
                    asymmetric.insert(AsymmetricEdge {
                        predecessor: pred,
                        successor: activity.id,
                        recorded_in: EdgeSide::Predecessors,
                    });
                }
                Some(_) => {}
            }
        }
        for &succ in &activity.successors {
            match find(activities, succ) {
                None => {
                    dangling.insert(DanglingReference {
                        activity: activity.id,
                        missing: succ,
                    });
                }
                Some(s) if !s.predecessors.contains(&activity.id) => {
                    asymmetric.insert(AsymmetricEdge {
                        predecessor: activity.id,
                        successor: succ,
                        recorded_in: EdgeSide::Successors,
                    });
                }
                Some(_) => {}
            }
        }
    }

    IntegrityReport {
        duplicate_ids: duplicate_ids.into_iter().collect(),
        asymmetric_edges: asymmetric.into_iter().collect(),
        dangling_references: dangling.into_iter().collect(),
        cycles: ActivityGraph::from_relations(activities).cycles(),
    }
}
