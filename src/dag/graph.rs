// src/dag/graph.rs

use petgraph::algo::{has_path_connecting, tarjan_scc};
use petgraph::graphmap::DiGraphMap;

use crate::model::{Activity, ActivityId};

/// Directed view over an activity collection.
///
/// Edge direction follows the work: `P -> I` when `P` must finish before `I`.
/// Ids referenced but not present in the collection only exist as edge
/// endpoints.
#[derive(Debug, Clone)]
pub struct ActivityGraph {
    graph: DiGraphMap<ActivityId, ()>,
}

impl ActivityGraph {
    /// Graph of the stored successor lists only.
    ///
    /// This is the view the cycle detector walks: the proposed version of an
    /// activity decides its own outgoing edges, even when a neighbour still
    /// holds a stale back-reference that synchronization will drop.
    pub fn from_successors(activities: &[Activity]) -> Self {
        let mut graph = Self::with_nodes(activities);
        for activity in activities {
            for &succ in &activity.successors {
                graph.add_edge(activity.id, succ, ());
            }
        }
        Self { graph }
    }

    /// Graph of every edge known from either side of the relation
    /// (`I.predecessors` and `P.successors`).
    ///
    /// Equal to [`ActivityGraph::from_successors`] on a symmetric collection;
    /// used for diagnostics on collections that may not be.
    pub fn from_relations(activities: &[Activity]) -> Self {
        let mut graph = Self::with_nodes(activities);
        for activity in activities {
            for &pred in &activity.predecessors {
                graph.add_edge(pred, activity.id, ());
            }
            for &succ in &activity.successors {
                graph.add_edge(activity.id, succ, ());
            }
        }
        Self { graph }
    }

    fn with_nodes(activities: &[Activity]) -> DiGraphMap<ActivityId, ()> {
        let mut graph: DiGraphMap<ActivityId, ()> = DiGraphMap::new();
        for activity in activities {
            graph.add_node(activity.id);
        }
        graph
    }

    /// Whether `to` can be reached from `from` by following edges forward.
    ///
    /// A node always reaches itself. Unknown ids reach only themselves.
    pub fn has_path(&self, from: ActivityId, to: ActivityId) -> bool {
        if from == to {
            return true;
        }
        if !self.graph.contains_node(from) || !self.graph.contains_node(to) {
            return false;
        }
        has_path_connecting(&self.graph, from, to, None)
    }

    /// Groups of ids that sit on a cycle (including self-loops), each sorted.
    pub fn cycles(&self) -> Vec<Vec<ActivityId>> {
        let mut cycles: Vec<Vec<ActivityId>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&id| self.graph.contains_edge(id, id))
            })
            .map(|mut component| {
                component.sort_unstable();
                component
            })
            .collect();
        cycles.sort();
        cycles
    }
}
