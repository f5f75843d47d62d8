// src/dag/layout.rs

//! Projection of resolved dates onto a zero-based day axis.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::dag::resolver::ResolvedDates;
use crate::model::{Activity, ActivityId, find};

/// A point on the timeline grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    /// Day offset from the layout origin.
    pub day: i64,
    /// Position in the display order.
    pub row: usize,
}

/// Line from a predecessor's finish to a successor's start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connector {
    pub from: ActivityId,
    pub to: ActivityId,
    pub start: Anchor,
    pub end: Anchor,
}

/// Timeline coordinates for a collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GanttLayout {
    /// Earliest resolved date; `None` for an empty collection.
    pub origin: Option<NaiveDate>,
    pub offsets: BTreeMap<ActivityId, i64>,
    /// Largest `offset + duration` over the collection.
    pub total_span: i64,
    pub connectors: Vec<Connector>,
}

/// Map `resolved` dates into day offsets and build predecessor connectors.
///
/// Rows come from `display_order`, not from dates. Edges with an endpoint
/// missing from `display_order` (or a predecessor missing from the
/// collection) produce no connector.
pub fn project(
    activities: &[Activity],
    resolved: &ResolvedDates,
    display_order: &[ActivityId],
) -> GanttLayout {
    let date_of = |a: &Activity| resolved.get(&a.id).copied().unwrap_or(a.start);

    let Some(origin) = activities.iter().map(date_of).min() else {
        return GanttLayout::default();
    };

    let mut offsets = BTreeMap::new();
    let mut total_span = 0;
    for activity in activities {
        let offset = (date_of(activity) - origin).num_days();
        offsets.entry(activity.id).or_insert(offset);
        total_span = total_span.max(offset + i64::from(activity.duration));
    }

    let mut rows: HashMap<ActivityId, usize> = HashMap::new();
    for (row, &id) in display_order.iter().enumerate() {
        rows.entry(id).or_insert(row);
    }

    let mut connectors = Vec::new();
    for activity in activities {
        let Some(&row) = rows.get(&activity.id) else {
            continue;
        };
        for &pred_id in &activity.predecessors {
            let (Some(&pred_row), Some(pred)) = (rows.get(&pred_id), find(activities, pred_id))
            else {
                continue;
            };
            let pred_offset = offsets.get(&pred_id).copied().unwrap_or_default();
            connectors.push(Connector {
                from: pred_id,
                to: activity.id,
                start: Anchor {
                    day: pred_offset + i64::from(pred.duration),
                    row: pred_row,
                },
                end: Anchor {
                    day: offsets.get(&activity.id).copied().unwrap_or_default(),
                    row,
                },
            });
        }
    }

    GanttLayout {
        origin: Some(origin),
        offsets,
        total_span,
        connectors,
    }
}
