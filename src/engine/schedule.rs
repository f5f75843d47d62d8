// src/engine/schedule.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::dag::{Connector, project, resolve};
use crate::errors::Result;
use crate::model::{Activity, ActivityId};

/// One activity placed on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledActivity {
    pub id: ActivityId,
    pub title: String,
    pub declared_start: NaiveDate,
    pub effective_start: NaiveDate,
    pub duration: u32,
    pub offset_days: i64,
    /// Position in display order (stored collection order).
    pub row: usize,
}

/// Resolved schedule plus layout, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Schedule {
    pub origin: Option<NaiveDate>,
    pub total_span: i64,
    pub activities: Vec<ScheduledActivity>,
    pub connectors: Vec<Connector>,
}

impl Schedule {
    /// Resolve `activities` and project them, using stored order for rows.
    pub fn build(activities: &[Activity]) -> Result<Self> {
        let resolved = resolve(activities)?;
        let display_order: Vec<ActivityId> = activities.iter().map(|a| a.id).collect();
        let layout = project(activities, &resolved, &display_order);

        let scheduled = activities
            .iter()
            .enumerate()
            .map(|(row, a)| ScheduledActivity {
                id: a.id,
                title: a.title.clone(),
                declared_start: a.start,
                effective_start: resolved.get(&a.id).copied().unwrap_or(a.start),
                duration: a.duration,
                offset_days: layout.offsets.get(&a.id).copied().unwrap_or_default(),
                row,
            })
            .collect();

        Ok(Self {
            origin: layout.origin,
            total_span: layout.total_span,
            activities: scheduled,
            connectors: layout.connectors,
        })
    }

    pub fn get(&self, id: ActivityId) -> Option<&ScheduledActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn effective_start(&self, id: ActivityId) -> Option<NaiveDate> {
        self.get(id).map(|a| a.effective_start)
    }
}
