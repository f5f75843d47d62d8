// src/dag/resolver.rs

//! Forward propagation of effective start dates.
//!
//! An activity with resolvable predecessors starts the day after the latest
//! predecessor finishes, where `finish = effective_start + duration` days.
//! Activities without resolvable predecessors keep their declared `start`.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::errors::{ConstruplanError, Result};
use crate::model::{Activity, ActivityId};

/// Effective start per activity id.
pub type ResolvedDates = BTreeMap<ActivityId, NaiveDate>;

/// Resolve the effective start date of every activity in `activities`.
///
/// Pure: the snapshot is only read, and nothing is cached across calls.
pub fn resolve(activities: &[Activity]) -> Result<ResolvedDates> {
    let mut resolver = ScheduleResolver::new(activities);
    for activity in activities {
        resolver.effective_start(activity)?;
    }
    debug!(resolved = resolver.memo.len(), "schedule resolved");
    Ok(resolver.memo)
}

/// One resolution pass over a snapshot.
///
/// `memo` is shared by the whole pass so shared predecessors are computed once.
/// `resolving` holds only the ids on the current recursion path; it is pushed
/// on entry and popped on exit, so sibling branches never see each other.
struct ScheduleResolver<'a> {
    index: HashMap<ActivityId, &'a Activity>,
    memo: ResolvedDates,
    resolving: HashSet<ActivityId>,
}

impl<'a> ScheduleResolver<'a> {
    fn new(activities: &'a [Activity]) -> Self {
        let mut index = HashMap::with_capacity(activities.len());
        for activity in activities {
            // First occurrence wins for duplicated ids.
            index.entry(activity.id).or_insert(activity);
        }
        Self {
            index,
            memo: BTreeMap::new(),
            resolving: HashSet::new(),
        }
    }

    fn effective_start(&mut self, activity: &'a Activity) -> Result<NaiveDate> {
        if let Some(&date) = self.memo.get(&activity.id) {
            return Ok(date);
        }

        // Only reachable if a cycle slipped past the write-side checks
        // (e.g. a hand-edited data file).
        if self.resolving.contains(&activity.id) {
            warn!(
                activity = activity.id,
                "cycle reached while resolving; falling back to declared start"
            );
            return Ok(activity.start);
        }

        self.resolving.insert(activity.id);
        let computed = self.from_predecessors(activity);
        self.resolving.remove(&activity.id);

        let date = computed?;
        self.memo.insert(activity.id, date);
        Ok(date)
    }

    fn from_predecessors(&mut self, activity: &'a Activity) -> Result<NaiveDate> {
        let mut latest_finish: Option<NaiveDate> = None;

        for pred_id in &activity.predecessors {
            let Some(&pred) = self.index.get(pred_id) else {
                debug!(
                    activity = activity.id,
                    predecessor = pred_id,
                    "skipping missing predecessor"
                );
                continue;
            };

            let pred_start = self.effective_start(pred)?;
            let finish = pred_start
                .checked_add_days(Days::new(u64::from(pred.duration)))
                .ok_or(ConstruplanError::DateOutOfRange(pred.id))?;

            latest_finish = Some(latest_finish.map_or(finish, |f| f.max(finish)));
        }

        match latest_finish {
            None => Ok(activity.start),
            Some(finish) => finish
                .checked_add_days(Days::new(1))
                .ok_or(ConstruplanError::DateOutOfRange(activity.id)),
        }
    }
}
