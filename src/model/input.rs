// src/model/input.rs

//! Boundary validation for partial activity input.
//!
//! Everything the CLI (or any other caller) hands us is optional and loosely
//! typed. This module enumerates every optional field with its default and
//! produces fully-populated values, so the store never sees a half-built
//! record or an unparsable date.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::{ConstruplanError, Result};
use crate::model::activity::{Activity, ActivityId};

/// Format accepted for `start` dates (ISO-8601, day precision).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, rejecting anything else.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ConstruplanError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Defaults applied when a draft omits a field (from `[defaults]` in config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDefaults {
    pub title: String,
    pub duration: u32,
}

impl Default for ActivityDefaults {
    fn default() -> Self {
        Self {
            title: "New activity".to_string(),
            duration: 1,
        }
    }
}

/// Raw input for creating an activity. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub predecessors: Option<Vec<ActivityId>>,
    #[serde(default)]
    pub successors: Option<Vec<ActivityId>>,
}

/// A validated activity that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub title: String,
    pub start: NaiveDate,
    pub duration: u32,
    pub predecessors: BTreeSet<ActivityId>,
    pub successors: BTreeSet<ActivityId>,
}

impl NewActivity {
    pub fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            id,
            title: self.title,
            start: self.start,
            duration: self.duration,
            predecessors: self.predecessors,
            successors: self.successors,
        }
    }
}

impl ActivityDraft {
    /// Apply defaults and validate.
    ///
    /// - blank or missing title -> `defaults.title`
    /// - missing start -> `today`; unparsable start -> `InvalidDate`
    /// - missing or non-positive duration -> `defaults.duration`
    /// - missing id lists -> empty (duplicates collapse)
    pub fn validate(self, defaults: &ActivityDefaults, today: NaiveDate) -> Result<NewActivity> {
        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => defaults.title.clone(),
        };

        let start = match self.start.as_deref() {
            Some(s) => parse_date(s)?,
            None => today,
        };

        let duration = match self.duration {
            Some(d) if d > 0 => clamp_duration(d)?,
            _ => defaults.duration,
        };

        Ok(NewActivity {
            title,
            start,
            duration,
            predecessors: self.predecessors.unwrap_or_default().into_iter().collect(),
            successors: self.successors.unwrap_or_default().into_iter().collect(),
        })
    }
}

/// Raw partial update. `None` means "keep the current value".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub predecessors: Option<Vec<ActivityId>>,
    #[serde(default)]
    pub successors: Option<Vec<ActivityId>>,
}

/// Validated partial update, ready to merge onto an existing activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidPatch {
    pub title: Option<String>,
    pub start: Option<NaiveDate>,
    pub duration: Option<u32>,
    pub predecessors: Option<BTreeSet<ActivityId>>,
    pub successors: Option<BTreeSet<ActivityId>>,
}

impl ActivityPatch {
    /// Validate the patch. A non-positive duration normalizes to 1; blank
    /// titles are ignored rather than stored.
    pub fn validate(self) -> Result<ValidPatch> {
        let start = self.start.as_deref().map(parse_date).transpose()?;
        let duration = match self.duration {
            Some(d) if d > 0 => Some(clamp_duration(d)?),
            Some(_) => Some(1),
            None => None,
        };

        Ok(ValidPatch {
            title: self.title.filter(|t| !t.trim().is_empty()),
            start,
            duration,
            predecessors: self.predecessors.map(|p| p.into_iter().collect()),
            successors: self.successors.map(|s| s.into_iter().collect()),
        })
    }
}

impl ValidPatch {
    /// Merge onto `activity` field by field. The id never changes.
    pub fn apply_to(self, activity: &mut Activity) {
        if let Some(title) = self.title {
            activity.title = title;
        }
        if let Some(start) = self.start {
            activity.start = start;
        }
        if let Some(duration) = self.duration {
            activity.duration = duration;
        }
        if let Some(predecessors) = self.predecessors {
            activity.predecessors = predecessors;
        }
        if let Some(successors) = self.successors {
            activity.successors = successors;
        }
    }
}

fn clamp_duration(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ConstruplanError::InvalidDuration { value })
}
