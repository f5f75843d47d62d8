#![allow(dead_code)]

use chrono::NaiveDate;
use construplan::engine::ActivityStore;
use construplan::model::{
    Activity, ActivityDraft, ActivityId, ActivityPatch, ValidPatch, parse_date,
};

/// Parse a `YYYY-MM-DD` literal, panicking on typos in test code.
pub fn date(s: &str) -> NaiveDate {
    parse_date(s).expect("valid test date")
}

/// Builder for a stored `Activity`. Relations are taken verbatim, so tests can
/// build asymmetric or cyclic collections on purpose.
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    pub fn new(id: ActivityId) -> Self {
        Self {
            activity: Activity {
                id,
                title: format!("Activity {id}"),
                start: date("2024-01-01"),
                duration: 1,
                predecessors: Default::default(),
                successors: Default::default(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.activity.title = title.to_string();
        self
    }

    pub fn start(mut self, start: &str) -> Self {
        self.activity.start = date(start);
        self
    }

    pub fn duration(mut self, days: u32) -> Self {
        self.activity.duration = days;
        self
    }

    pub fn after(mut self, id: ActivityId) -> Self {
        self.activity.predecessors.insert(id);
        self
    }

    pub fn before(mut self, id: ActivityId) -> Self {
        self.activity.successors.insert(id);
        self
    }

    pub fn build(self) -> Activity {
        self.activity
    }
}

/// Builder for partial create input.
#[derive(Default)]
pub struct DraftBuilder {
    draft: ActivityDraft,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.draft.title = Some(title.to_string());
        self
    }

    pub fn start(mut self, start: &str) -> Self {
        self.draft.start = Some(start.to_string());
        self
    }

    pub fn duration(mut self, days: i64) -> Self {
        self.draft.duration = Some(days);
        self
    }

    pub fn after(mut self, id: ActivityId) -> Self {
        self.draft.predecessors.get_or_insert_with(Vec::new).push(id);
        self
    }

    pub fn before(mut self, id: ActivityId) -> Self {
        self.draft.successors.get_or_insert_with(Vec::new).push(id);
        self
    }

    pub fn build(self) -> ActivityDraft {
        self.draft
    }
}

/// Builder for partial update input, validated on `build`.
#[derive(Default)]
pub struct PatchBuilder {
    patch: ActivityPatch,
}

impl PatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.patch.title = Some(title.to_string());
        self
    }

    pub fn start(mut self, start: &str) -> Self {
        self.patch.start = Some(start.to_string());
        self
    }

    pub fn duration(mut self, days: i64) -> Self {
        self.patch.duration = Some(days);
        self
    }

    pub fn predecessors(mut self, ids: &[ActivityId]) -> Self {
        self.patch.predecessors = Some(ids.to_vec());
        self
    }

    pub fn successors(mut self, ids: &[ActivityId]) -> Self {
        self.patch.successors = Some(ids.to_vec());
        self
    }

    pub fn build(self) -> ValidPatch {
        self.patch.validate().expect("valid test patch")
    }
}

/// `[{id:1, title:"Foundation", start:"2024-01-01", duration:5}]`
pub fn foundation_store() -> ActivityStore {
    ActivityStore::new(vec![
        ActivityBuilder::new(1)
            .title("Foundation")
            .start("2024-01-01")
            .duration(5)
            .build(),
    ])
}

/// Symmetry check over a whole collection: `B ∈ A.predecessors ⇔ A ∈ B.successors`
/// for every pair of activities present.
pub fn is_symmetric(activities: &[Activity]) -> bool {
    let present = |id: ActivityId| activities.iter().any(|a| a.id == id);
    let get = |id: ActivityId| activities.iter().find(|a| a.id == id);

    activities.iter().all(|a| {
        a.predecessors
            .iter()
            .filter(|&&p| present(p))
            .all(|&p| get(p).is_some_and(|p| p.successors.contains(&a.id)))
            && a.successors
                .iter()
                .filter(|&&s| present(s))
                .all(|&s| get(s).is_some_and(|s| s.predecessors.contains(&a.id)))
    })
}
