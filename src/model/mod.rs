// src/model/mod.rs

//! Activity data model.
//!
//! - [`activity`] holds the fully-populated `Activity` record the core works on.
//! - [`input`] is the boundary layer: partial user input is validated and
//!   defaulted here exactly once, before anything reaches the store.

pub mod activity;
pub mod input;

pub use activity::{Activity, ActivityId, find, find_mut};
pub use input::{
    ActivityDefaults, ActivityDraft, ActivityPatch, NewActivity, ValidPatch, parse_date,
};
