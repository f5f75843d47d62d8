// src/storage/mod.rs

//! Whole-collection persistence.
//!
//! The store only ever loads everything or saves everything; there is no
//! partial-write contract. [`JsonFileStorage`] is the production backend,
//! [`MemoryStorage`] backs tests.

use std::fmt::Debug;

use crate::errors::Result;
use crate::model::Activity;

pub mod json;
pub mod memory;

pub use json::JsonFileStorage;
pub use memory::MemoryStorage;

/// Persistence boundary for the activity collection.
pub trait ActivityStorage: Send + Debug {
    /// Load the full ordered collection.
    fn load(&self) -> Result<Vec<Activity>>;

    /// Overwrite the persisted collection with `activities`.
    fn save(&self, activities: &[Activity]) -> Result<()>;
}
