// src/engine/mod.rs

//! Activity store engine.
//!
//! The pure store lives in [`core`]: it applies create/update/remove to a
//! working copy, gates them on the cycle detector, synchronizes relations and
//! commits atomically. [`runtime`] is the async single-writer shell that owns
//! the store together with its storage backend and persists after every
//! successful mutation. [`schedule`] is the read-side view handed to renderers.

pub mod core;
pub mod runtime;
pub mod schedule;

pub use self::core::ActivityStore;
pub use runtime::{StoreHandle, StoreRequest, StoreRuntime};
pub use schedule::{Schedule, ScheduledActivity};
