// src/watch/mod.rs

//! Watching the activity data file.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the data
//!   file's directory and forwarding changes to that one file.
//! - Content hashing, so a touch or a rewrite with identical content does not
//!   trigger a re-render.
//!
//! It knows nothing about scheduling; the caller decides what a change means.

pub mod hash;
pub mod watcher;

pub use hash::{ContentChangeFilter, compute_file_hash};
pub use watcher::{WatcherHandle, spawn_data_watcher};
