// src/dag/mod.rs

//! Dependency graph algorithms over an activity snapshot.
//!
//! - [`graph`] builds a `petgraph` view of the predecessor/successor relation.
//! - [`cycle`] rejects predecessor edges that would close a loop.
//! - [`relations`] keeps predecessor and successor lists symmetric.
//! - [`resolver`] propagates finish dates forward into effective starts.
//! - [`layout`] projects resolved dates onto a day-offset timeline.
//! - [`integrity`] reports inconsistencies in loaded data.
//!
//! Everything here is synchronous and side-effect free apart from logging.

pub mod cycle;
pub mod graph;
pub mod integrity;
pub mod layout;
pub mod relations;
pub mod resolver;

pub use cycle::{ensure_acyclic, ensure_successors_acyclic, would_create_cycle};
pub use graph::ActivityGraph;
pub use integrity::{IntegrityReport, check_integrity};
pub use layout::{Anchor, Connector, GanttLayout, project};
pub use relations::synchronize;
pub use resolver::{ResolvedDates, resolve};
