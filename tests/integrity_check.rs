// tests/integrity_check.rs
mod common;
use crate::common::builders::ActivityBuilder;

use construplan::dag::check_integrity;
use construplan::dag::integrity::{AsymmetricEdge, DanglingReference, EdgeSide};

#[test]
fn symmetric_acyclic_collection_is_clean() {
    let activities = vec![
        ActivityBuilder::new(1).before(2).build(),
        ActivityBuilder::new(2).after(1).before(3).build(),
        ActivityBuilder::new(3).after(2).build(),
    ];

    assert!(check_integrity(&activities).is_clean());
}

#[test]
fn one_sided_edges_report_where_they_were_found() {
    let activities = vec![
        ActivityBuilder::new(1).build(),
        ActivityBuilder::new(2).after(1).before(3).build(),
        ActivityBuilder::new(3).build(),
    ];

    let report = check_integrity(&activities);

    assert_eq!(
        report.asymmetric_edges,
        vec![
            AsymmetricEdge {
                predecessor: 1,
                successor: 2,
                recorded_in: EdgeSide::Predecessors,
            },
            AsymmetricEdge {
                predecessor: 2,
                successor: 3,
                recorded_in: EdgeSide::Successors,
            },
        ]
    );
    assert!(report.cycles.is_empty());
    assert!(!report.is_clean());
}

#[test]
fn references_to_removed_activities_are_dangling() {
    let activities = vec![
        ActivityBuilder::new(2).after(1).build(),
        ActivityBuilder::new(3).before(7).build(),
    ];

    let report = check_integrity(&activities);

    assert_eq!(
        report.dangling_references,
        vec![
            DanglingReference { activity: 2, missing: 1 },
            DanglingReference { activity: 3, missing: 7 },
        ]
    );
    assert!(report.asymmetric_edges.is_empty());
}

#[test]
fn hand_made_cycles_are_reported_once_per_group() {
    let activities = vec![
        ActivityBuilder::new(1).after(2).before(2).build(),
        ActivityBuilder::new(2).after(1).before(1).build(),
        ActivityBuilder::new(3).after(3).before(3).build(),
        ActivityBuilder::new(4).build(),
    ];

    let report = check_integrity(&activities);

    assert_eq!(report.cycles, vec![vec![1, 2], vec![3]]);
}

#[test]
fn cycle_visible_from_one_side_only_is_still_reported() {
    let activities = vec![
        ActivityBuilder::new(1).after(2).build(),
        ActivityBuilder::new(2).after(1).build(),
    ];

    let report = check_integrity(&activities);

    assert_eq!(report.cycles, vec![vec![1, 2]]);
    assert_eq!(report.asymmetric_edges.len(), 2);
}

#[test]
fn duplicate_ids_are_listed_once() {
    let activities = vec![
        ActivityBuilder::new(1).build(),
        ActivityBuilder::new(1).title("Copy").build(),
        ActivityBuilder::new(1).title("Another copy").build(),
        ActivityBuilder::new(2).build(),
    ];

    let report = check_integrity(&activities);

    assert_eq!(report.duplicate_ids, vec![1]);
}

#[test]
fn empty_collection_is_clean() {
    assert!(check_integrity(&[]).is_clean());
}
