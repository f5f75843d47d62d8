// tests/gantt_layout.rs
mod common;
use crate::common::builders::{ActivityBuilder, date};

use construplan::dag::{Anchor, Connector, project, resolve};
use construplan::engine::Schedule;
use construplan::model::Activity;

fn foundation_and_framing() -> Vec<Activity> {
    vec![
        ActivityBuilder::new(1).start("2024-01-01").duration(5).before(2).build(),
        ActivityBuilder::new(2).start("2024-03-01").duration(3).after(1).build(),
    ]
}

#[test]
fn offsets_are_measured_from_the_earliest_resolved_date() {
    let activities = foundation_and_framing();
    let resolved = resolve(&activities).unwrap();

    let layout = project(&activities, &resolved, &[1, 2]);

    assert_eq!(layout.origin, Some(date("2024-01-01")));
    assert_eq!(layout.offsets[&1], 0);
    assert_eq!(layout.offsets[&2], 6);
    assert_eq!(layout.total_span, 9);
}

#[test]
fn connector_runs_from_predecessor_finish_to_successor_start() {
    let activities = foundation_and_framing();
    let resolved = resolve(&activities).unwrap();

    let layout = project(&activities, &resolved, &[1, 2]);

    assert_eq!(
        layout.connectors,
        vec![Connector {
            from: 1,
            to: 2,
            start: Anchor { day: 5, row: 0 },
            end: Anchor { day: 6, row: 1 },
        }]
    );
}

#[test]
fn rows_follow_display_order_not_dates() {
    let activities = foundation_and_framing();
    let resolved = resolve(&activities).unwrap();

    let layout = project(&activities, &resolved, &[2, 1]);

    assert_eq!(layout.connectors[0].start, Anchor { day: 5, row: 1 });
    assert_eq!(layout.connectors[0].end, Anchor { day: 6, row: 0 });
}

#[test]
fn edges_with_an_endpoint_outside_display_order_are_omitted() {
    let activities = foundation_and_framing();
    let resolved = resolve(&activities).unwrap();

    assert!(project(&activities, &resolved, &[2]).connectors.is_empty());
    assert!(project(&activities, &resolved, &[1]).connectors.is_empty());
}

#[test]
fn dangling_predecessor_draws_no_connector() {
    let activities = vec![ActivityBuilder::new(2).after(1).build()];
    let resolved = resolve(&activities).unwrap();

    let layout = project(&activities, &resolved, &[1, 2]);

    assert!(layout.connectors.is_empty());
    assert_eq!(layout.offsets[&2], 0);
}

#[test]
fn origin_is_the_minimum_even_when_listed_last() {
    let activities = vec![
        ActivityBuilder::new(1).start("2024-01-10").duration(2).build(),
        ActivityBuilder::new(2).start("2024-01-03").duration(1).build(),
    ];
    let resolved = resolve(&activities).unwrap();

    let layout = project(&activities, &resolved, &[1, 2]);

    assert_eq!(layout.origin, Some(date("2024-01-03")));
    assert_eq!(layout.offsets[&1], 7);
    assert_eq!(layout.offsets[&2], 0);
    assert_eq!(layout.total_span, 9);
}

#[test]
fn empty_collection_has_no_origin() {
    let layout = project(&[], &Default::default(), &[]);

    assert_eq!(layout.origin, None);
    assert_eq!(layout.total_span, 0);
    assert!(layout.offsets.is_empty());
}

#[test]
fn schedule_combines_resolution_and_layout_in_stored_order() {
    let schedule = Schedule::build(&foundation_and_framing()).unwrap();

    let framing = schedule.get(2).unwrap();
    assert_eq!(framing.declared_start, date("2024-03-01"));
    assert_eq!(framing.effective_start, date("2024-01-07"));
    assert_eq!(framing.offset_days, 6);
    assert_eq!(framing.row, 1);
    assert_eq!(schedule.total_span, 9);
    assert_eq!(schedule.connectors.len(), 1);
}
