// tests/render_output.rs
mod common;
use crate::common::builders::ActivityBuilder;

use construplan::config::GanttSection;
use construplan::dag::check_integrity;
use construplan::engine::Schedule;
use construplan::render::{
    MAX_TIMELINE_WIDTH, render_activity_table, render_integrity, render_timeline,
};

fn foundation_and_framing() -> Vec<construplan::model::Activity> {
    vec![
        ActivityBuilder::new(1)
            .title("Foundation")
            .start("2024-01-01")
            .duration(5)
            .before(2)
            .build(),
        ActivityBuilder::new(2)
            .title("Framing")
            .start("2024-03-01")
            .duration(3)
            .after(1)
            .build(),
    ]
}

#[test]
fn timeline_draws_bars_at_resolved_offsets() {
    let schedule = Schedule::build(&foundation_and_framing()).unwrap();

    let out = render_timeline(&schedule, &GanttSection::default());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "timeline from 2024-01-01 (9 days)");
    assert!(lines[2].starts_with("1 - Foundation"));
    assert!(lines[2].ends_with("|██████████        | 2024-01-01 +5d"));
    assert!(lines[3].starts_with("2 - Framing"));
    assert!(lines[3].ends_with("|            ██████| 2024-01-07 +3d"));
    assert!(out.contains("1 -> 2"));
    assert!(out.contains("(day 5, row 0) => (day 6, row 1)"));
}

#[test]
fn timeline_of_empty_collection() {
    let schedule = Schedule::build(&[]).unwrap();

    assert_eq!(
        render_timeline(&schedule, &GanttSection::default()),
        "no activities\n"
    );
}

#[test]
fn long_titles_are_truncated_to_the_label_column() {
    let activities = vec![
        ActivityBuilder::new(1)
            .title("Install temporary site drainage and erosion control")
            .build(),
    ];
    let schedule = Schedule::build(&activities).unwrap();
    let gantt = GanttSection {
        day_width: 1,
        label_width: 12,
    };

    let out = render_timeline(&schedule, &gantt);
    let bar_line = out.lines().nth(2).unwrap();

    assert_eq!(bar_line.split('|').next().unwrap().chars().count(), 12);
    assert!(bar_line.contains('…'));
}

fn bar_of(line: &str) -> &str {
    line.split('|').nth(1).unwrap()
}

#[test]
fn longest_possible_duration_renders_within_the_width_limit() {
    let activities = vec![ActivityBuilder::new(1).duration(u32::MAX).build()];
    let schedule = Schedule::build(&activities).unwrap();
    assert_eq!(schedule.total_span, i64::from(u32::MAX));

    let out = render_timeline(&schedule, &GanttSection::default());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], format!("timeline from 2024-01-01 ({} days)", u32::MAX));
    assert_eq!(bar_of(lines[1]).chars().count(), MAX_TIMELINE_WIDTH);
    assert_eq!(bar_of(lines[2]).chars().count(), MAX_TIMELINE_WIDTH);
    assert!(bar_of(lines[2]).chars().all(|c| c == '█'));
}

#[test]
fn long_timelines_are_scaled_to_fit() {
    let activities = vec![
        ActivityBuilder::new(1).duration(500).before(2).build(),
        ActivityBuilder::new(2).duration(500).after(1).build(),
    ];
    let schedule = Schedule::build(&activities).unwrap();
    assert_eq!(schedule.total_span, 1001);

    let out = render_timeline(&schedule, &GanttSection::default());
    let lines: Vec<&str> = out.lines().collect();

    // 1001 days on 480 cells: day 500 lands on column 239, day 501 on 240.
    let first = bar_of(lines[2]);
    let second = bar_of(lines[3]);
    assert_eq!(first.chars().count(), MAX_TIMELINE_WIDTH);
    assert_eq!(first.chars().filter(|&c| c == '█').count(), 239);
    assert!(first.starts_with('█'));
    assert_eq!(second.chars().count(), MAX_TIMELINE_WIDTH);
    assert_eq!(second.chars().take_while(|&c| c == ' ').count(), 240);
    assert_eq!(second.chars().filter(|&c| c == '█').count(), 240);
}

#[test]
fn activity_table_lists_relations() {
    let out = render_activity_table(&foundation_and_framing());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("TITLE"));
    assert!(lines[1].contains("Foundation"));
    assert!(lines[1].contains("2024-01-01"));
    assert!(lines[1].trim_end().ends_with('2'));
    assert!(lines[2].contains("Framing"));
    assert!(lines[2].trim_end().ends_with('-'));
}

#[test]
fn clean_integrity_report_says_ok() {
    let report = check_integrity(&foundation_and_framing());

    assert_eq!(render_integrity(&report), "ok: no integrity issues\n");
}

#[test]
fn integrity_issues_are_listed() {
    let activities = vec![
        ActivityBuilder::new(1).after(2).build(),
        ActivityBuilder::new(2).after(1).before(9).build(),
    ];

    let out = render_integrity(&check_integrity(&activities));

    assert!(out.contains("one-sided edge 2 -> 1: listed in predecessors, missing from successors"));
    assert!(out.contains("dangling reference: activity 2 refers to missing activity 9"));
    assert!(out.contains("cycle through activities: 1, 2"));
}
