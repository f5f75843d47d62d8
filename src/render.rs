// src/render.rs

//! Plain-text output for the terminal.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::config::GanttSection;
use crate::dag::IntegrityReport;
use crate::dag::integrity::EdgeSide;
use crate::engine::Schedule;
use crate::model::{Activity, ActivityId};

const BAR: char = '█';

/// Widest timeline drawn, in character cells.
pub const MAX_TIMELINE_WIDTH: usize = 480;

/// One line per activity: id, declared start, duration, title and relations.
pub fn render_activity_table(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return "no activities\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<10}  {:>4}  {:<24}  {:<12}  {}",
        "ID", "START", "DAYS", "TITLE", "AFTER", "BEFORE"
    );
    for a in activities {
        let _ = writeln!(
            out,
            "{:>4}  {:<10}  {:>4}  {:<24}  {:<12}  {}",
            a.id,
            a.start,
            a.duration,
            truncate(&a.title, 24),
            id_set(&a.predecessors),
            id_set(&a.successors),
        );
    }
    out
}

/// Timeline chart: a day-offset header, one bar per activity in display
/// order, then the predecessor connectors.
///
/// The chart is at most [`MAX_TIMELINE_WIDTH`] cells wide. Longer timelines
/// are scaled down so that one cell covers several days.
pub fn render_timeline(schedule: &Schedule, gantt: &GanttSection) -> String {
    let Some(origin) = schedule.origin else {
        return "no activities\n".to_string();
    };

    let label_width = gantt.label_width;
    let days = usize::try_from(schedule.total_span).unwrap_or_default();
    let scale = TimelineScale::new(days, gantt.day_width.max(1));

    let mut out = String::new();
    let _ = writeln!(out, "timeline from {origin} ({days} days)");
    let _ = writeln!(out, "{:label_width$}|{}", "", day_header(&scale));

    for entry in &schedule.activities {
        let label = truncate(
            &format!("{} - {}", entry.id, entry.title),
            label_width.saturating_sub(1),
        );
        let offset = usize::try_from(entry.offset_days).unwrap_or_default();
        let duration = usize::try_from(entry.duration).unwrap_or_default();

        let start = scale.column(offset);
        let end = scale.column(offset.saturating_add(duration)).max(start + 1);
        let end = end.min(scale.width).max(start);

        let mut bar = " ".repeat(start);
        bar.extend(std::iter::repeat_n(BAR, end - start));
        bar.push_str(&" ".repeat(scale.width - end));

        let _ = writeln!(
            out,
            "{label:label_width$}|{bar}| {} +{}d",
            entry.effective_start, entry.duration
        );
    }

    if !schedule.connectors.is_empty() {
        out.push('\n');
        for c in &schedule.connectors {
            let _ = writeln!(
                out,
                "{:>4} -> {:<4} (day {}, row {}) => (day {}, row {})",
                c.from, c.to, c.start.day, c.start.row, c.end.day, c.end.row
            );
        }
    }

    out
}

/// Human-readable integrity report.
pub fn render_integrity(report: &IntegrityReport) -> String {
    if report.is_clean() {
        return "ok: no integrity issues\n".to_string();
    }

    let mut out = String::new();
    for id in &report.duplicate_ids {
        let _ = writeln!(out, "duplicate id: {id}");
    }
    for edge in &report.asymmetric_edges {
        let (has, lacks) = match edge.recorded_in {
            EdgeSide::Predecessors => ("predecessors", "successors"),
            EdgeSide::Successors => ("successors", "predecessors"),
        };
        let _ = writeln!(
            out,
            "one-sided edge {} -> {}: listed in {has}, missing from {lacks}",
            edge.predecessor, edge.successor
        );
    }
    for dangling in &report.dangling_references {
        let _ = writeln!(
            out,
            "dangling reference: activity {} refers to missing activity {}",
            dangling.activity, dangling.missing
        );
    }
    for cycle in &report.cycles {
        let ids: Vec<String> = cycle.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "cycle through activities: {}", ids.join(", "));
    }
    out
}

/// Maps day offsets to character columns.
struct TimelineScale {
    days: usize,
    width: usize,
}

impl TimelineScale {
    fn new(days: usize, day_width: usize) -> Self {
        Self {
            days,
            width: days.saturating_mul(day_width).min(MAX_TIMELINE_WIDTH),
        }
    }

    /// Column where `day` starts. Exactly `day * day_width` when unscaled.
    fn column(&self, day: usize) -> usize {
        if self.days == 0 {
            return 0;
        }
        let col = day as u128 * self.width as u128 / self.days as u128;
        usize::try_from(col).unwrap_or(self.width).min(self.width)
    }

    /// First day starting at or after column `pos`.
    fn day_at(&self, pos: usize) -> usize {
        if self.width == 0 {
            return 0;
        }
        let day = (pos as u128 * self.days as u128).div_ceil(self.width as u128);
        usize::try_from(day).unwrap_or(self.days)
    }
}

/// Day indices laid out on the timeline grid. Numbers that would overlap the
/// previous one are skipped.
fn day_header(scale: &TimelineScale) -> String {
    let width = scale.width;
    let mut header = String::with_capacity(width);
    for pos in 0..width {
        let day = scale.day_at(pos);
        if day >= scale.days || scale.column(day) != pos || header.len() > pos {
            continue;
        }
        header.push_str(&" ".repeat(pos - header.len()));
        let label = day.to_string();
        if pos + label.len() <= width {
            header.push_str(&label);
        }
    }
    header.push_str(&" ".repeat(width.saturating_sub(header.len())));
    header
}

fn id_set(ids: &BTreeSet<ActivityId>) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
    t.push('…');
    t
}
