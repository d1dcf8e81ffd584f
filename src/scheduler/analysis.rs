//! Timetable quality analysis.
//!
//! A read-only pass over a finished grid that reports faculty load, idle
//! gaps, and human-readable suggestions.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Faculty load | Lecture hours (whole-class channel) + lab hours (each batch channel) |
//! | Imbalance | `max - min` load above the configured threshold |
//! | Gap | A filled slot reached after one or more empty slots, once the channel's day has started |
//!
//! Lunch slots are skipped by both scans.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::GeneratorConfig;
use crate::models::{is_lunch, Channel, Day, SlotAssignment, TimetableGrid, SLOTS_PER_DAY};

const WELL_BALANCED: &str = "The timetable looks well-balanced with no significant issues detected.";

/// Faculty load statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadSummary {
    /// Mean load, rounded to one decimal.
    pub average: f64,
    pub min: u32,
    pub max: u32,
    /// Weekly load per faculty.
    pub by_faculty: BTreeMap<String, u32>,
    /// Load per faculty for each day.
    pub by_day: BTreeMap<Day, BTreeMap<String, u32>>,
}

/// Gap counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub total_gaps: u32,
    /// Gaps per channel for each day.
    pub by_day: BTreeMap<Day, BTreeMap<Channel, u32>>,
}

/// Full analysis of a generated timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableAnalysis {
    pub faculty_workload: WorkloadSummary,
    pub gap_analysis: GapAnalysis,
    pub suggestions: Vec<String>,
}

impl TimetableAnalysis {
    /// Analyzes `grid` with the thresholds from `config`.
    ///
    /// Pure: the grid is only read, and equal grids give equal results.
    pub fn analyze(grid: &TimetableGrid, config: &GeneratorConfig) -> Self {
        let mut suggestions = Vec::new();

        let mut faculty_workload = summarize_workload(grid);
        if let Some(text) = imbalance_suggestion(&faculty_workload, config) {
            suggestions.push(text);
        }
        faculty_workload.average = (faculty_workload.average * 10.0).round() / 10.0;

        let gap_analysis = analyze_gaps(grid);
        if gap_analysis.total_gaps > 0 {
            suggestions.push(format!(
                "There are {} gaps in the timetable. Consider generating again or manually \
                 adjusting to reduce gaps between classes.",
                gap_analysis.total_gaps
            ));
        }

        if suggestions.is_empty() {
            suggestions.push(WELL_BALANCED.to_string());
        }

        Self {
            faculty_workload,
            gap_analysis,
            suggestions,
        }
    }
}

fn summarize_workload(grid: &TimetableGrid) -> WorkloadSummary {
    let mut by_faculty: BTreeMap<String, u32> = BTreeMap::new();
    let mut by_day: BTreeMap<Day, BTreeMap<String, u32>> =
        Day::ALL.iter().map(|&day| (day, BTreeMap::new())).collect();

    for day in Day::ALL {
        for (slot, row) in grid.day(day).iter().enumerate() {
            if is_lunch(slot) {
                continue;
            }

            let lecture = row
                .whole_class
                .is_theory()
                .then(|| row.whole_class.faculty())
                .flatten();
            let labs = row
                .batches
                .iter()
                .filter(|cell| cell.is_lab() && !cell.is_synchronized())
                .filter_map(SlotAssignment::faculty);

            for faculty in lecture.into_iter().chain(labs) {
                *by_faculty.entry(faculty.to_string()).or_insert(0) += 1;
                *by_day
                    .entry(day)
                    .or_default()
                    .entry(faculty.to_string())
                    .or_insert(0) += 1;
            }
        }
    }

    let (average, min, max) = if by_faculty.is_empty() {
        (0.0, 0, 0)
    } else {
        let total: u32 = by_faculty.values().sum();
        let mean = f64::from(total) / by_faculty.len() as f64;
        let min = by_faculty.values().copied().min().unwrap_or(0);
        let max = by_faculty.values().copied().max().unwrap_or(0);
        (mean, min, max)
    };

    WorkloadSummary {
        average,
        min,
        max,
        by_faculty,
        by_day,
    }
}

/// Suggests moving classes from overloaded to underloaded faculty.
///
/// Expects the unrounded mean in `summary.average`; rounding happens after.
fn imbalance_suggestion(summary: &WorkloadSummary, config: &GeneratorConfig) -> Option<String> {
    if summary.max - summary.min <= config.imbalance_threshold {
        return None;
    }

    let avg = summary.average;
    let margin = config.imbalance_margin;
    let overloaded: Vec<&str> = summary
        .by_faculty
        .iter()
        .filter(|&(_, &load)| f64::from(load) > avg + margin)
        .map(|(f, _)| f.as_str())
        .collect();
    let underloaded: Vec<&str> = summary
        .by_faculty
        .iter()
        .filter(|&(_, &load)| f64::from(load) < avg - margin)
        .map(|(f, _)| f.as_str())
        .collect();

    if overloaded.is_empty() || underloaded.is_empty() {
        return None;
    }
    Some(format!(
        "Consider redistributing classes from {} to {} for more balanced workload.",
        overloaded.join(", "),
        underloaded.join(", ")
    ))
}

fn analyze_gaps(grid: &TimetableGrid) -> GapAnalysis {
    let mut total_gaps = 0;
    let mut by_day = BTreeMap::new();

    for day in Day::ALL {
        let mut day_gaps = BTreeMap::new();
        for channel in grid.channels() {
            let gaps = count_channel_gaps(grid, day, channel);
            total_gaps += gaps;
            day_gaps.insert(channel, gaps);
        }
        by_day.insert(day, day_gaps);
    }

    GapAnalysis { total_gaps, by_day }
}

/// Counts filled slots that follow an empty stretch after the channel's
/// first filled slot of the day.
pub fn count_channel_gaps(grid: &TimetableGrid, day: Day, channel: Channel) -> u32 {
    let mut gaps = 0;
    let mut started = false;
    let mut prev_empty = false;

    for slot in (0..SLOTS_PER_DAY).filter(|&s| !is_lunch(s)) {
        if grid.is_filled(day, slot, channel) {
            if started && prev_empty {
                gaps += 1;
            }
            started = true;
            prev_empty = false;
        } else {
            prev_empty = true;
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;

    fn lecture(grid: &mut TimetableGrid, day: Day, slot: usize, faculty: &str) {
        grid.assign_whole_class(day, slot, Session::new("Math", faculty, "R1"));
    }

    #[test]
    fn test_empty_grid_is_well_balanced() {
        let grid = TimetableGrid::new(1);
        let analysis = TimetableAnalysis::analyze(&grid, &GeneratorConfig::default());

        assert_eq!(analysis.gap_analysis.total_gaps, 0);
        assert!(analysis.faculty_workload.by_faculty.is_empty());
        assert_eq!(analysis.faculty_workload.by_day.len(), 5);
        assert_eq!(analysis.suggestions, vec![WELL_BALANCED.to_string()]);
    }

    #[test]
    fn test_workload_counts_lectures_once_and_labs_per_batch() {
        let mut grid = TimetableGrid::new(2);
        lecture(&mut grid, Day::Monday, 0, "F1");
        let lab = Session::new("Physics Lab", "F2", "L1");
        for batch in 1..=2 {
            grid.assign_batch_lab(Day::Tuesday, 4, batch, lab.clone());
            grid.assign_batch_lab(Day::Tuesday, 5, batch, lab.clone());
        }

        let summary = TimetableAnalysis::analyze(&grid, &GeneratorConfig::default()).faculty_workload;
        assert_eq!(summary.by_faculty["F1"], 1);
        assert_eq!(summary.by_faculty["F2"], 4);
        assert_eq!(summary.by_day[&Day::Monday]["F1"], 1);
        assert_eq!(summary.by_day[&Day::Tuesday]["F2"], 4);
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 4);
        assert!((summary.average - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_gap_counting() {
        let mut grid = TimetableGrid::new(1);
        // Monday: 0 . 2 -> one gap per channel.
        lecture(&mut grid, Day::Monday, 0, "F1");
        lecture(&mut grid, Day::Monday, 2, "F1");
        // Tuesday: 2 [lunch] 4 -> lunch is skipped, no gap.
        lecture(&mut grid, Day::Tuesday, 2, "F2");
        lecture(&mut grid, Day::Tuesday, 4, "F2");
        // Wednesday: 1 . . 5 . 7 -> two gaps per channel.
        lecture(&mut grid, Day::Wednesday, 1, "F3");
        lecture(&mut grid, Day::Wednesday, 5, "F3");
        lecture(&mut grid, Day::Wednesday, 7, "F4");

        let gaps = TimetableAnalysis::analyze(&grid, &GeneratorConfig::default()).gap_analysis;
        assert_eq!(gaps.by_day[&Day::Monday][&Channel::WholeClass], 1);
        assert_eq!(gaps.by_day[&Day::Monday][&Channel::Batch(1)], 1);
        assert_eq!(gaps.by_day[&Day::Tuesday][&Channel::WholeClass], 0);
        assert_eq!(gaps.by_day[&Day::Wednesday][&Channel::WholeClass], 2);
        assert_eq!(gaps.total_gaps, 6);
    }

    #[test]
    fn test_gap_suggestion() {
        let mut grid = TimetableGrid::new(1);
        lecture(&mut grid, Day::Monday, 0, "F1");
        lecture(&mut grid, Day::Monday, 2, "F1");

        let analysis = TimetableAnalysis::analyze(&grid, &GeneratorConfig::default());
        assert_eq!(analysis.suggestions.len(), 1);
        assert!(analysis.suggestions[0].starts_with("There are 2 gaps in the timetable."));
    }

    #[test]
    fn test_imbalance_suggestion() {
        let mut grid = TimetableGrid::new(1);
        for day in [Day::Monday, Day::Tuesday] {
            for slot in 0..3 {
                lecture(&mut grid, day, slot, "F1");
            }
        }
        lecture(&mut grid, Day::Wednesday, 0, "F2");
        lecture(&mut grid, Day::Thursday, 0, "F3");
        lecture(&mut grid, Day::Thursday, 1, "F3");

        let analysis = TimetableAnalysis::analyze(&grid, &GeneratorConfig::default());
        // Loads 6, 1, 2: mean 3, spread 5.
        assert_eq!(analysis.faculty_workload.max, 6);
        assert_eq!(analysis.faculty_workload.min, 1);
        assert_eq!(
            analysis.suggestions,
            vec!["Consider redistributing classes from F1 to F2 for more balanced workload."
                .to_string()]
        );
    }

    #[test]
    fn test_imbalance_needs_both_sides() {
        let mut grid = TimetableGrid::new(1);
        // Loads 5, 1, 1, 1: mean 2, only F1 is outside the margin.
        for slot in [0, 1, 2, 4, 5] {
            lecture(&mut grid, Day::Monday, slot, "F1");
        }
        lecture(&mut grid, Day::Tuesday, 0, "F2");
        lecture(&mut grid, Day::Wednesday, 0, "F3");
        lecture(&mut grid, Day::Thursday, 0, "F4");

        let analysis = TimetableAnalysis::analyze(&grid, &GeneratorConfig::default());
        assert_eq!(analysis.suggestions, vec![WELL_BALANCED.to_string()]);
    }

    #[test]
    fn test_average_is_rounded() {
        let mut grid = TimetableGrid::new(1);
        lecture(&mut grid, Day::Monday, 0, "F1");
        lecture(&mut grid, Day::Monday, 1, "F1");
        lecture(&mut grid, Day::Tuesday, 0, "F2");
        lecture(&mut grid, Day::Wednesday, 0, "F3");

        let summary = TimetableAnalysis::analyze(&grid, &GeneratorConfig::default()).faculty_workload;
        // 4 / 3 = 1.333...
        assert!((summary.average - 1.3).abs() < 1e-10);
    }

    #[test]
    fn test_analyze_is_pure() {
        let mut grid = TimetableGrid::new(2);
        lecture(&mut grid, Day::Monday, 0, "F1");
        lecture(&mut grid, Day::Monday, 5, "F2");
        let before = grid.clone();
        let config = GeneratorConfig::default();

        let first = TimetableAnalysis::analyze(&grid, &config);
        let second = TimetableAnalysis::analyze(&grid, &config);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_serialized_keys() {
        let grid = TimetableGrid::new(1);
        let value =
            serde_json::to_value(TimetableAnalysis::analyze(&grid, &GeneratorConfig::default()))
                .unwrap();
        assert!(value["faculty_workload"]["by_day"]["Monday"].is_object());
        assert_eq!(value["gap_analysis"]["by_day"]["Friday"]["batch_1"], 0);
        assert_eq!(value["gap_analysis"]["total_gaps"], 0);
    }
}
