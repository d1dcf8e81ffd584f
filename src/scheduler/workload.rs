//! Faculty workload tracking.
//!
//! Per-day theory and lab hour counters for each faculty member. The caps
//! are advisory: the scheduler consults [`FacultyWorkload::can_take_theory`]
//! and [`FacultyWorkload::can_take_lab`] before placing, and the `record_*`
//! methods never reject.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::config::GeneratorConfig;
use crate::models::{Day, DAY_COUNT};

/// Theory and lab hours per day per faculty for one generation run.
#[derive(Debug, Clone)]
pub struct FacultyWorkload {
    theory: [HashMap<String, u32>; DAY_COUNT],
    lab: [HashMap<String, u32>; DAY_COUNT],
    max_theory_per_day: u32,
    max_lab_per_day: u32,
}

impl FacultyWorkload {
    /// Creates an empty tracker with the default caps (2 theory, 4 lab).
    pub fn new() -> Self {
        Self::with_config(&GeneratorConfig::default())
    }

    /// Creates an empty tracker with the caps from `config`.
    pub fn with_config(config: &GeneratorConfig) -> Self {
        Self {
            theory: Default::default(),
            lab: Default::default(),
            max_theory_per_day: config.max_theory_hours_per_day,
            max_lab_per_day: config.max_lab_hours_per_day,
        }
    }

    /// Theory hours of `faculty` on `day`.
    pub fn theory_hours(&self, day: Day, faculty: &str) -> u32 {
        self.theory[day.index()].get(faculty).copied().unwrap_or(0)
    }

    /// Lab hours of `faculty` on `day`.
    pub fn lab_hours(&self, day: Day, faculty: &str) -> u32 {
        self.lab[day.index()].get(faculty).copied().unwrap_or(0)
    }

    /// Whether `faculty` is below the theory cap on `day`.
    #[inline]
    pub fn can_take_theory(&self, day: Day, faculty: &str) -> bool {
        self.theory_hours(day, faculty) < self.max_theory_per_day
    }

    /// Whether `faculty` is below the lab cap on `day`.
    #[inline]
    pub fn can_take_lab(&self, day: Day, faculty: &str) -> bool {
        self.lab_hours(day, faculty) < self.max_lab_per_day
    }

    /// Theory plus lab hours across the week.
    pub fn total_workload(&self, faculty: &str) -> u32 {
        Day::ALL
            .iter()
            .map(|&day| self.theory_hours(day, faculty) + self.lab_hours(day, faculty))
            .sum()
    }

    /// The eligible faculty with the smallest weekly total.
    ///
    /// Ties go to the earliest entry in `eligible`. Returns `None` only when
    /// `eligible` is empty.
    pub fn least_loaded<'a>(&self, eligible: &'a [String]) -> Option<&'a str> {
        let mut best: Option<(&'a str, u32)> = None;
        for faculty in eligible {
            let load = self.total_workload(faculty);
            match best {
                Some((_, best_load)) if load >= best_load => {}
                _ => best = Some((faculty.as_str(), load)),
            }
        }
        best.map(|(faculty, _)| faculty)
    }

    /// [`least_loaded`](Self::least_loaded), falling back to a random pick.
    pub fn pick_faculty<'a, R: Rng>(&self, eligible: &'a [String], rng: &mut R) -> Option<&'a str> {
        self.least_loaded(eligible)
            .or_else(|| eligible.choose(rng).map(String::as_str))
    }

    /// Adds one theory hour.
    pub fn record_theory(&mut self, day: Day, faculty: &str) {
        *self.theory[day.index()]
            .entry(faculty.to_string())
            .or_insert(0) += 1;
    }

    /// Adds `hours` lab hours.
    pub fn record_lab(&mut self, day: Day, faculty: &str, hours: u32) {
        *self.lab[day.index()].entry(faculty.to_string()).or_insert(0) += hours;
    }
}

impl Default for FacultyWorkload {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_to_zero() {
        let w = FacultyWorkload::new();
        assert_eq!(w.theory_hours(Day::Monday, "F1"), 0);
        assert_eq!(w.lab_hours(Day::Monday, "F1"), 0);
        assert_eq!(w.total_workload("F1"), 0);
    }

    #[test]
    fn test_theory_cap() {
        let mut w = FacultyWorkload::new();
        assert!(w.can_take_theory(Day::Monday, "F1"));
        w.record_theory(Day::Monday, "F1");
        assert!(w.can_take_theory(Day::Monday, "F1"));
        w.record_theory(Day::Monday, "F1");
        assert!(!w.can_take_theory(Day::Monday, "F1"));
        // Other days are independent.
        assert!(w.can_take_theory(Day::Tuesday, "F1"));
    }

    #[test]
    fn test_lab_cap() {
        let mut w = FacultyWorkload::new();
        w.record_lab(Day::Friday, "F2", 2);
        assert!(w.can_take_lab(Day::Friday, "F2"));
        w.record_lab(Day::Friday, "F2", 2);
        assert!(!w.can_take_lab(Day::Friday, "F2"));
        assert_eq!(w.lab_hours(Day::Friday, "F2"), 4);
    }

    #[test]
    fn test_custom_caps() {
        let config = GeneratorConfig::default().with_max_theory_hours(1);
        let mut w = FacultyWorkload::with_config(&config);
        w.record_theory(Day::Monday, "F1");
        assert!(!w.can_take_theory(Day::Monday, "F1"));
    }

    #[test]
    fn test_total_workload_spans_days_and_kinds() {
        let mut w = FacultyWorkload::new();
        w.record_theory(Day::Monday, "F1");
        w.record_theory(Day::Wednesday, "F1");
        w.record_lab(Day::Thursday, "F1", 2);
        assert_eq!(w.total_workload("F1"), 4);
    }

    #[test]
    fn test_least_loaded() {
        let mut w = FacultyWorkload::new();
        let eligible = names(&["F1", "F2", "F3"]);

        // All zero: first entry wins.
        assert_eq!(w.least_loaded(&eligible), Some("F1"));

        w.record_theory(Day::Monday, "F1");
        assert_eq!(w.least_loaded(&eligible), Some("F2"));

        w.record_lab(Day::Monday, "F2", 2);
        w.record_theory(Day::Monday, "F3");
        // F1 and F3 tie at 1; F1 comes first.
        assert_eq!(w.least_loaded(&eligible), Some("F1"));
    }

    #[test]
    fn test_least_loaded_empty() {
        let w = FacultyWorkload::new();
        assert_eq!(w.least_loaded(&[]), None);
    }

    #[test]
    fn test_pick_faculty() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(3);
        let mut w = FacultyWorkload::new();
        w.record_theory(Day::Monday, "F1");
        let eligible = names(&["F1", "F2"]);

        assert_eq!(w.pick_faculty(&eligible, &mut rng), Some("F2"));
        assert_eq!(w.pick_faculty(&[], &mut rng), None);
    }
}
