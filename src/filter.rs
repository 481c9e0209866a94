use std::collections::BTreeSet;

use crate::models::{FilterOptions, StudentFilter, StudentRecord};

/// Conjunction across active dimensions. An empty filter returns the
/// directory unchanged, order preserved.
pub fn apply_filter(students: &[StudentRecord], filter: &StudentFilter) -> Vec<StudentRecord> {
    students
        .iter()
        .filter(|student| matches(student, filter))
        .cloned()
        .collect()
}

pub fn matches(student: &StudentRecord, filter: &StudentFilter) -> bool {
    let dimension_ok = |selected: &Option<String>, value: &str| match selected {
        Some(wanted) => wanted == value,
        None => true,
    };

    dimension_ok(&filter.year, &student.year)
        && dimension_ok(&filter.department, &student.department)
        && dimension_ok(&filter.tech_stack, &student.tech_stack)
}

// Distinct sorted values per dimension, recomputed from the slice on
// every call: the lists must not outlive a snapshot change.
pub fn filter_options(students: &[StudentRecord]) -> FilterOptions {
    FilterOptions {
        years: distinct(students, |s| &s.year),
        departments: distinct(students, |s| &s.department),
        tech_stacks: distinct(students, |s| &s.tech_stack),
    }
}

fn distinct<F>(students: &[StudentRecord], pick: F) -> Vec<String>
where
    F: Fn(&StudentRecord) -> &str,
{
    students
        .iter()
        .map(|student| pick(student).to_string())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
