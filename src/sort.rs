//! Deterministic, numeric-aware ordering of topics and files.

use std::cmp::Ordering;

use crate::types::Course;

/// Compare like a human reads directory listings: digit runs compare by
/// numeric value (`"2. Basics"` before `"10. Advanced"`), everything else
/// case-insensitively. Fully equal inputs fall back to a byte compare so the
/// order is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < a_chars.len() && j < b_chars.len() {
        let (ca, cb) = (a_chars[i], b_chars[j]);
        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let (ea, eb) = (digit_run_end(&a_chars, i), digit_run_end(&b_chars, j));
            match cmp_digit_runs(&a_chars[i..ea], &b_chars[j..eb]) {
                Ordering::Equal => {}
                ord => return ord,
            }
            i = ea;
            j = eb;
        } else {
            match ca.to_lowercase().cmp(cb.to_lowercase()) {
                Ordering::Equal => {}
                ord => return ord,
            }
            i += 1;
            j += 1;
        }
    }

    if i < a_chars.len() {
        Ordering::Greater
    } else if j < b_chars.len() {
        Ordering::Less
    } else {
        a.cmp(b)
    }
}

fn digit_run_end(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Compare two non-empty digit runs by numeric value: strip leading zeros,
/// then a longer run is larger, equal lengths compare lexically.
fn cmp_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(run: &[char]) -> &[char] {
    let first = run
        .iter()
        .position(|c| *c != '0')
        .unwrap_or(run.len().saturating_sub(1));
    &run[first..]
}

/// Sort topics within each course and files within each topic, in place.
/// Course order is left as discovered.
pub fn sort_catalog(courses: &mut [Course]) {
    for course in courses {
        course.topics.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        for topic in &mut course.topics {
            topic
                .files
                .sort_by(|a, b| natural_cmp(&a.file_name, &b.file_name));
        }
    }
}
