//! Credit-weighted grade aggregation.
//!
//! SGPA and CGPA are the same formula at different scopes: the sum of
//! `credits * points` over a set of courses, divided by the sum of credits.
//! SGPA scopes the formula to one semester; CGPA flattens every course in the
//! gradebook, so credits weight uniformly across the whole history rather
//! than averaging per-semester SGPAs.

use crate::mapping::GradeMapping;
use crate::model::{Course, Grade, GradeMode};

/// Resolve a course's stored grade to a point value under `mode`.
///
/// Resolution degrades silently rather than failing: a non-numeric value in
/// numerical mode, or a letter absent from the scale (including a stale
/// numeric grade read under letter mode), contributes zero points.
pub fn grade_points(course: &Course, mode: GradeMode, mapping: &GradeMapping) -> f64 {
    match (mode, &course.grade) {
        (GradeMode::Numerical, Grade::Points(p)) => *p,
        (GradeMode::Numerical, Grade::Letter(s)) => s.trim().parse().unwrap_or(0.0),
        (GradeMode::Letter, Grade::Letter(s)) => mapping.points(s).unwrap_or(0.0),
        // A numeric value is never a valid letter key.
        (GradeMode::Letter, Grade::Points(_)) => 0.0,
    }
}

/// Credit-weighted average over `courses`; `0.0` when total credits is zero.
pub fn weighted_average<'a, I>(courses: I, mode: GradeMode, mapping: &GradeMapping) -> f64
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut total_credits = 0.0;
    let mut total_points = 0.0;
    for course in courses {
        total_credits += course.credits;
        total_points += course.credits * grade_points(course, mode, mapping);
    }

    if total_credits > 0.0 {
        total_points / total_credits
    } else {
        0.0
    }
}
