//! Core data model types for gradepoint.
//!
//! These are the fundamental types the entire gradepoint system uses to
//! represent courses, semesters, and the active grading mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How entered grades are interpreted when computing averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeMode {
    /// Grades are plain point values (e.g. 8.5).
    #[default]
    Numerical,
    /// Grades are letter labels resolved through the active scale.
    Letter,
}

impl fmt::Display for GradeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeMode::Numerical => write!(f, "numerical"),
            GradeMode::Letter => write!(f, "letter"),
        }
    }
}

impl FromStr for GradeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numerical" | "numeric" => Ok(GradeMode::Numerical),
            "letter" => Ok(GradeMode::Letter),
            other => Err(format!("unknown grade mode: {other}")),
        }
    }
}

/// A stored grade. The variant reflects the mode that was active when the
/// grade was entered; switching modes never converts stored values, so a
/// course read under the other mode resolves to zero points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    Points(f64),
    Letter(String),
}

/// A single course: a name, a credit weight, and a grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Display name (e.g. "Course 1"). Auto-assigned on add, renumbered on
    /// remove, freely editable in between.
    pub name: String,
    /// Credit weight. The core accepts any value; it only guards the
    /// zero-total-credits division.
    pub credits: f64,
    /// The stored grade, mode-dependent at entry time.
    pub grade: Grade,
}

impl Course {
    /// A freshly added course: zero credits and an unset grade for `mode`.
    pub fn seeded(number: usize, mode: GradeMode) -> Self {
        Course {
            name: format!("Course {number}"),
            credits: 0.0,
            grade: match mode {
                GradeMode::Numerical => Grade::Points(0.0),
                GradeMode::Letter => Grade::Letter(String::new()),
            },
        }
    }
}

/// An ordered run of courses. SGPA is computed from the courses plus the
/// gradebook's current mode and scale, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub courses: Vec<Course>,
}

/// The editable fields of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Name,
    Credits,
    Grade,
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseField::Name => write!(f, "name"),
            CourseField::Credits => write!(f, "credits"),
            CourseField::Grade => write!(f, "grade"),
        }
    }
}

impl FromStr for CourseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(CourseField::Name),
            "credits" => Ok(CourseField::Credits),
            "grade" => Ok(CourseField::Grade),
            other => Err(format!("unknown course field: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_mode_display_and_parse() {
        assert_eq!(GradeMode::Numerical.to_string(), "numerical");
        assert_eq!(GradeMode::Letter.to_string(), "letter");
        assert_eq!(
            "numerical".parse::<GradeMode>().unwrap(),
            GradeMode::Numerical
        );
        assert_eq!("Letter".parse::<GradeMode>().unwrap(), GradeMode::Letter);
        assert_eq!("numeric".parse::<GradeMode>().unwrap(), GradeMode::Numerical);
        assert!("percentage".parse::<GradeMode>().is_err());
    }

    #[test]
    fn course_field_parse() {
        assert_eq!("name".parse::<CourseField>().unwrap(), CourseField::Name);
        assert_eq!(
            "Credits".parse::<CourseField>().unwrap(),
            CourseField::Credits
        );
        assert_eq!("grade".parse::<CourseField>().unwrap(), CourseField::Grade);
        assert!("sgpa".parse::<CourseField>().is_err());
    }

    #[test]
    fn seeded_course_per_mode() {
        let numeric = Course::seeded(1, GradeMode::Numerical);
        assert_eq!(numeric.name, "Course 1");
        assert_eq!(numeric.credits, 0.0);
        assert_eq!(numeric.grade, Grade::Points(0.0));

        let letter = Course::seeded(3, GradeMode::Letter);
        assert_eq!(letter.name, "Course 3");
        assert_eq!(letter.grade, Grade::Letter(String::new()));
    }

    #[test]
    fn course_serde_roundtrip() {
        let course = Course {
            name: "Course 2".into(),
            credits: 4.0,
            grade: Grade::Letter("A+".into()),
        };
        let json = serde_json::to_string(&course).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }
}
