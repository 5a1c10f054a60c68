//! Gradebook error types.
//!
//! Only index and label misuse surfaces as an error. Grade resolution never
//! fails: an unmapped letter or a non-numeric value contributes zero points,
//! and a zero-credit semester averages to zero.

use thiserror::Error;

/// Errors that can occur when mutating a gradebook.
#[derive(Debug, Error)]
pub enum GradeBookError {
    /// The semester index does not name an existing semester.
    #[error("semester index {index} out of range (have {len})")]
    SemesterOutOfRange { index: usize, len: usize },

    /// The course index does not name an existing course in that semester.
    #[error("course index {index} out of range in semester {semester} (have {len})")]
    CourseOutOfRange {
        semester: usize,
        index: usize,
        len: usize,
    },

    /// The letter label is not part of the scale (the label set is fixed).
    #[error("unknown letter grade: {0:?}")]
    UnknownLetter(String),
}
