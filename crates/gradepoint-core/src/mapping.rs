//! The letter-grade scale.
//!
//! A fixed set of letter labels, each with a user-editable point value.
//! Labels cannot be added or removed; only their values change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GradeBookError;

/// The letter labels the scale knows about, in display order.
pub const GRADE_LETTERS: [&str; 6] = ["O", "A+", "A", "B+", "B", "C"];

/// Letter label → point value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeMapping {
    points: HashMap<String, f64>,
}

impl Default for GradeMapping {
    /// The standard 10-point scale: O=10, A+=9, A=8, B+=7, B=6, C=5.
    fn default() -> Self {
        let points = GRADE_LETTERS
            .iter()
            .zip([10.0, 9.0, 8.0, 7.0, 6.0, 5.0])
            .map(|(letter, value)| (letter.to_string(), value))
            .collect();
        GradeMapping { points }
    }
}

impl GradeMapping {
    /// Point value for `letter`, or `None` if the label is not in the scale.
    /// Lookups are live: a value edited via [`GradeMapping::set`] is seen by
    /// the very next computation.
    pub fn points(&self, letter: &str) -> Option<f64> {
        self.points.get(letter).copied()
    }

    /// Update one label's point value. The label set is fixed, so an unknown
    /// label is an error rather than an insert.
    pub fn set(&mut self, letter: &str, value: f64) -> Result<(), GradeBookError> {
        match self.points.get_mut(letter) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GradeBookError::UnknownLetter(letter.to_string())),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        GRADE_LETTERS
            .iter()
            .map(|&letter| (letter, self.points[letter]))
    }
}
