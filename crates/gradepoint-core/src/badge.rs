//! CGPA badge classification.
//!
//! A purely presentational bucketing of the computed CGPA, kept in the core
//! because it is a pure function of that value. Thresholds are inclusive
//! lower bounds checked in descending order; the zero and out-of-range
//! checks come first.

use serde::Serialize;
use std::fmt;

/// The badge shown next to a CGPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CgpaBadge {
    /// No graded credits yet.
    Rocket,
    /// CGPA outside the 10-point scale.
    Confused,
    Trophy,
    Cool,
    Smile,
    SlightSmile,
    Neutral,
    Sad,
}

impl CgpaBadge {
    /// Classify a CGPA.
    pub fn for_cgpa(cgpa: f64) -> Self {
        if cgpa == 0.0 {
            CgpaBadge::Rocket
        } else if !(0.0..=10.0).contains(&cgpa) {
            CgpaBadge::Confused
        } else if cgpa >= 9.0 {
            CgpaBadge::Trophy
        } else if cgpa >= 8.0 {
            CgpaBadge::Cool
        } else if cgpa >= 7.0 {
            CgpaBadge::Smile
        } else if cgpa >= 6.0 {
            CgpaBadge::SlightSmile
        } else if cgpa >= 5.0 {
            CgpaBadge::Neutral
        } else {
            CgpaBadge::Sad
        }
    }

    /// The emoji for this badge.
    pub fn symbol(&self) -> &'static str {
        match self {
            CgpaBadge::Rocket => "\u{1F680}",
            CgpaBadge::Confused => "\u{2049}\u{FE0F}",
            CgpaBadge::Trophy => "\u{1F3C6}",
            CgpaBadge::Cool => "\u{1F60E}",
            CgpaBadge::Smile => "\u{1F60A}",
            CgpaBadge::SlightSmile => "\u{1F642}",
            CgpaBadge::Neutral => "\u{1F610}",
            CgpaBadge::Sad => "\u{1F61F}",
        }
    }
}

impl fmt::Display for CgpaBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
