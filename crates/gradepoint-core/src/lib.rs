//! gradepoint-core — Grade aggregation model and SGPA/CGPA math.
//!
//! This crate defines the gradebook data model, the letter-grade scale, and
//! the weighted-average scoring logic that the gradepoint CLI builds on.

pub mod aggregate;
pub mod badge;
pub mod config;
pub mod error;
pub mod gradebook;
pub mod mapping;
pub mod model;
