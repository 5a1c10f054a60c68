//! The gradebook: semesters, courses, and their mutation surface.
//!
//! A `GradeBook` is created empty, lives for one interactive session, and is
//! exclusively owned by its caller. Every mutation is a synchronous, atomic
//! update; SGPA and CGPA are computed on read, so they are never stale.

use serde::Serialize;

use crate::aggregate::weighted_average;
use crate::badge::CgpaBadge;
use crate::error::GradeBookError;
use crate::mapping::GradeMapping;
use crate::model::{Course, CourseField, Grade, GradeMode, Semester};

/// The root of the grade model.
#[derive(Debug, Clone, Default)]
pub struct GradeBook {
    semesters: Vec<Semester>,
    mode: GradeMode,
    mapping: GradeMapping,
}

impl GradeBook {
    /// An empty gradebook in numerical mode with the default scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// A gradebook starting in `mode` with the given scale.
    pub fn with_settings(mode: GradeMode, mapping: GradeMapping) -> Self {
        GradeBook {
            semesters: Vec::new(),
            mode,
            mapping,
        }
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn mode(&self) -> GradeMode {
        self.mode
    }

    pub fn mapping(&self) -> &GradeMapping {
        &self.mapping
    }

    /// Append a new semester seeded with a single blank "Course 1".
    pub fn add_semester(&mut self) {
        let course = Course::seeded(1, self.mode);
        self.semesters.push(Semester {
            courses: vec![course],
        });
        tracing::debug!(semesters = self.semesters.len(), "added semester");
    }

    /// Append a course to `semester`, named after its position ("Course 3"
    /// when two courses already exist). Names are per-semester, not global.
    pub fn add_course(&mut self, semester: usize) -> Result<(), GradeBookError> {
        let mode = self.mode;
        let sem = self.semester_mut(semester)?;
        let course = Course::seeded(sem.courses.len() + 1, mode);
        sem.courses.push(course);
        Ok(())
    }

    /// Remove the course at `course` from `semester`, then renumber the
    /// remaining courses "Course 1".."Course k" in positional order. Custom
    /// names are overwritten; this mirrors the original calculator.
    pub fn remove_course(&mut self, semester: usize, course: usize) -> Result<(), GradeBookError> {
        let sem = self.semester_mut(semester)?;
        if course >= sem.courses.len() {
            return Err(GradeBookError::CourseOutOfRange {
                semester,
                index: course,
                len: sem.courses.len(),
            });
        }
        sem.courses.remove(course);
        for (i, c) in sem.courses.iter_mut().enumerate() {
            c.name = format!("Course {}", i + 1);
        }
        Ok(())
    }

    /// Update exactly one field of one course. `value` is the raw user input:
    /// credits and numerical grades coerce with a zero fallback, letter
    /// grades are stored verbatim.
    pub fn edit_course(
        &mut self,
        semester: usize,
        course: usize,
        field: CourseField,
        value: &str,
    ) -> Result<(), GradeBookError> {
        let mode = self.mode;
        let sem = self.semester_mut(semester)?;
        let len = sem.courses.len();
        let target = sem
            .courses
            .get_mut(course)
            .ok_or(GradeBookError::CourseOutOfRange {
                semester,
                index: course,
                len,
            })?;

        match field {
            CourseField::Name => target.name = value.to_string(),
            CourseField::Credits => target.credits = coerce_number(value),
            CourseField::Grade => {
                target.grade = match mode {
                    GradeMode::Numerical => Grade::Points(coerce_number(value)),
                    GradeMode::Letter => Grade::Letter(value.to_string()),
                };
            }
        }
        Ok(())
    }

    /// Switch grading modes. Stored grades are deliberately not converted:
    /// existing values are simply reinterpreted on the next computation,
    /// which resolves now-incompatible ones to zero points.
    pub fn set_mode(&mut self, mode: GradeMode) {
        if self.mode != mode {
            tracing::debug!(%mode, "switched grade mode");
        }
        self.mode = mode;
    }

    /// Update one letter's point value in the scale. Takes effect for every
    /// subsequent computation; grades store the label, never the points.
    pub fn set_mapping_value(&mut self, letter: &str, value: f64) -> Result<(), GradeBookError> {
        self.mapping.set(letter, value)
    }

    /// SGPA of one semester under the current mode and scale.
    pub fn sgpa(&self, semester: usize) -> Result<f64, GradeBookError> {
        let sem = self
            .semesters
            .get(semester)
            .ok_or(GradeBookError::SemesterOutOfRange {
                index: semester,
                len: self.semesters.len(),
            })?;
        Ok(weighted_average(&sem.courses, self.mode, &self.mapping))
    }

    /// CGPA over every course in every semester. Credits weight uniformly
    /// across the whole history; this is not an average of SGPAs.
    pub fn cgpa(&self) -> f64 {
        let all = self.semesters.iter().flat_map(|s| &s.courses);
        weighted_average(all, self.mode, &self.mapping)
    }

    /// A serializable snapshot of everything the presentation layer renders.
    pub fn summary(&self) -> GradeBookSummary {
        let cgpa = self.cgpa();
        GradeBookSummary {
            mode: self.mode,
            semesters: self
                .semesters
                .iter()
                .map(|sem| SemesterSummary {
                    courses: sem.courses.clone(),
                    sgpa: weighted_average(&sem.courses, self.mode, &self.mapping),
                })
                .collect(),
            cgpa,
            badge: CgpaBadge::for_cgpa(cgpa),
        }
    }

    fn semester_mut(&mut self, index: usize) -> Result<&mut Semester, GradeBookError> {
        let len = self.semesters.len();
        self.semesters
            .get_mut(index)
            .ok_or(GradeBookError::SemesterOutOfRange { index, len })
    }
}

/// Point-in-time view of a gradebook, with derived averages filled in.
#[derive(Debug, Clone, Serialize)]
pub struct GradeBookSummary {
    pub mode: GradeMode,
    pub semesters: Vec<SemesterSummary>,
    pub cgpa: f64,
    pub badge: CgpaBadge,
}

/// One semester with its derived SGPA.
#[derive(Debug, Clone, Serialize)]
pub struct SemesterSummary {
    pub courses: Vec<Course>,
    pub sgpa: f64,
}

fn coerce_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_semester(book: &mut GradeBook, grades: &[(f64, f64)]) -> usize {
        book.add_semester();
        let idx = book.semesters().len() - 1;
        for (i, (credits, points)) in grades.iter().enumerate() {
            if i > 0 {
                book.add_course(idx).unwrap();
            }
            book.edit_course(idx, i, CourseField::Credits, &credits.to_string())
                .unwrap();
            book.edit_course(idx, i, CourseField::Grade, &points.to_string())
                .unwrap();
        }
        idx
    }

    #[test]
    fn empty_gradebook() {
        let book = GradeBook::new();
        assert!(book.semesters().is_empty());
        assert_eq!(book.mode(), GradeMode::Numerical);
        assert_eq!(book.cgpa(), 0.0);
        assert_eq!(book.summary().badge, CgpaBadge::Rocket);
    }

    #[test]
    fn new_semester_is_seeded() {
        let mut book = GradeBook::new();
        book.add_semester();
        let sem = &book.semesters()[0];
        assert_eq!(sem.courses.len(), 1);
        assert_eq!(sem.courses[0].name, "Course 1");
        assert_eq!(sem.courses[0].credits, 0.0);
        assert_eq!(sem.courses[0].grade, Grade::Points(0.0));
        assert_eq!(book.sgpa(0).unwrap(), 0.0);
    }

    #[test]
    fn new_semester_seeds_letter_grade_in_letter_mode() {
        let mut book = GradeBook::new();
        book.set_mode(GradeMode::Letter);
        book.add_semester();
        assert_eq!(
            book.semesters()[0].courses[0].grade,
            Grade::Letter(String::new())
        );
    }

    #[test]
    fn sgpa_weighted_by_credits() {
        let mut book = GradeBook::new();
        let idx = filled_semester(&mut book, &[(4.0, 8.0), (3.0, 9.0)]);
        let sgpa = book.sgpa(idx).unwrap();
        assert!((sgpa - 59.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn cgpa_flattens_across_semesters() {
        let mut book = GradeBook::new();
        // First semester: 10 credits, 80 points. Second: 10 credits, 90.
        filled_semester(&mut book, &[(10.0, 8.0)]);
        filled_semester(&mut book, &[(10.0, 9.0)]);
        assert!((book.cgpa() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn added_courses_number_sequentially() {
        let mut book = GradeBook::new();
        book.add_semester();
        book.add_course(0).unwrap();
        book.add_course(0).unwrap();
        let names: Vec<&str> = book.semesters()[0]
            .courses
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Course 1", "Course 2", "Course 3"]);
    }

    #[test]
    fn course_names_reset_per_semester() {
        let mut book = GradeBook::new();
        book.add_semester();
        book.add_course(0).unwrap();
        book.add_semester();
        assert_eq!(book.semesters()[1].courses[0].name, "Course 1");
    }

    #[test]
    fn remove_course_renumbers() {
        let mut book = GradeBook::new();
        book.add_semester();
        book.add_course(0).unwrap();
        book.add_course(0).unwrap();
        book.edit_course(0, 1, CourseField::Name, "Compilers").unwrap();

        book.remove_course(0, 0).unwrap();
        let names: Vec<&str> = book.semesters()[0]
            .courses
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        // The custom name is overwritten by renumbering.
        assert_eq!(names, ["Course 1", "Course 2"]);
    }

    #[test]
    fn remove_last_course_leaves_empty_semester() {
        let mut book = GradeBook::new();
        book.add_semester();
        book.remove_course(0, 0).unwrap();
        assert!(book.semesters()[0].courses.is_empty());
        assert_eq!(book.sgpa(0).unwrap(), 0.0);
    }

    #[test]
    fn edit_course_coercion() {
        let mut book = GradeBook::new();
        book.add_semester();
        book.edit_course(0, 0, CourseField::Credits, "4").unwrap();
        assert_eq!(book.semesters()[0].courses[0].credits, 4.0);

        book.edit_course(0, 0, CourseField::Credits, "four").unwrap();
        assert_eq!(book.semesters()[0].courses[0].credits, 0.0);

        book.edit_course(0, 0, CourseField::Grade, "8.5").unwrap();
        assert_eq!(book.semesters()[0].courses[0].grade, Grade::Points(8.5));

        book.edit_course(0, 0, CourseField::Grade, "good").unwrap();
        assert_eq!(book.semesters()[0].courses[0].grade, Grade::Points(0.0));
    }

    #[test]
    fn edit_grade_in_letter_mode_stores_label() {
        let mut book = GradeBook::new();
        book.set_mode(GradeMode::Letter);
        book.add_semester();
        book.edit_course(0, 0, CourseField::Credits, "5").unwrap();
        book.edit_course(0, 0, CourseField::Grade, "A+").unwrap();
        assert_eq!(
            book.semesters()[0].courses[0].grade,
            Grade::Letter("A+".into())
        );
        assert!((book.sgpa(0).unwrap() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mode_switch_does_not_convert_grades() {
        let mut book = GradeBook::new();
        let idx = filled_semester(&mut book, &[(4.0, 8.0)]);
        assert!(book.sgpa(idx).unwrap() > 0.0);

        // The stored 8.0 is not a letter key, so it now contributes nothing.
        book.set_mode(GradeMode::Letter);
        assert_eq!(book.sgpa(idx).unwrap(), 0.0);

        // And switching back restores the original interpretation.
        book.set_mode(GradeMode::Numerical);
        assert!((book.sgpa(idx).unwrap() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mapping_edits_apply_to_existing_courses() {
        let mut book = GradeBook::new();
        book.set_mode(GradeMode::Letter);
        book.add_semester();
        book.edit_course(0, 0, CourseField::Credits, "3").unwrap();
        book.edit_course(0, 0, CourseField::Grade, "B").unwrap();
        assert!((book.sgpa(0).unwrap() - 6.0).abs() < f64::EPSILON);

        book.set_mapping_value("B", 6.5).unwrap();
        assert!((book.sgpa(0).unwrap() - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_indices_error() {
        let mut book = GradeBook::new();
        assert!(matches!(
            book.add_course(0),
            Err(GradeBookError::SemesterOutOfRange { index: 0, len: 0 })
        ));

        book.add_semester();
        assert!(matches!(
            book.remove_course(0, 5),
            Err(GradeBookError::CourseOutOfRange { index: 5, .. })
        ));
        assert!(book.sgpa(3).is_err());
        assert!(matches!(
            book.set_mapping_value("Z", 1.0),
            Err(GradeBookError::UnknownLetter(_))
        ));
    }

    #[test]
    fn summary_snapshot() {
        let mut book = GradeBook::new();
        filled_semester(&mut book, &[(4.0, 8.0), (3.0, 9.0)]);
        let summary = book.summary();
        assert_eq!(summary.semesters.len(), 1);
        assert!((summary.semesters[0].sgpa - 59.0 / 7.0).abs() < 1e-9);
        assert_eq!(summary.cgpa, summary.semesters[0].sgpa);
        assert_eq!(summary.badge, CgpaBadge::Cool);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"cgpa\""));
        assert!(json.contains("Course 1"));
    }
}
