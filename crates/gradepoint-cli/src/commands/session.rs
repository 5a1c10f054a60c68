//! The `gradepoint session` command.
//!
//! An interactive line-oriented session over stdin. Every command forwards to
//! a `GradeBook` mutation or read accessor; this module owns no computation.
//! Indices at the prompt are 1-based.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradepoint_core::gradebook::GradeBook;
use gradepoint_core::model::{CourseField, Grade, GradeMode};

pub fn execute(config: Option<PathBuf>) -> Result<()> {
    let book = super::gradebook_from(config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(book, stdin.lock(), stdout.lock())
}

/// Drive a session from `input` to `out`. Split out from `execute` so tests
/// can script a session through any reader/writer pair.
pub fn run_session<R: BufRead, W: Write>(mut book: GradeBook, input: R, mut out: W) -> Result<()> {
    writeln!(out, "gradepoint session ({} mode). Type 'help' for commands.", book.mode())?;

    for line in input.lines() {
        let line = line?;
        if !dispatch(&mut book, line.trim(), &mut out)? {
            break;
        }
    }

    Ok(())
}

/// Handle one input line. Returns `false` when the session should end.
/// Command mistakes are printed and never abort the loop.
fn dispatch<W: Write>(book: &mut GradeBook, line: &str, out: &mut W) -> Result<bool> {
    if line.is_empty() {
        return Ok(true);
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default().trim();

    match verb {
        "quit" | "exit" => return Ok(false),
        "help" => print_help(out)?,
        "show" => render(book, out)?,
        "json" => writeln!(out, "{}", serde_json::to_string_pretty(&book.summary())?)?,
        "semester" => {
            book.add_semester();
            writeln!(out, "Added semester {}.", book.semesters().len())?;
        }
        "mode" => match rest.parse::<GradeMode>() {
            Ok(mode) => {
                book.set_mode(mode);
                writeln!(out, "Grade mode is now {mode}.")?;
            }
            Err(e) => writeln!(out, "{e}")?,
        },
        "course" => match parse_indices::<1>(rest) {
            Ok([s]) => match book.add_course(s) {
                Ok(()) => writeln!(out, "Added a course to semester {}.", s + 1)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Err(e) => writeln!(out, "usage: course <semester> ({e})")?,
        },
        "remove" => match parse_indices::<2>(rest) {
            Ok([s, c]) => match book.remove_course(s, c) {
                Ok(()) => writeln!(out, "Removed course {} from semester {}.", c + 1, s + 1)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Err(e) => writeln!(out, "usage: remove <semester> <course> ({e})")?,
        },
        "edit" => match parse_edit(rest) {
            Ok((s, c, field, value)) => match book.edit_course(s, c, field, value) {
                Ok(()) => writeln!(out, "Updated {field} on semester {} course {}.", s + 1, c + 1)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Err(e) => writeln!(out, "usage: edit <semester> <course> <name|credits|grade> <value> ({e})")?,
        },
        "map" => match parse_map(rest) {
            Ok((letter, value)) => match book.set_mapping_value(letter, value) {
                Ok(()) => writeln!(out, "{letter} now maps to {value} points.")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Err(e) => writeln!(out, "usage: map <letter> <value> ({e})")?,
        },
        other => writeln!(out, "Unknown command: {other}. Type 'help' for commands.")?,
    }

    Ok(true)
}

/// Parse exactly `N` 1-based indices into 0-based ones.
fn parse_indices<const N: usize>(args: &str) -> std::result::Result<[usize; N], String> {
    let mut out = [0usize; N];
    let mut parts = args.split_whitespace();
    for slot in &mut out {
        let raw = parts.next().ok_or_else(|| "missing index".to_string())?;
        let n: usize = raw
            .parse()
            .map_err(|_| format!("not a number: {raw}"))?;
        if n == 0 {
            return Err("indices start at 1".to_string());
        }
        *slot = n - 1;
    }
    if parts.next().is_some() {
        return Err("too many arguments".to_string());
    }
    Ok(out)
}

fn parse_edit(args: &str) -> std::result::Result<(usize, usize, CourseField, &str), String> {
    let mut parts = args.splitn(4, char::is_whitespace);
    let indices = [parts.next(), parts.next()]
        .map(|p| p.unwrap_or_default())
        .join(" ");
    let [s, c] = parse_indices::<2>(&indices)?;
    let field: CourseField = parts
        .next()
        .ok_or_else(|| "missing field".to_string())?
        .parse()?;
    // The value is everything after the field, so names may contain spaces.
    let value = parts.next().unwrap_or_default().trim();
    Ok((s, c, field, value))
}

fn parse_map(args: &str) -> std::result::Result<(&str, f64), String> {
    let mut parts = args.split_whitespace();
    let letter = parts.next().ok_or_else(|| "missing letter".to_string())?;
    let raw = parts.next().ok_or_else(|| "missing value".to_string())?;
    let value: f64 = raw.parse().map_err(|_| format!("not a number: {raw}"))?;
    Ok((letter, value))
}

fn render<W: Write>(book: &GradeBook, out: &mut W) -> Result<()> {
    let summary = book.summary();

    if summary.semesters.is_empty() {
        writeln!(out, "No semesters yet. Type 'semester' to add one.")?;
    }

    for (i, semester) in summary.semesters.iter().enumerate() {
        let mut table = Table::new();
        table.set_header(vec!["Course", "Credits", "Grade"]);
        for course in &semester.courses {
            let grade = match &course.grade {
                Grade::Points(p) => format!("{p}"),
                Grade::Letter(l) => l.clone(),
            };
            table.add_row(vec![
                Cell::new(&course.name),
                Cell::new(format!("{}", course.credits)),
                Cell::new(grade),
            ]);
        }
        writeln!(out, "Semester {} (SGPA {:.2})", i + 1, semester.sgpa)?;
        writeln!(out, "{table}")?;
    }

    writeln!(out, "CGPA {:.2} {}", summary.cgpa, summary.badge)?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Commands:\n  \
         semester                                 add a semester\n  \
         course <s>                               add a course to semester s\n  \
         remove <s> <c>                           remove course c from semester s\n  \
         edit <s> <c> <name|credits|grade> <v>    edit one course field\n  \
         mode <numerical|letter>                  switch grading mode\n  \
         map <letter> <value>                     set a letter's point value\n  \
         show                                     render semesters and CGPA\n  \
         json                                     print the gradebook as JSON\n  \
         quit                                     end the session"
    )?;
    Ok(())
}
