//! Lenient line parser for spherical coordinate input files.
//!
//! Input lines hold at least three fields (phi, theta, r) separated by `;`
//! or `,`. The parser is deliberately forgiving: bad lines are dropped with
//! a logged reason and processing continues, so a single stray row never
//! aborts a whole conversion run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use super::transforms::Spherical;

/// Errors that can occur while reading the input file.
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// The three coordinate fields, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Phi,
    Theta,
    Radius,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Phi => write!(f, "phi"),
            Field::Theta => write!(f, "theta"),
            Field::Radius => write!(f, "r"),
        }
    }
}

/// Why a line was dropped without touching the error counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line contains at least one alphabetic character.
    ContainsText,
    /// Fewer than three delimiter-separated fields.
    InsufficientData(usize),
    /// A coordinate field failed the numeric-looking check.
    NonNumeric { field: Field, value: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::ContainsText => write!(f, "contains text"),
            SkipReason::InsufficientData(n) => write!(f, "insufficient data ({} fields)", n),
            SkipReason::NonNumeric { field, value } => {
                write!(f, "{} is not a number - '{}'", field, value)
            }
        }
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// A validated coordinate triple.
    Triple(Spherical),
    /// Blank line, ignored silently.
    Blank,
    /// Line dropped for a recoverable reason (not counted as an error).
    Skipped(SkipReason),
    /// Float parsing failed after the lenient check let the field through.
    /// Counted as an error.
    Failed(String),
}

/// Checks whether a field looks numeric enough to attempt a float parse.
///
/// Every `.` and `-` character is removed; the remainder must be non-empty
/// and consist of ASCII digits only. This intentionally admits malformed
/// values such as `1.2.3` or `--5`, which are then caught by the real
/// float parse. Keep the two stages separate: collapsing them into a single
/// strict parse changes which lines are skipped and which are counted as
/// errors.
fn looks_numeric(field: &str) -> bool {
    let mut digits = 0usize;

    for c in field.chars() {
        if c == '.' || c == '-' {
            continue;
        }
        if !c.is_ascii_digit() {
            return false;
        }
        digits += 1;
    }

    digits > 0
}

/// Classify a single input line.
///
/// The rules, applied in order:
/// 1. A line that is empty after trimming is `Blank`.
/// 2. A line containing any alphabetic character is skipped as text.
/// 3. The line splits on `;` when one is present, otherwise on `,`.
/// 4. Fewer than three fields is a skip; extra fields are ignored.
/// 5. Each of the first three fields (phi, theta, r) must pass the
///    numeric-looking check, then parse as `f64`. Check failures are
///    skips; parse failures are errors.
///
/// # Arguments
///
/// * `line` - Raw input line, with or without trailing newline
///
/// # Returns
///
/// The `LineOutcome` classification. Never fails.
pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();

    if line.is_empty() {
        return LineOutcome::Blank;
    }

    if line.chars().any(|c| c.is_alphabetic()) {
        return LineOutcome::Skipped(SkipReason::ContainsText);
    }

    let parts: Vec<&str> = if line.contains(';') {
        line.split(';').collect()
    } else {
        line.split(',').collect()
    };

    if parts.len() < 3 {
        return LineOutcome::Skipped(SkipReason::InsufficientData(parts.len()));
    }

    let fields = [
        (Field::Phi, parts[0].trim()),
        (Field::Theta, parts[1].trim()),
        (Field::Radius, parts[2].trim()),
    ];

    for (field, value) in fields {
        if !looks_numeric(value) {
            return LineOutcome::Skipped(SkipReason::NonNumeric {
                field,
                value: value.to_string(),
            });
        }
    }

    let mut values = [0.0f64; 3];
    for (slot, (_, raw)) in values.iter_mut().zip(fields) {
        match raw.parse::<f64>() {
            Ok(v) => *slot = v,
            Err(e) => return LineOutcome::Failed(format!("{} - '{}'", e, raw)),
        }
    }

    LineOutcome::Triple(Spherical::new(values[0], values[1], values[2]))
}

/// Accumulated result of parsing a whole input stream.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Validated triples in input order.
    pub triples: Vec<Spherical>,
    /// Total lines read, including blank and dropped ones.
    pub lines_read: usize,
    /// Lines dropped for a recoverable reason (blank lines not included).
    pub skipped: usize,
    /// Lines whose fields failed the float parse.
    pub errors: usize,
}

/// Parse an entire input stream line by line.
///
/// Every skip and parse failure is logged through the `log` crate with its
/// 1-based line number; none of them stop the run.
///
/// # Arguments
///
/// * `reader` - Buffered reader over the input file
///
/// # Returns
///
/// A `ParseReport` with the surviving triples and per-line counters.
///
/// # Errors
///
/// Returns an error only when reading from the underlying stream fails.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParseReport> {
    let mut report = ParseReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;
        report.lines_read = line_num;

        match parse_line(&line) {
            LineOutcome::Triple(coord) => report.triples.push(coord),
            LineOutcome::Blank => {}
            LineOutcome::Skipped(reason) => {
                report.skipped += 1;
                warn!("Skipped line {}: {} - '{}'", line_num, reason, line.trim());
            }
            LineOutcome::Failed(message) => {
                report.errors += 1;
                warn!("Error in line {}: {}", line_num, message);
            }
        }
    }

    Ok(report)
}

/// Parse a spherical coordinate file from disk.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Errors
///
/// Returns `ParserError::MissingInput` when the file does not exist, or an
/// IO error when reading fails.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseReport> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ParserError::MissingInput(path.to_path_buf()));
    }

    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_looks_numeric_accepts_plain_values() {
        assert!(looks_numeric("42"));
        assert!(looks_numeric("12.5"));
        assert!(looks_numeric("-3.25"));
    }

    #[test]
    fn test_looks_numeric_is_deliberately_loose() {
        // Multiple dots and minus signs slip through the check
        assert!(looks_numeric("1.2.3"));
        assert!(looks_numeric("--5"));
        assert!(looks_numeric("5-"));
    }

    #[test]
    fn test_looks_numeric_rejects_non_digits() {
        assert!(!looks_numeric(""));
        assert!(!looks_numeric("."));
        assert!(!looks_numeric("-"));
        assert!(!looks_numeric("-."));
        assert!(!looks_numeric("+5"));
        assert!(!looks_numeric("1 2"));
        assert!(!looks_numeric("abc"));
    }

    #[test]
    fn test_parse_line_semicolon_separated() {
        let outcome = parse_line("45;90;2.5");

        assert_eq!(outcome, LineOutcome::Triple(Spherical::new(45.0, 90.0, 2.5)));
    }

    #[test]
    fn test_parse_line_comma_separated() {
        let outcome = parse_line("45,90,2.5");

        assert_eq!(outcome, LineOutcome::Triple(Spherical::new(45.0, 90.0, 2.5)));
    }

    #[test]
    fn test_parse_line_semicolon_wins_over_comma() {
        // With both separators present, only ';' splits the line; the comma
        // stays inside a field and fails the numeric check
        let outcome = parse_line("1,5;90;2");

        assert_eq!(
            outcome,
            LineOutcome::Skipped(SkipReason::NonNumeric {
                field: Field::Phi,
                value: "1,5".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_line_blank() {
        assert_eq!(parse_line(""), LineOutcome::Blank);
        assert_eq!(parse_line("   \t "), LineOutcome::Blank);
    }

    #[test]
    fn test_parse_line_with_letters_is_skipped() {
        assert_eq!(
            parse_line("45;90;abc"),
            LineOutcome::Skipped(SkipReason::ContainsText)
        );
        // Scientific notation counts as text because of the 'e'
        assert_eq!(
            parse_line("1e5;90;1"),
            LineOutcome::Skipped(SkipReason::ContainsText)
        );
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        assert_eq!(
            parse_line("45;90"),
            LineOutcome::Skipped(SkipReason::InsufficientData(2))
        );
    }

    #[test]
    fn test_parse_line_extra_fields_ignored() {
        let outcome = parse_line("0;90;1;99;100");

        assert_eq!(outcome, LineOutcome::Triple(Spherical::new(0.0, 90.0, 1.0)));
    }

    #[test]
    fn test_parse_line_non_numeric_field_names_culprit() {
        let outcome = parse_line("45;.;1");

        assert_eq!(
            outcome,
            LineOutcome::Skipped(SkipReason::NonNumeric {
                field: Field::Theta,
                value: ".".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_line_loose_check_then_parse_failure() {
        // Passes the numeric-looking check, fails the float parse: an error,
        // not a skip
        match parse_line("1.2.3;90;1") {
            LineOutcome::Failed(msg) => assert!(msg.contains("1.2.3")),
            other => panic!("Expected Failed, got {:?}", other),
        }

        match parse_line("0;90;--5") {
            LineOutcome::Failed(msg) => assert!(msg.contains("--5")),
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_whitespace_around_fields() {
        let outcome = parse_line(" 45 ; 90 ; 2.5 ");

        assert_eq!(outcome, LineOutcome::Triple(Spherical::new(45.0, 90.0, 2.5)));
    }

    #[test]
    fn test_parse_reader_mixed_input() {
        let input = "0;0;1\nnot;a;number\n\n90;90;2\n";
        let report = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(report.triples.len(), 2);
        assert_eq!(report.triples[0], Spherical::new(0.0, 0.0, 1.0));
        assert_eq!(report.triples[1], Spherical::new(90.0, 90.0, 2.0));
        assert_eq!(report.lines_read, 4);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 0);
    }

    #[test]
    fn test_parse_reader_counts_parse_failures_as_errors() {
        let input = "0;0;1\n1.2.3;0;1\n--5;0;1\n";
        let report = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(report.triples.len(), 1);
        assert_eq!(report.errors, 2);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_parse_reader_empty_input() {
        let report = parse_reader(Cursor::new("")).unwrap();

        assert!(report.triples.is_empty());
        assert_eq!(report.lines_read, 0);
    }

    #[test]
    fn test_parse_reader_only_blank_lines_not_counted_as_skips() {
        let report = parse_reader(Cursor::new("\n\n  \n")).unwrap();

        assert!(report.triples.is_empty());
        assert_eq!(report.lines_read, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.errors, 0);
    }

    #[test]
    fn test_parse_file_missing_input() {
        let result = parse_file("definitely/not/here.csv");

        assert!(matches!(result, Err(ParserError::MissingInput(_))));
    }

    #[test]
    fn test_parse_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0;90;1").unwrap();
        writeln!(file, "90;90;2").unwrap();
        file.flush().unwrap();

        let report = parse_file(file.path()).unwrap();

        assert_eq!(report.triples.len(), 2);
        assert_eq!(report.lines_read, 2);
    }
}
