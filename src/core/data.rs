//! Series model + loader for plain-text number lists.
//!
//! Accepted text: numbers separated by whitespace and/or commas, `#`
//! comments, and `value,label` lines (a single number followed by text).

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::color::AnsiCode;

// --- Public Row Structs ---

/// One ordered collection of values, optionally named and coloured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub values: Vec<f64>,
    /// Overrides the theme's colour for this series.
    pub color: Option<AnsiCode>,
}

impl Series {
    #[inline]
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            label: None,
            values: values.into(),
            color: None,
        }
    }
    #[inline]
    #[must_use]
    pub fn labeled(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self::new(values).label(label)
    }
    #[inline]
    #[must_use]
    pub fn label(mut self, l: impl Into<String>) -> Self {
        self.label = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.color = Some(c);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, with missing trailing categories reading as 0.
    #[inline]
    #[must_use]
    pub fn value_or_zero(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Values plus whatever labels came with them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseDataError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadNumber(String),
    NonFinite(String),
    BadSeries(String),
}

impl Display for ParseDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadNumber(text) => {
                write!(f, "line {}: invalid number '{}'", self.line, text)
            }
            ParseErrorKind::NonFinite(text) => {
                write!(f, "line {}: '{}' is not a finite number", self.line, text)
            }
            ParseErrorKind::BadSeries(text) => {
                write!(f, "series '{text}' must look like NAME:1,2,3")
            }
        }
    }
}
impl Error for ParseDataError {}

// --- Helpers ---

/// Replace U+2212 MINUS SIGN with ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn is_separator(b: u8) -> bool {
    b == b',' || b.is_ascii_whitespace()
}

/// Parse one token; only finite numbers are accepted.
pub fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseDataError> {
    let text = || String::from_utf8_lossy(bytes).into_owned();
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseDataError {
        line,
        kind: ParseErrorKind::BadNumber(text()),
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseDataError {
            line,
            kind: ParseErrorKind::NonFinite(text()),
        })
    }
}

/// Split `bytes` on commas/whitespace and parse every token.
fn parse_tokens(bytes: &[u8], line: usize, out: &mut Vec<f64>) -> Result<(), ParseDataError> {
    for tok in bytes.split(|&b| is_separator(b)).filter(|t| !t.is_empty()) {
        out.push(parse_f64(tok, line)?);
    }
    Ok(())
}

/// Parse a list of command-line words (each may hold several numbers).
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<f64>, ParseDataError> {
    let mut values = Vec::with_capacity(args.len());
    for a in args {
        let mut buf = a.as_ref().as_bytes().to_vec();
        normalize_unicode_minus(&mut buf);
        parse_tokens(&buf, 0, &mut values)?;
    }
    Ok(values)
}

// --- Reader ingest ---
const BUF_CAP: usize = 1 << 16;

pub fn read_values<R: Read>(src: R) -> Result<Dataset, ParseDataError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Dataset::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseDataError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let line = buf.trim_ascii();
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        // `value,label` – first field numeric, remainder not
        if let Some(comma) = line.iter().position(|&b| b == b',') {
            let (head, tail) = (line[..comma].trim_ascii(), line[comma + 1..].trim_ascii());
            if let Ok(v) = parse_f64(head, line_no) {
                let numeric_tail = tail
                    .split(|&b| is_separator(b))
                    .filter(|t| !t.is_empty())
                    .all(|t| lexical_core::parse::<f64>(t).is_ok());
                if !numeric_tail {
                    data.values.push(v);
                    data.labels.push(String::from_utf8_lossy(tail).into_owned());
                    continue;
                }
            }
        }

        parse_tokens(line, line_no, &mut data.values)?;
    }
    log::debug!(
        "read {} values, {} labels over {line_no} lines",
        data.values.len(),
        data.labels.len()
    );
    Ok(data)
}

pub fn read_values_from_path(path: &str) -> Result<Dataset, ParseDataError> {
    if path == "-" {
        read_values(std::io::stdin())
    } else {
        use std::fs::File;
        read_values(File::open(path).map_err(|e| ParseDataError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

/// Parse `NAME:1,2,3` (or bare `1,2,3`) into a series.
pub fn parse_named_series(text: &str) -> Result<Series, ParseDataError> {
    let bad = || ParseDataError {
        line: 0,
        kind: ParseErrorKind::BadSeries(text.to_owned()),
    };
    let (label, nums) = match text.split_once(':') {
        Some((name, rest)) if !name.trim().is_empty() => (Some(name.trim()), rest),
        Some(_) => return Err(bad()),
        None => (None, text),
    };
    let values = parse_args(&[nums])?;
    if values.is_empty() {
        return Err(bad());
    }
    let s = Series::new(values);
    Ok(match label {
        Some(l) => s.label(l),
        None => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn unicode_minus_becomes_ascii() {
        let mut b = "−4.5".as_bytes().to_vec();
        normalize_unicode_minus(&mut b);
        assert_eq!(b, b"-4.5");
    }

    #[test_log::test]
    fn args_split_on_commas_and_spaces() {
        let v = parse_args(&["1,2", "3 4", "−5"]).unwrap();
        assert_eq!(v, vec![1.0, 2.0, 3.0, 4.0, -5.0]);
    }

    #[test_log::test]
    fn non_finite_tokens_are_rejected() {
        let err = parse_args(&["1", "inf"]).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NonFinite(_)));
        let err = parse_args(&["abc"]).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadNumber(_)));
    }

    #[test_log::test]
    fn reader_handles_comments_and_value_label_lines() {
        let text = "# sales\n10,Q1\n25, Q2\n\n15 30\r\n";
        let d = read_values(text.as_bytes()).unwrap();
        assert_eq!(d.values, vec![10.0, 25.0, 15.0, 30.0]);
        assert_eq!(d.labels, vec!["Q1".to_owned(), "Q2".to_owned()]);
    }

    #[test_log::test]
    fn reader_reports_line_of_bad_token() {
        let err = read_values("1\n2\nx y\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 3);
    }

    #[test_log::test]
    fn series_spec_parses_label_and_values() {
        let s = parse_named_series("Sales: 1, 2,3").unwrap();
        assert_eq!(s.label.as_deref(), Some("Sales"));
        assert_eq!(s.values, vec![1.0, 2.0, 3.0]);
        assert!(parse_named_series(":1,2").is_err());
        assert!(parse_named_series("Empty:").is_err());
        assert_eq!(parse_named_series("4,5").unwrap().label, None);
    }

    #[test_log::test]
    fn missing_categories_read_as_zero() {
        let s = Series::new(vec![1.0]);
        assert!((s.value_or_zero(3)).abs() < f64::EPSILON);
    }
}
