//! Centralised error types used across the crate.

use std::{error::Error as StdError, fmt, io};

use crate::core::{color::ColorError, data::ParseDataError};

/// Why a render produced no chart.
///
/// Only empty or non-finite input is fatal; every other shape (flat series,
/// zeros, one point, negatives) degrades to a defined picture instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    EmptyData,
    NonFinite { series: usize, index: usize },
    /// Pie slices need a positive total.
    ZeroTotal,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::EmptyData => f.write_str("data set is empty"),
            ChartError::NonFinite { series, index } => {
                write!(f, "series {series} holds a non-finite value at index {index}")
            }
            ChartError::ZeroTotal => f.write_str("pie values sum to zero"),
        }
    }
}
impl StdError for ChartError {}

/// Top-level error type bubbled up by the command line front end.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(ParseDataError),
    Color(ColorError),
    Chart(ChartError),
    UnknownTheme(String),
    NoData,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{e}"),
            Error::Parse(e) => write!(f, "{e}"),
            Error::Color(e) => write!(f, "{e}"),
            Error::Chart(e) => write!(f, "{e}"),
            Error::UnknownTheme(name) => write!(
                f,
                "unknown theme '{name}' (try `termchart themes`)"
            ),
            Error::NoData => f.write_str("no data provided"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Color(e) => Some(e),
            Error::Chart(e) => Some(e),
            Error::UnknownTheme(_) | Error::NoData => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseDataError> for Error {
    fn from(e: ParseDataError) -> Self {
        Self::Parse(e)
    }
}
impl From<ColorError> for Error {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ChartError> for Error {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}
