//! Public-facing crate root: re-exports + one-shot helpers.
//!
//! ```
//! use termchart::{Options, Series, Style};
//!
//! let opts = Options::builder().style(Style::Ascii).color(false).width(20).build();
//! let out = termchart::bar(&[Series::new(vec![1.0, 2.0])], &opts);
//! assert_eq!(out.lines().count(), 2);
//! ```

pub mod chart;
pub mod cli;
pub mod core;
pub mod render;

pub use chart::{Chart, bar, line, pie, spark, try_bar, try_line, try_pie, try_spark};
pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{BarMode, Options, OptionsBuilder, Orientation, Style},
    data::{Dataset, ParseDataError, Series},
    error::{ChartError, Error},
    terminal::Capabilities,
    theme::{THEMES, Theme},
};

/// Sparkline of `values` with default options.
#[must_use]
pub fn spark_values(values: &[f64]) -> String {
    spark(&[Series::new(values)], &Options::default())
}

/// Labeled single-series bar chart with default options.
#[must_use]
pub fn bar_values(values: &[f64], labels: &[&str]) -> String {
    let opts = Options::builder().labels(labels.iter().copied()).build();
    bar(&[Series::new(values)], &opts)
}

/// Single-series line chart with default options.
#[must_use]
pub fn line_values(values: &[f64]) -> String {
    line(&[Series::new(values)], &Options::default())
}

/// Pie chart with default options; unlabeled slices read `Item N`.
#[must_use]
pub fn pie_values(values: &[f64], labels: &[&str]) -> String {
    let opts = Options::builder().labels(labels.iter().copied()).build();
    pie(&Series::new(values), &opts)
}
