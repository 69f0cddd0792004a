//! Render entry points: validate, dispatch, return one string.
//!
//! The plain functions return an empty string when the input cannot be
//! drawn; the `try_` variants say why.

use crate::{
    core::{
        config::Options,
        data::Series,
        error::ChartError,
        scale::first_non_finite,
    },
    render,
};

/// A render request for one chart kind.
#[derive(Debug, Clone, Copy)]
pub enum Chart<'a> {
    Bar(&'a [Series]),
    Line(&'a [Series]),
    Pie(&'a Series),
    Spark(&'a [Series]),
}

impl Chart<'_> {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Chart::Bar(_) => "bar",
            Chart::Line(_) => "line",
            Chart::Pie(_) => "pie",
            Chart::Spark(_) => "sparkline",
        }
    }

    /// # Errors
    /// [`ChartError::EmptyData`] when there is nothing to draw,
    /// [`ChartError::NonFinite`] for the first NaN or infinity, and
    /// [`ChartError::ZeroTotal`] for a pie without positive values.
    pub fn try_render(&self, opts: &Options) -> Result<String, ChartError> {
        match *self {
            Chart::Bar(series) => {
                validate(series)?;
                Ok(render::bar::render(series, opts))
            }
            Chart::Line(series) => {
                validate(series)?;
                Ok(render::line::render(series, opts))
            }
            Chart::Pie(series) => {
                validate(std::slice::from_ref(series))?;
                if render::pie::positive_total(&series.values) <= 0.0 {
                    return Err(ChartError::ZeroTotal);
                }
                Ok(render::pie::render(series, opts))
            }
            Chart::Spark(series) => {
                validate(series)?;
                Ok(render::spark::render(series, opts))
            }
        }
    }

    /// Like [`Chart::try_render`], with failures voiding the output.
    #[must_use]
    pub fn render(&self, opts: &Options) -> String {
        self.try_render(opts).unwrap_or_else(|e| {
            log::debug!("{} chart not rendered: {e}", self.kind());
            String::new()
        })
    }
}

/// Empty list or no values anywhere, then the first non-finite value.
fn validate(series: &[Series]) -> Result<(), ChartError> {
    if series.iter().all(Series::is_empty) {
        return Err(ChartError::EmptyData);
    }
    match first_non_finite(series) {
        Some((series, index)) => Err(ChartError::NonFinite { series, index }),
        None => Ok(()),
    }
}

#[must_use]
pub fn bar(series: &[Series], opts: &Options) -> String {
    Chart::Bar(series).render(opts)
}

#[must_use]
pub fn line(series: &[Series], opts: &Options) -> String {
    Chart::Line(series).render(opts)
}

#[must_use]
pub fn pie(series: &Series, opts: &Options) -> String {
    Chart::Pie(series).render(opts)
}

#[must_use]
pub fn spark(series: &[Series], opts: &Options) -> String {
    Chart::Spark(series).render(opts)
}

/// # Errors
/// See [`Chart::try_render`].
pub fn try_bar(series: &[Series], opts: &Options) -> Result<String, ChartError> {
    Chart::Bar(series).try_render(opts)
}

/// # Errors
/// See [`Chart::try_render`].
pub fn try_line(series: &[Series], opts: &Options) -> Result<String, ChartError> {
    Chart::Line(series).try_render(opts)
}

/// # Errors
/// See [`Chart::try_render`].
pub fn try_pie(series: &Series, opts: &Options) -> Result<String, ChartError> {
    Chart::Pie(series).try_render(opts)
}

/// # Errors
/// See [`Chart::try_render`].
pub fn try_spark(series: &[Series], opts: &Options) -> Result<String, ChartError> {
    Chart::Spark(series).try_render(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn empty_input_voids_every_kind() {
        let o = Options::default();
        assert_eq!(try_bar(&[], &o), Err(ChartError::EmptyData));
        assert_eq!(try_line(&[Series::default()], &o), Err(ChartError::EmptyData));
        assert_eq!(try_pie(&Series::default(), &o), Err(ChartError::EmptyData));
        assert!(spark(&[], &o).is_empty());
    }

    #[test_log::test]
    fn one_bad_value_voids_the_whole_render() {
        let o = Options::default();
        let s = [
            Series::new(vec![1.0, 2.0]),
            Series::new(vec![3.0, f64::INFINITY]),
        ];
        assert_eq!(
            try_line(&s, &o),
            Err(ChartError::NonFinite { series: 1, index: 1 })
        );
        assert!(bar(&s, &o).is_empty());
        assert!(pie(&Series::new(vec![1.0, f64::NAN]), &o).is_empty());
    }

    #[test_log::test]
    fn pie_needs_a_positive_total() {
        let o = Options::default();
        assert_eq!(
            try_pie(&Series::new(vec![0.0, -3.0]), &o),
            Err(ChartError::ZeroTotal)
        );
    }

    #[test_log::test]
    fn chart_enum_dispatches_like_the_functions() {
        let o = Options::builder().width(20).build();
        let s = [Series::new(vec![1.0, 4.0, 2.0])];
        assert_eq!(Chart::Spark(&s).render(&o), spark(&s, &o));
        assert_eq!(Chart::Bar(&s).render(&o), bar(&s, &o));
        assert_eq!(Chart::Pie(&s[0]).kind(), "pie");
    }
}
