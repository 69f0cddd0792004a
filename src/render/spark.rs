//! One-row sparklines over an 8-level glyph ramp.

use crate::{
    core::{
        color::{AnsiCode, push_colored},
        config::Options,
        constants::SPARK_LEVELS,
        data::Series,
        scale::{clamp, fraction, global_min_max},
    },
    render::{
        frame::{fit, max_width, series_name},
        grid::Grid,
    },
};

pub const UNICODE_RAMP: [char; SPARK_LEVELS] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
pub const ASCII_RAMP: [char; SPARK_LEVELS] = ['_', '.', '-', '=', '+', '*', '#', '@'];

/// Ramp level of a normalized value.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn level(norm: f64) -> usize {
    let l = (norm * (SPARK_LEVELS - 1) as f64).floor();
    if l.is_nan() || l < 0.0 {
        return 0;
    }
    clamp(l as usize, 0, SPARK_LEVELS - 1)
}

/// Pick `width` values out of `values` by index stepping.
#[must_use]
pub fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    if width == 0 || values.len() <= width {
        return values.to_vec();
    }
    (0..width).map(|i| values[i * values.len() / width]).collect()
}

/// Lower third muted, middle primary, upper third accent.
#[inline]
fn tint(opts: &Options, norm: f64) -> AnsiCode {
    if norm < 0.33 {
        opts.theme.muted
    } else if norm < 0.66 {
        opts.theme.primary
    } else {
        opts.theme.accent
    }
}

/// Sparkline text, one line per series and no trailing newline; `series`
/// must already be validated.
#[must_use]
pub fn render(series: &[Series], opts: &Options) -> String {
    let ramp = if opts.unicode_enabled() {
        &UNICODE_RAMP
    } else {
        &ASCII_RAMP
    };
    let color = opts.color_enabled();
    let (min, max) = global_min_max(series);

    let names: Vec<String> = if opts.show_legend && series.len() > 1 {
        series
            .iter()
            .enumerate()
            .map(|(i, s)| series_name(s.label.as_deref(), i))
            .collect()
    } else {
        Vec::new()
    };
    let name_w = max_width(&names);
    let prefix_w = if names.is_empty() { 0 } else { name_w + 1 };
    let width = opts.canvas_width().saturating_sub(prefix_w).max(1);
    log::debug!(
        "sparkline: {} series, range [{min}, {max}], width {width}",
        series.len()
    );

    let mut lines = Vec::with_capacity(series.len() + 1);
    if opts.has_title() {
        let mut t = String::new();
        push_colored(&mut t, &opts.title, opts.theme.text.as_ref(), color);
        lines.push(t);
    }
    for (i, s) in series.iter().enumerate() {
        let values = downsample(&s.values, width);
        let mut grid = Grid::new(values.len(), 1);
        for (col, &v) in values.iter().enumerate() {
            let norm = fraction(v, min, max);
            grid.set(col, 0, ramp[level(norm)], Some(tint(opts, norm)));
        }

        let mut line = String::with_capacity(prefix_w + values.len() * 4);
        if let Some(name) = names.get(i) {
            line.push_str(&fit(name, name_w));
            line.push(' ');
        }
        grid.push_row(&mut line, 0, color);
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Style;

    fn unicode() -> crate::core::config::OptionsBuilder {
        Options::builder().style(Style::Unicode).color(false)
    }

    #[test_log::test]
    fn extremes_hit_the_ends_of_the_ramp() {
        let s = Series::new(vec![1.0, 5.0, 2.0, 8.0, 3.0, 7.0, 4.0, 6.0]);
        let out = render(&[s], &unicode().build());
        let runes: Vec<char> = out.chars().collect();
        assert_eq!(runes.len(), 8);
        assert_eq!(runes[0], '▁');
        assert_eq!(runes[3], '█');
        assert!(runes.iter().all(|c| UNICODE_RAMP.contains(c)));
    }

    #[test_log::test]
    fn flat_input_sits_mid_ramp() {
        let o = unicode().style(Style::Ascii).build();
        let out = render(&[Series::new(vec![4.0; 5])], &o);
        assert_eq!(out, "=====");
    }

    #[test_log::test]
    fn long_series_are_stepped_down_to_width() {
        let v: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(downsample(&v, 4), vec![0.0, 2.0, 5.0, 7.0]);
        assert_eq!(downsample(&v, 0).len(), 10);
        let out = render(&[Series::new(v)], &unicode().width(5).build());
        assert_eq!(out.chars().count(), 5);
    }

    #[test_log::test]
    fn several_series_share_a_scale_and_get_names() {
        let s = [
            Series::labeled("up", vec![0.0, 10.0]),
            Series::new(vec![5.0, 5.0]),
        ];
        let out = render(&s, &unicode().build());
        assert_eq!(out, "up       ▁█\nSeries 2 ▄▄");
    }

    #[test_log::test]
    fn color_tints_by_level() {
        let out = render(&[Series::new(vec![0.0, 10.0])], &unicode().color(true).build());
        assert_eq!(out, "\x1b[90m▁\x1b[0m\x1b[33m█\x1b[0m");
    }

    #[test_log::test]
    fn wide_names_still_bound_the_line() {
        let s = [
            Series::labeled("a-very-long-series-name", vec![1.0; 50]),
            Series::new(vec![2.0; 50]),
        ];
        let out = render(&s, &unicode().width(10).build());
        for line in out.lines() {
            assert_eq!(line.chars().count(), "a-very-long-series-name".len() + 2);
        }
    }
}
