//! Text assembly around the rasterized grids: titles, axis labels, legends.
//!
//! Widths are counted in `char`s; every glyph this crate emits is a single
//! terminal column wide.

use std::fmt::Write;

use crate::core::{
    color::{AnsiCode, push_colored},
    config::Options,
    constants::{DECIMAL_PRECISION, Y_AXIS_WIDTH},
    scale::{scale, to_index},
};

/// Display width of `text`.
#[inline]
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Left-align `text` in exactly `width` columns, truncating overflow.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = text_width(&out);
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

/// Widest entry of `labels`.
#[must_use]
pub fn max_width<S: AsRef<str>>(labels: &[S]) -> usize {
    labels.iter().map(|l| text_width(l.as_ref())).max().unwrap_or(0)
}

/// Title line (plus newline) in the theme's text colour.
pub fn push_title(buf: &mut String, opts: &Options) {
    if !opts.has_title() {
        return;
    }
    push_colored(buf, &opts.title, opts.theme.text.as_ref(), opts.color_enabled());
    buf.push('\n');
}

/// Value a chart row stands for, interpolated back from its index.
///
/// Row 0 is `max`, the last row is `min`; a single row reads as `max`.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn row_value(row: usize, rows: usize, min: f64, max: f64) -> f64 {
    if rows <= 1 {
        return max;
    }
    scale(row as f64, 0.0, (rows - 1) as f64, max, min)
}

/// `{:7.1} ` y-axis label, always [`Y_AXIS_WIDTH`] columns when it fits.
#[must_use]
pub fn y_axis_label(value: f64) -> String {
    let mut s = String::with_capacity(Y_AXIS_WIDTH);
    let _ = write!(s, "{value:>w$.p$} ", w = Y_AXIS_WIDTH - 1, p = DECIMAL_PRECISION);
    s
}

/// Column of label `i` out of `n` spread across `width`.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn spread_position(i: usize, n: usize, width: usize) -> usize {
    if n <= 1 {
        return width / 2;
    }
    to_index(i as f64 / (n - 1) as f64 * width.saturating_sub(1) as f64)
}

/// Fixed-width row of labels centred under their data index.
///
/// Dense labels overwrite each other left to right; the rightmost one wins
/// any shared column.
#[must_use]
pub fn x_label_row<S: AsRef<str>>(labels: &[S], width: usize) -> String {
    let mut line = vec![' '; width];
    let n = labels.len();
    for (i, label) in labels.iter().enumerate() {
        let chars: Vec<char> = label.as_ref().chars().collect();
        let pos = spread_position(i, n, width);
        let start = pos
            .saturating_sub(chars.len() / 2)
            .min(width.saturating_sub(chars.len()));
        for (slot, &c) in line.iter_mut().skip(start).zip(&chars) {
            *slot = c;
        }
    }
    line.into_iter().collect()
}

/// One legend entry: swatch glyph, its colour, display name.
pub struct LegendEntry<'a> {
    pub swatch: &'a str,
    pub color: AnsiCode,
    pub name: String,
}

/// `● A  ● B  ` on a single line.
pub fn push_inline_legend(buf: &mut String, entries: &[LegendEntry<'_>], color: bool) {
    for e in entries {
        push_colored(buf, e.swatch, Some(&e.color), color);
        buf.push(' ');
        buf.push_str(&e.name);
        buf.push_str("  ");
    }
    buf.push('\n');
}

/// `Series N` for unnamed series.
#[must_use]
pub fn series_name(label: Option<&str>, index: usize) -> String {
    match label {
        Some(l) if !l.is_empty() => l.to_owned(),
        _ => format!("Series {}", index + 1),
    }
}
