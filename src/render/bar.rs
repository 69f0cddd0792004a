//! Bar layout engine.
//!
//! Geometry first, text second: [`bar_extent`], [`stacked_boundaries`] and
//! [`stack_owner`] are pure integer layout helpers, the two `render_*`
//! functions turn their results into rows.
//!
//! Negative values are not special-cased. A bar's extent is
//! `floor(extent * v / max)` clamped into `[0, extent]`, so negative values
//! draw nothing against a positive maximum and an all-negative set draws
//! inverted proportions.

use std::fmt::Write;

use crate::{
    core::{
        color::{AnsiCode, push_colored},
        config::{BarMode, Options, Orientation},
        constants::{
            BAR_GAP, DECIMAL_PRECISION, FALLBACK_BAR_HEIGHT, FALLBACK_BAR_WIDTH,
            MAX_BAR_COLUMNS, MIN_BAR_HEIGHT,
        },
        data::Series,
        scale::clamp,
    },
    render::{
        frame::{LegendEntry, fit, max_width, push_inline_legend, push_title, series_name},
        grid::Grid,
    },
};

const UNICODE_FILLS: [char; 4] = ['█', '▓', '▒', '░'];
const ASCII_FILLS: [char; 6] = ['#', '=', '*', '+', '%', '@'];

/// Cells covered by `value` on an axis of `extent` cells scaled to `max`.
#[inline]
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn bar_extent(value: f64, max: f64, extent: usize) -> usize {
    let max = if max == 0.0 { 1.0 } else { max };
    let cells = (extent as f64 * value / max).floor();
    if cells.is_nan() || cells <= 0.0 {
        return 0;
    }
    clamp(cells as usize, 0, extent)
}

/// Number of categories: the longest series.
#[inline]
#[must_use]
pub fn category_count(series: &[Series]) -> usize {
    series.iter().map(Series::len).max().unwrap_or(0)
}

/// Largest value across every series and category.
#[must_use]
pub fn global_max(series: &[Series]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Sum of category `cat` across all series; missing values count as 0.
#[inline]
#[must_use]
pub fn category_total(series: &[Series], cat: usize) -> f64 {
    series.iter().map(|s| s.value_or_zero(cat)).sum()
}

/// Largest per-category sum.
#[must_use]
pub fn stacked_max(series: &[Series]) -> f64 {
    (0..category_count(series))
        .map(|c| category_total(series, c))
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Cumulative segment ends of category `cat`, in cells.
#[must_use]
pub fn stacked_boundaries(series: &[Series], cat: usize, max: f64, extent: usize) -> Vec<usize> {
    let mut running = 0.0;
    series
        .iter()
        .map(|s| {
            running += s.value_or_zero(cat);
            bar_extent(running, max, extent)
        })
        .collect()
}

/// Series owning 1-based cell `p` of a stack: the first `k` with
/// `bounds[k] >= p` and `bounds[k - 1] < p`.
#[must_use]
pub fn stack_owner(bounds: &[usize], p: usize) -> Option<usize> {
    let mut prev = 0;
    for (k, &b) in bounds.iter().enumerate() {
        if b >= p && prev < p {
            return Some(k);
        }
        prev = b;
    }
    None
}

/// Fill glyph for series `idx`.
///
/// A lone series, or any series when colour tells them apart, uses the
/// plain block. Otherwise each series gets its own glyph.
#[inline]
fn fill_glyph(idx: usize, multi: bool, unicode: bool, color: bool) -> char {
    match (multi && !color, unicode) {
        (false, true) => UNICODE_FILLS[0],
        (false, false) => ASCII_FILLS[0],
        (true, true) => UNICODE_FILLS[idx % UNICODE_FILLS.len()],
        (true, false) => ASCII_FILLS[idx % ASCII_FILLS.len()],
    }
}

#[inline]
fn series_color(opts: &Options, s: &Series, idx: usize) -> AnsiCode {
    s.color.unwrap_or_else(|| opts.theme.series_color(idx))
}

#[inline]
fn format_value(v: f64) -> String {
    format!("{v:.DECIMAL_PRECISION$}")
}

/// Shared per-render state.
struct Layout<'a> {
    series: &'a [Series],
    opts: &'a Options,
    categories: usize,
    stacked: bool,
    unicode: bool,
    color: bool,
}

impl<'a> Layout<'a> {
    fn new(series: &'a [Series], opts: &'a Options) -> Self {
        Self {
            series,
            opts,
            categories: category_count(series),
            stacked: opts.bar_mode == BarMode::Stacked && series.len() > 1,
            unicode: opts.unicode_enabled(),
            color: opts.color_enabled(),
        }
    }

    fn multi(&self) -> bool {
        self.series.len() > 1
    }

    fn glyph(&self, idx: usize) -> char {
        fill_glyph(idx, self.multi(), self.unicode, self.color)
    }

    fn color_of(&self, idx: usize) -> AnsiCode {
        series_color(self.opts, &self.series[idx], idx)
    }

    fn scale_max(&self) -> f64 {
        if self.stacked {
            stacked_max(self.series)
        } else {
            global_max(self.series)
        }
    }

    fn show_labels(&self) -> bool {
        self.opts.show_axes && !self.opts.labels.is_empty()
    }

    fn show_legend(&self) -> bool {
        self.opts.show_legend && self.multi()
    }

    /// Every value the chart will print, for width reservation.
    fn printed_values(&self) -> Vec<String> {
        let series = self.series;
        if self.stacked {
            (0..self.categories)
                .map(|c| format_value(category_total(series, c)))
                .collect()
        } else {
            (0..self.categories)
                .flat_map(|c| series.iter().map(move |s| format_value(s.value_or_zero(c))))
                .collect()
        }
    }

    /// Paint stack `cat` cell by cell into `grid`; `at(p)` maps 1-based
    /// stack position to a grid coordinate.
    fn paint_stack(
        &self,
        grid: &mut Grid,
        cat: usize,
        max: f64,
        extent: usize,
        at: impl Fn(usize) -> (usize, usize),
    ) {
        let bounds = stacked_boundaries(self.series, cat, max, extent);
        for p in 1..=extent {
            if let Some(k) = stack_owner(&bounds, p) {
                let (col, row) = at(p);
                grid.set(col, row, self.glyph(k), Some(self.color_of(k)));
            }
        }
    }

    fn push_legend(&self, out: &mut String) {
        if !self.show_legend() {
            return;
        }
        let swatches: Vec<String> = (0..self.series.len())
            .map(|i| self.glyph(i).to_string())
            .collect();
        let entries: Vec<LegendEntry<'_>> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| LegendEntry {
                swatch: &swatches[i],
                color: self.color_of(i),
                name: series_name(s.label.as_deref(), i),
            })
            .collect();
        out.push('\n');
        push_inline_legend(out, &entries, self.color);
    }
}

/// Horizontal bars: one row per (category, series), or per category when
/// stacked.
fn render_horizontal(l: &Layout<'_>) -> String {
    let opts = l.opts;
    let label_w = if l.show_labels() {
        max_width(&opts.labels)
    } else {
        0
    };
    let values = if opts.show_values {
        l.printed_values()
    } else {
        Vec::new()
    };
    let value_w = max_width(&values);

    let mut bar_w = opts.canvas_width().saturating_sub(label_w + value_w + 2);
    if bar_w < 1 {
        bar_w = FALLBACK_BAR_WIDTH;
    }
    let max = l.scale_max();
    log::debug!(
        "horizontal bars: {} categories x {} series, bar width {bar_w}, max {max}",
        l.categories,
        l.series.len()
    );

    let mut out = String::new();
    push_title(&mut out, opts);

    let push_prefix = |out: &mut String, cat: usize, first: bool| {
        if label_w > 0 {
            let text = if first { opts.label(cat).unwrap_or("") } else { "" };
            out.push_str(&fit(text, label_w));
            out.push(' ');
        }
    };
    let push_value = |out: &mut String, len: usize, v: f64| {
        if opts.show_values {
            out.extend(std::iter::repeat_n(' ', bar_w - len));
            let _ = write!(out, " {}", format_value(v));
        }
    };

    for cat in 0..l.categories {
        if l.stacked {
            // every cell up to the furthest boundary has an owner
            let len = stacked_boundaries(l.series, cat, max, bar_w)
                .into_iter()
                .max()
                .unwrap_or(0);
            let mut row = Grid::new(len, 1);
            l.paint_stack(&mut row, cat, max, bar_w, |p| (p - 1, 0));
            push_prefix(&mut out, cat, true);
            row.push_row(&mut out, 0, l.color);
            push_value(&mut out, len, category_total(l.series, cat));
            out.push('\n');
            continue;
        }

        for (idx, s) in l.series.iter().enumerate() {
            let v = s.value_or_zero(cat);
            let len = bar_extent(v, max, bar_w);
            let run: String = std::iter::repeat_n(l.glyph(idx), len).collect();
            push_prefix(&mut out, cat, idx == 0);
            push_colored(&mut out, &run, Some(&l.color_of(idx)), l.color);
            push_value(&mut out, len, v);
            out.push('\n');
        }
    }

    l.push_legend(&mut out);
    out
}

/// Vertical columns drawn bottom-up over a fixed row count.
fn render_vertical(l: &Layout<'_>) -> String {
    let opts = l.opts;
    let mut rows = opts.canvas_height();
    rows = rows.saturating_sub(
        usize::from(opts.has_title())
            + usize::from(l.show_labels())
            + usize::from(opts.show_values)
            + if l.show_legend() { 2 } else { 0 },
    );
    if rows < MIN_BAR_HEIGHT {
        rows = FALLBACK_BAR_HEIGHT;
    }

    // runs per category slot
    let runs = if l.stacked { 1 } else { l.series.len() };
    let cats = l.categories.max(1);
    let per_slot = (opts.canvas_width() + BAR_GAP) / cats;
    let mut sub = clamp(per_slot.saturating_sub(BAR_GAP) / runs, 1, MAX_BAR_COLUMNS);
    // printed values widen the columns instead of losing digits
    let value_w = if opts.show_values {
        max_width(&l.printed_values())
    } else {
        0
    };
    if !l.stacked && value_w > 0 {
        sub = sub.max(value_w + usize::from(runs > 1));
    }
    let slot = (sub * runs).max(value_w);
    let cols = cats * slot + (cats - 1) * BAR_GAP;
    let max = l.scale_max();
    log::debug!(
        "vertical bars: {} categories, slot {slot} cols, {rows} rows, max {max}",
        l.categories
    );

    let mut grid = Grid::new(cols, rows);
    for cat in 0..l.categories {
        let x0 = cat * (slot + BAR_GAP);
        if l.stacked {
            for x in x0..x0 + slot {
                l.paint_stack(&mut grid, cat, max, rows, |p| (x, rows - p));
            }
            continue;
        }
        for (idx, s) in l.series.iter().enumerate() {
            let height = bar_extent(s.value_or_zero(cat), max, rows);
            let glyph = l.glyph(idx);
            let color = Some(l.color_of(idx));
            for row in 0..rows {
                // rows_remaining counts down from the top
                if rows - row > height {
                    continue;
                }
                for x in x0 + idx * sub..x0 + (idx + 1) * sub {
                    grid.set(x, row, glyph, color);
                }
            }
        }
    }

    let mut out = String::new();
    push_title(&mut out, opts);
    for row in 0..rows {
        grid.push_row(&mut out, row, l.color);
        out.push('\n');
    }

    if opts.show_values {
        let cells = (0..l.categories).map(|cat| {
            if l.stacked {
                fit(&format_value(category_total(l.series, cat)), slot)
            } else {
                l.series
                    .iter()
                    .map(|s| fit(&format_value(s.value_or_zero(cat)), sub))
                    .collect()
            }
        });
        out.push_str(&slot_row(cells));
        out.push('\n');
    }
    if l.show_labels() {
        let cells = (0..l.categories).map(|cat| fit(opts.label(cat).unwrap_or(""), slot));
        push_colored(&mut out, &slot_row(cells), Some(&opts.theme.muted), l.color);
        out.push('\n');
    }

    l.push_legend(&mut out);
    out
}

/// Per-category cells joined by the bar gap, trailing blanks dropped.
fn slot_row(cells: impl Iterator<Item = String>) -> String {
    let joined = cells.collect::<Vec<_>>().join(&" ".repeat(BAR_GAP));
    joined.trim_end().to_owned()
}

/// Bar chart text; `series` must already be validated.
#[must_use]
pub fn render(series: &[Series], opts: &Options) -> String {
    let layout = Layout::new(series, opts);
    match opts.orientation {
        Orientation::Horizontal => render_horizontal(&layout),
        Orientation::Vertical => render_vertical(&layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Style;

    fn ascii() -> crate::core::config::OptionsBuilder {
        Options::builder().style(Style::Ascii).color(false)
    }

    #[test_log::test]
    fn extents_floor_against_the_maximum() {
        assert_eq!(bar_extent(10.0, 30.0, 78), 26);
        assert_eq!(bar_extent(30.0, 30.0, 78), 78);
        assert_eq!(bar_extent(0.0, 30.0, 78), 0);
    }

    #[test_log::test]
    fn zero_maximum_reads_as_one() {
        assert_eq!(bar_extent(0.0, 0.0, 10), 0);
        assert_eq!(bar_extent(0.5, 0.0, 10), 5);
    }

    #[test_log::test]
    fn negative_extents_clamp_into_the_canvas() {
        assert_eq!(bar_extent(-5.0, 10.0, 20), 0);
        // all-negative input: ratios above one saturate
        assert_eq!(bar_extent(-10.0, -2.0, 20), 20);
        assert_eq!(bar_extent(-2.0, -2.0, 20), 20);
    }

    #[test_log::test]
    fn stack_ownership_follows_cumulative_bounds() {
        let s = [Series::new(vec![10.0, 20.0]), Series::new(vec![5.0, 10.0])];
        assert!((stacked_max(&s) - 30.0).abs() < f64::EPSILON);
        assert_eq!(stacked_boundaries(&s, 0, 30.0, 30), vec![10, 15]);
        assert_eq!(stacked_boundaries(&s, 1, 30.0, 30), vec![20, 30]);

        let b = [10, 15];
        assert_eq!(stack_owner(&b, 1), Some(0));
        assert_eq!(stack_owner(&b, 10), Some(0));
        assert_eq!(stack_owner(&b, 11), Some(1));
        assert_eq!(stack_owner(&b, 15), Some(1));
        assert_eq!(stack_owner(&b, 16), None);
    }

    #[test_log::test]
    fn empty_segments_never_own_cells() {
        assert_eq!(stack_owner(&[0, 4, 4, 6], 1), Some(1));
        assert_eq!(stack_owner(&[0, 4, 4, 6], 5), Some(3));
    }

    #[test_log::test]
    fn short_series_count_missing_values_as_zero() {
        let s = [Series::new(vec![1.0, 2.0, 3.0]), Series::new(vec![4.0])];
        assert_eq!(category_count(&s), 3);
        assert!((category_total(&s, 2) - 3.0).abs() < f64::EPSILON);
    }

    #[test_log::test]
    fn horizontal_rows_carry_labels_and_values() {
        let o = ascii()
            .width(30)
            .labels(["a", "bbb"])
            .show_values(true)
            .build();
        let out = render(&[Series::new(vec![5.0, 10.0])], &o);
        // 30 - 3 label - 4 value - 2 = 21 cells
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("a   {}{} 5.0", "#".repeat(10), " ".repeat(11)));
        assert_eq!(lines[1], format!("bbb {} 10.0", "#".repeat(21)));
    }

    #[test_log::test]
    fn grouped_series_use_distinct_glyphs_without_color() {
        let o = ascii().width(12).show_legend(false).build();
        let s = [Series::new(vec![10.0]), Series::new(vec![5.0])];
        let out = render(&s, &o);
        assert_eq!(out, format!("{}\n{}\n", "#".repeat(10), "=".repeat(5)));
    }

    #[test_log::test]
    fn stacked_horizontal_ends_with_the_last_series() {
        let o = ascii().width(32).bar_mode(BarMode::Stacked).build();
        let s = [
            Series::labeled("A", vec![10.0, 20.0]),
            Series::labeled("B", vec![5.0, 10.0]),
        ];
        let out = render(&s, &o);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("{}{}", "#".repeat(10), "=".repeat(5)));
        assert_eq!(lines[1], format!("{}{}", "#".repeat(20), "=".repeat(10)));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "# A  = B  ");
    }

    #[test_log::test]
    fn vertical_bars_grow_from_the_bottom() {
        let o = ascii().size(20, 4).vertical().build();
        let out = render(&[Series::new(vec![2.0, 4.0])], &o);
        // 20 cols over 2 slots: 3 columns each, 1 gap; 4 rows
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    ###");
        assert_eq!(lines[1], "    ###");
        assert_eq!(lines[2], "### ###");
        assert_eq!(lines[3], "### ###");
    }

    #[test_log::test]
    fn short_vertical_canvas_falls_back() {
        let o = ascii().size(10, 2).vertical().build();
        let out = render(&[Series::new(vec![1.0])], &o);
        assert_eq!(out.lines().count(), FALLBACK_BAR_HEIGHT);
    }

    #[test_log::test]
    fn vertical_values_keep_every_digit() {
        let o = ascii()
            .width(10)
            .vertical()
            .show_values(true)
            .show_legend(false)
            .build();
        let s = [
            Series::new(vec![250.0, 40.0]),
            Series::new(vec![125.0, 80.0]),
            Series::new(vec![90.0, 35.0]),
        ];
        let out = render(&s, &o);
        let values: Vec<&str> = out.lines().last().unwrap().split_whitespace().collect();
        assert_eq!(values, ["250.0", "125.0", "90.0", "40.0", "80.0", "35.0"]);
    }

    #[test_log::test]
    fn stacked_vertical_totals_fit_their_slot() {
        let o = ascii()
            .width(5)
            .vertical()
            .bar_mode(BarMode::Stacked)
            .show_values(true)
            .show_legend(false)
            .build();
        let s = [Series::new(vec![10.0, 20.0]), Series::new(vec![5.0, 10.0])];
        let out = render(&s, &o);
        assert_eq!(out.lines().last(), Some("15.0 30.0"));
    }
}
