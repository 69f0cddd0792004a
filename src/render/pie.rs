//! Circular pie rasterizer with an aligned legend.
//!
//! Cells are classified by aspect-corrected polar coordinates around the
//! pie centre. Sectors run clockwise from twelve o'clock; cell angles are
//! shifted into `[-90, 270)` so the sector boundaries never wrap and one
//! binary search over their ascending ends finds the owner.

use std::fmt::Write;

use crate::{
    core::{
        color::{AnsiCode, push_colored},
        config::Options,
        constants::{PIE_ASPECT, PIE_EDGE_INSET, PIE_LEGEND_GAP, PIE_MAX_RADIUS, PIE_START_ANGLE},
        data::Series,
    },
    render::{
        frame::{fit, max_width, text_width},
        grid::Grid,
    },
};

const UNICODE_SYMBOLS: [char; 8] = ['█', '▓', '▒', '░', '●', '◆', '■', '▲'];
const ASCII_SYMBOLS: [char; 8] = ['#', '*', '+', 'o', '=', '%', '@', 'x'];

/// Sum of the positive values; the rest count as zero.
#[must_use]
pub fn positive_total(values: &[f64]) -> f64 {
    values.iter().filter(|&&v| v > 0.0).sum()
}

/// Share of each value in percent. Non-positive values get 0.
#[must_use]
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total = positive_total(values);
    values
        .iter()
        .map(|&v| if v > 0.0 && total > 0.0 { v / total * 100.0 } else { 0.0 })
        .collect()
}

/// One angular slice, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub start: f64,
    pub end: f64,
    pub percent: f64,
}

#[must_use]
pub fn sectors(percents: &[f64]) -> Vec<Sector> {
    let mut start = PIE_START_ANGLE;
    percents
        .iter()
        .map(|&percent| {
            let end = start + percent * 3.6;
            let s = Sector { start, end, percent };
            start = end;
            s
        })
        .collect()
}

/// Owner of `angle` (already shifted into `[-90, 270)`): the sector with
/// `start <= angle < end`. Angles past the last boundary, from rounding,
/// go to the last non-empty sector.
#[must_use]
pub fn sector_at(sectors: &[Sector], angle: f64) -> Option<usize> {
    let k = sectors.partition_point(|s| s.end <= angle);
    if k < sectors.len() {
        return Some(k);
    }
    sectors.iter().rposition(|s| s.percent > 0.0)
}

/// Cell `(dx, dy)` from the centre, in cells: `Some(angle)` when inside a
/// pie of `radius` rows.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn classify(dx: f64, dy: f64, radius: usize) -> Option<f64> {
    let x = dx / PIE_ASPECT;
    if x.hypot(dy) > radius as f64 + 0.5 - PIE_EDGE_INSET {
        return None;
    }
    let mut angle = dy.atan2(x).to_degrees();
    if angle < PIE_START_ANGLE {
        angle += 360.0;
    }
    Some(angle)
}

/// Width in columns of a pie with `radius`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pie_cols(radius: usize) -> usize {
    2 * (radius as f64 * PIE_ASPECT) as usize + 1
}

/// Largest radius whose rows fit `rows` and whose pie plus legend fits
/// `width`, capped and never below one.
#[must_use]
pub fn fit_radius(rows: usize, width: usize, legend_width: usize) -> usize {
    let mut r = (rows.saturating_sub(1) / 2).clamp(1, PIE_MAX_RADIUS);
    let extra = if legend_width == 0 {
        0
    } else {
        PIE_LEGEND_GAP + legend_width
    };
    while r > 1 && pie_cols(r) + extra > width {
        r -= 1;
    }
    r
}

struct Slice<'a> {
    label: String,
    value: f64,
    percent: f64,
    symbol: char,
    color: &'a AnsiCode,
}

/// Pie chart text; `series` must be validated with a positive total.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render(series: &Series, opts: &Options) -> String {
    let unicode = opts.unicode_enabled();
    let color = opts.color_enabled();
    let percents = percentages(&series.values);
    let sectors = sectors(&percents);
    let colors: Vec<AnsiCode> = (0..sectors.len())
        .map(|i| opts.theme.series_color(i))
        .collect();

    let slices: Vec<Slice<'_>> = series
        .values
        .iter()
        .zip(&percents)
        .enumerate()
        .map(|(i, (&value, &percent))| Slice {
            label: opts
                .label(i)
                .map_or_else(|| format!("Item {}", i + 1), str::to_owned),
            value,
            percent,
            symbol: symbol(i, unicode, color),
            color: &colors[i],
        })
        .collect();

    let legend = if opts.show_legend {
        legend_lines(&slices, opts.show_values, color)
    } else {
        Vec::new()
    };
    let legend_width = legend.iter().map(|(_, w)| *w).max().unwrap_or(0);

    let rows = opts
        .canvas_height()
        .saturating_sub(if opts.has_title() { 2 } else { 0 });
    let radius = fit_radius(rows, opts.canvas_width(), legend_width);
    log::debug!(
        "pie: {} slices, radius {radius}, legend width {legend_width}",
        slices.len()
    );

    let grid = rasterize(&sectors, radius, &slices);
    let pie_rows = grid.rows();
    let height = pie_rows.max(legend.len());
    let pie_top = (height - pie_rows) / 2;
    let legend_top = (height - legend.len()) / 2;
    let blank = " ".repeat(grid.cols());

    let mut out = String::new();
    if opts.has_title() {
        push_colored(&mut out, &opts.title, opts.theme.text.as_ref(), color);
        out.push_str("\n\n");
    }
    for row in 0..height {
        let mut line = String::new();
        match row.checked_sub(pie_top).filter(|r| *r < pie_rows) {
            Some(r) => grid.push_row(&mut line, r, color),
            None => line.push_str(&blank),
        }
        if let Some((text, _)) = row.checked_sub(legend_top).and_then(|r| legend.get(r)) {
            line.extend(std::iter::repeat_n(' ', PIE_LEGEND_GAP));
            line.push_str(text);
        }
        line.truncate(line.trim_end().len());
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[inline]
fn symbol(i: usize, unicode: bool, color: bool) -> char {
    match (color, unicode) {
        (true, true) => UNICODE_SYMBOLS[0],
        (true, false) => ASCII_SYMBOLS[0],
        (false, true) => UNICODE_SYMBOLS[i % UNICODE_SYMBOLS.len()],
        (false, false) => ASCII_SYMBOLS[i % ASCII_SYMBOLS.len()],
    }
}

#[allow(clippy::cast_precision_loss)]
fn rasterize(sectors: &[Sector], radius: usize, slices: &[Slice<'_>]) -> Grid {
    let cols = pie_cols(radius);
    let rows = 2 * radius + 1;
    let (cx, cy) = ((cols / 2) as f64, radius as f64);
    let mut grid = Grid::new(cols, rows);
    for row in 0..rows {
        for col in 0..cols {
            let Some(angle) = classify(col as f64 - cx, row as f64 - cy, radius) else {
                continue;
            };
            if let Some(k) = sector_at(sectors, angle) {
                let s = &slices[k];
                grid.set(col, row, s.symbol, Some(*s.color));
            }
        }
    }
    grid
}

/// `(text, display width)` per slice.
fn legend_lines(slices: &[Slice<'_>], show_values: bool, color: bool) -> Vec<(String, usize)> {
    let label_w = max_width(&slices.iter().map(|s| s.label.as_str()).collect::<Vec<_>>());
    slices
        .iter()
        .map(|s| {
            let mut plain = String::new();
            plain.push_str(&fit(&s.label, label_w));
            if show_values {
                let _ = write!(plain, "  {:6.1}", s.value);
            }
            let _ = write!(plain, "  ({:5.1}%)", s.percent);

            let mut text = String::from("  ");
            push_colored(&mut text, &s.symbol.to_string(), Some(s.color), color);
            text.push(' ');
            text.push_str(&plain);
            let width = 4 + text_width(&plain);
            (text, width)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Style;

    #[test_log::test]
    fn percentages_close_to_one_hundred() {
        let p = percentages(&[33.33, 33.33, 33.34]);
        assert!((p.iter().sum::<f64>() - 100.0).abs() < 0.1);
    }

    #[test_log::test]
    fn non_positive_values_take_no_share() {
        let p = percentages(&[-5.0, 0.0, 10.0, 30.0]);
        assert_eq!(p, vec![0.0, 0.0, 25.0, 75.0]);
    }

    #[test_log::test]
    fn sectors_run_clockwise_from_twelve() {
        let s = sectors(&[25.0, 75.0]);
        assert!((s[0].start + 90.0).abs() < 1e-9);
        assert!((s[0].end).abs() < 1e-9);
        assert!((s[1].end - 270.0).abs() < 1e-9);
    }

    #[test_log::test]
    fn binary_search_skips_empty_sectors() {
        let s = sectors(&[50.0, 0.0, 50.0]);
        assert_eq!(sector_at(&s, -90.0), Some(0));
        assert_eq!(sector_at(&s, 89.9), Some(0));
        assert_eq!(sector_at(&s, 90.0), Some(2));
        // rounding overflow past the final boundary
        assert_eq!(sector_at(&s, 270.0), Some(2));
        let tail_empty = sectors(&[100.0, 0.0]);
        assert_eq!(sector_at(&tail_empty, 270.0), Some(0));
    }

    #[test_log::test]
    fn cells_classify_by_aspect_corrected_distance() {
        // two columns per row of distance
        assert!(classify(4.0, 0.0, 2).is_some());
        assert!(classify(6.0, 0.0, 2).is_none());
        assert!(classify(0.0, 2.0, 2).is_some());
        assert!(classify(0.0, 3.0, 2).is_none());
        // straight up is the start angle, left wraps to 180
        let up = classify(0.0, -1.0, 2).unwrap();
        assert!((up + 90.0).abs() < 1e-9);
        let left = classify(-2.0, 0.0, 2).unwrap();
        assert!((left - 180.0).abs() < 1e-9);
        let up_left = classify(-2.0, -1.0, 2).unwrap();
        assert!((up_left - 225.0).abs() < 1e-9);
    }

    #[test_log::test]
    fn radius_shrinks_to_fit_the_legend() {
        assert_eq!(fit_radius(24, 80, 20), PIE_MAX_RADIUS);
        assert_eq!(pie_cols(8), 33);
        // 4r + 1 + 3 + 20 <= 40  =>  r = 4
        assert_eq!(fit_radius(24, 40, 20), 4);
        assert_eq!(fit_radius(0, 5, 50), 1);
    }

    #[test_log::test]
    fn halves_split_left_and_right() {
        let o = Options::builder()
            .size(40, 7)
            .style(Style::Ascii)
            .color(false)
            .show_legend(false)
            .build();
        let out = render(&Series::new(vec![50.0, 50.0]), &o);
        let lines: Vec<&str> = out.lines().collect();
        // radius 3: 7 rows, centre row split at the middle column
        assert_eq!(lines.len(), 7);
        let mid: Vec<char> = lines[3].chars().collect();
        assert_eq!(mid.len(), 13);
        assert_eq!(mid[7], '#');
        assert_eq!(mid[5], '*');
    }

    #[test_log::test]
    fn legend_lines_show_value_and_share() {
        let o = Options::builder()
            .size(60, 10)
            .style(Style::Ascii)
            .color(false)
            .labels(["cats", "dogs"])
            .show_values(true)
            .build();
        let out = render(&Series::new(vec![1.0, 3.0]), &o);
        assert!(out.contains("# cats     1.0  ( 25.0%)"));
        assert!(out.contains("* dogs     3.0  ( 75.0%)"));
    }
}
