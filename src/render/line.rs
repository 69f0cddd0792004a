//! Line rasterizer: character-cell glyph strokes or Braille dots.
//!
//! ### Workflow
//! 1. Every series is projected onto the plot with ONE global min/max, so
//!    series share a vertical scale.
//! 2. Consecutive points are joined with an integer Bresenham walk; every
//!    cell (or dot) the ideal segment crosses is visited exactly once.
//! 3. Cell mode picks one glyph per segment from its direction and stamps a
//!    marker on each data point afterwards. Braille mode lights dots at
//!    2×4 the cell resolution and packs them per cell at the end.

use crate::{
    core::{
        color::{AnsiCode, push_colored},
        config::{Options, Orientation, Style},
        constants::{DECIMAL_PRECISION, FALLBACK_LINE_COLS, FALLBACK_LINE_ROWS, Y_AXIS_WIDTH},
        data::Series,
        scale::{clamp, fraction, global_min_max, to_index},
    },
    render::{
        braille::BrailleCanvas,
        frame::{
            LegendEntry, fit, max_width, push_inline_legend, push_title, row_value,
            series_name, spread_position, text_width, x_label_row, y_axis_label,
        },
        grid::{BLANK, Grid},
    },
};

/// Direction class of one segment, in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Horizontal,
    Vertical,
    /// Down-right or up-left.
    Falling,
    /// Up-right or down-left.
    Rising,
}

impl Stroke {
    #[must_use]
    pub fn of(from: (usize, usize), to: (usize, usize)) -> Self {
        let right = to.0 > from.0;
        let down = to.1 > from.1;
        if from.0 == to.0 {
            Self::Vertical
        } else if from.1 == to.1 {
            Self::Horizontal
        } else if right == down {
            Self::Falling
        } else {
            Self::Rising
        }
    }

    #[must_use]
    pub const fn glyph(self, unicode: bool) -> char {
        match (self, unicode) {
            (Self::Horizontal, true) => '─',
            (Self::Horizontal, false) => '-',
            (Self::Vertical, true) => '│',
            (Self::Vertical, false) => '|',
            (Self::Falling, true) => '╲',
            (Self::Falling, false) => '\\',
            (Self::Rising, true) => '╱',
            (Self::Rising, false) => '/',
        }
    }
}

#[inline]
const fn marker(unicode: bool) -> char {
    if unicode { '•' } else { '*' }
}

#[inline]
const fn rule(unicode: bool) -> &'static str {
    if unicode { "─" } else { "-" }
}

/// Visit every grid point on the segment `from → to`, endpoints included.
///
/// Unit step on the dominant axis, error-accumulator step on the minor one.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn walk_segment(from: (usize, usize), to: (usize, usize), mut visit: impl FnMut(usize, usize)) {
    let (x1, y1) = (to.0 as isize, to.1 as isize);
    let (mut x, mut y) = (from.0 as isize, from.1 as isize);
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        visit(x as usize, y as usize);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Maps `(index, value)` pairs onto a `cols × rows` raster.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub cols: usize,
    pub rows: usize,
    pub min: f64,
    pub max: f64,
    pub orientation: Orientation,
}

impl Projection {
    /// Index `i` of `n` spread over `len` slots, centred when `n == 1`.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn along(i: usize, n: usize, len: usize) -> usize {
        let last = len.saturating_sub(1);
        if n <= 1 {
            return clamp(len / 2, 0, last);
        }
        clamp(to_index(i as f64 / (n - 1) as f64 * last as f64), 0, last)
    }

    /// `(col, row)` of point `i` of `n` with value `v`.
    ///
    /// Horizontal: higher values sit on smaller rows. Vertical: the index
    /// runs down the rows and higher values sit further right.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point(&self, i: usize, n: usize, v: f64) -> (usize, usize) {
        let f = fraction(v, self.min, self.max);
        match self.orientation {
            Orientation::Horizontal => {
                let last = self.rows.saturating_sub(1);
                let row = clamp(to_index((1.0 - f) * last as f64), 0, last);
                (Self::along(i, n, self.cols), row)
            }
            Orientation::Vertical => {
                let last = self.cols.saturating_sub(1);
                let col = clamp(to_index(f * last as f64), 0, last);
                (col, Self::along(i, n, self.rows))
            }
        }
    }

    fn points(&self, values: &[f64]) -> Vec<(usize, usize)> {
        let n = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| self.point(i, n, v))
            .collect()
    }
}

#[inline]
fn series_color(opts: &Options, s: &Series, idx: usize) -> AnsiCode {
    s.color.unwrap_or_else(|| opts.theme.series_color(idx))
}

/// Draw `series` in cell resolution.
///
/// A rule glyph only lands on blank or horizontal cells so steeper strokes
/// survive later flat ones; point markers always overwrite.
#[must_use]
pub fn rasterize_cells(series: &[Series], proj: &Projection, opts: &Options) -> Grid {
    let unicode = opts.unicode_enabled();
    let flat = Stroke::Horizontal.glyph(unicode);
    let mut grid = Grid::new(proj.cols, proj.rows);

    for (idx, s) in series.iter().enumerate() {
        let color = Some(series_color(opts, s, idx));
        let pts = proj.points(&s.values);
        log::trace!("series {idx}: {} points in cell mode", pts.len());

        for seg in pts.windows(2) {
            let glyph = Stroke::of(seg[0], seg[1]).glyph(unicode);
            walk_segment(seg[0], seg[1], |x, y| {
                let cur = grid.glyph(x, y);
                if cur == BLANK || cur == flat {
                    grid.set(x, y, glyph, color);
                }
            });
        }
        for &(x, y) in &pts {
            grid.set(x, y, marker(unicode), color);
        }
    }
    grid
}

/// Draw `series` at Braille dot resolution over `proj.cols × proj.rows` cells.
#[must_use]
pub fn rasterize_braille(series: &[Series], proj: &Projection, opts: &Options) -> Grid {
    let mut canvas = BrailleCanvas::new(proj.cols, proj.rows);
    let dots = Projection {
        cols: canvas.dot_cols(),
        rows: canvas.dot_rows(),
        ..*proj
    };

    for (idx, s) in series.iter().enumerate() {
        let color = Some(series_color(opts, s, idx));
        let pts = dots.points(&s.values);
        log::trace!("series {idx}: {} points in braille mode", pts.len());

        for seg in pts.windows(2) {
            walk_segment(seg[0], seg[1], |x, y| canvas.set(x, y, color));
        }
        for &(x, y) in &pts {
            canvas.set(x, y, color);
        }
    }
    canvas.into_grid()
}

/// Rows and columns left for the plot once chrome is reserved.
fn plot_area(series: &[Series], opts: &Options, gutter: usize) -> (usize, usize) {
    let mut rows = opts.canvas_height();
    if opts.has_title() {
        rows = rows.saturating_sub(1);
    }
    if opts.show_axes {
        let label_row = match opts.orientation {
            Orientation::Horizontal => !opts.labels.is_empty(),
            Orientation::Vertical => true,
        };
        rows = rows.saturating_sub(1 + usize::from(label_row));
    }
    if opts.show_legend && series.len() > 1 {
        rows = rows.saturating_sub(2);
    }
    if rows == 0 {
        rows = FALLBACK_LINE_ROWS;
    }

    let mut cols = opts.canvas_width().saturating_sub(gutter);
    if cols == 0 {
        cols = FALLBACK_LINE_COLS;
    }
    (cols, rows)
}

/// Full line chart text; `series` must already be validated.
#[must_use]
pub fn render(series: &[Series], opts: &Options) -> String {
    let unicode = opts.unicode_enabled();
    let color = opts.color_enabled();
    let muted = Some(&opts.theme.muted);

    let gutter = match (opts.show_axes, opts.orientation) {
        (false, _) => 0,
        (true, Orientation::Horizontal) => Y_AXIS_WIDTH,
        (true, Orientation::Vertical) if opts.labels.is_empty() => 0,
        (true, Orientation::Vertical) => max_width(&opts.labels) + 1,
    };
    let (cols, rows) = plot_area(series, opts, gutter);
    let (min, max) = global_min_max(series);
    let proj = Projection {
        cols,
        rows,
        min,
        max,
        orientation: opts.orientation,
    };
    log::debug!(
        "line chart: {} series on {cols}x{rows} cells, style {}, range [{min}, {max}]",
        series.len(),
        opts.style
    );

    let grid = if opts.style == Style::Braille {
        rasterize_braille(series, &proj, opts)
    } else {
        rasterize_cells(series, &proj, opts)
    };

    let mut out = String::with_capacity((cols + gutter + 1) * (rows + 4) * 2);
    push_title(&mut out, opts);

    // row-wise gutter text
    let row_labels: Vec<String> = match opts.orientation {
        Orientation::Horizontal if opts.show_axes => (0..rows)
            .map(|r| y_axis_label(row_value(r, rows, min, max)))
            .collect(),
        Orientation::Vertical if gutter > 0 => {
            let mut v = vec![" ".repeat(gutter); rows];
            let n = opts.labels.len();
            for (i, l) in opts.labels.iter().enumerate() {
                v[clamp(spread_position(i, n, rows), 0, rows - 1)] = fit(l, gutter);
            }
            v
        }
        _ => Vec::new(),
    };

    for r in 0..rows {
        if let Some(label) = row_labels.get(r) {
            push_colored(&mut out, label, muted, color);
        }
        grid.push_row(&mut out, r, color);
        out.push('\n');
    }

    if opts.show_axes {
        let indent = " ".repeat(gutter);
        out.push_str(&indent);
        push_colored(&mut out, &rule(unicode).repeat(cols), muted, color);
        out.push('\n');

        match opts.orientation {
            Orientation::Horizontal if !opts.labels.is_empty() => {
                out.push_str(&indent);
                push_colored(&mut out, &x_label_row(&opts.labels, cols), muted, color);
                out.push('\n');
            }
            Orientation::Vertical => {
                out.push_str(&indent);
                push_colored(&mut out, &value_range_row(min, max, cols), muted, color);
                out.push('\n');
            }
            Orientation::Horizontal => {}
        }
    }

    if opts.show_legend && series.len() > 1 {
        let swatch = if unicode { "●" } else { "*" };
        let entries: Vec<LegendEntry<'_>> = series
            .iter()
            .enumerate()
            .map(|(i, s)| LegendEntry {
                swatch,
                color: series_color(opts, s, i),
                name: series_name(s.label.as_deref(), i),
            })
            .collect();
        out.push('\n');
        push_inline_legend(&mut out, &entries, color);
    }
    out
}

/// `min` flush left and `max` flush right across `width` columns.
fn value_range_row(min: f64, max: f64, width: usize) -> String {
    let lo = format!("{min:.DECIMAL_PRECISION$}");
    let hi = format!("{max:.DECIMAL_PRECISION$}");
    if text_width(&lo) + text_width(&hi) + 1 > width {
        return fit(&lo, width);
    }
    let mut row = fit(&lo, width - text_width(&hi));
    row.push_str(&hi);
    row
}
