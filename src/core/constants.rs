//! A collection of constants.

/// Canvas width used when the caller does not pick one.
pub const DEFAULT_WIDTH: usize = 80;
/// Canvas height used when the caller does not pick one.
pub const DEFAULT_HEIGHT: usize = 24;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Numbers are rounded to the first decimal place.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;

/// Columns reserved for `{:7.1} ` y-axis values.
pub const Y_AXIS_WIDTH: usize = 8;

/// Line charts fall back to this many rows when the reserved chrome eats the canvas.
pub const FALLBACK_LINE_ROWS: usize = 10;
/// Line charts fall back to this many columns when the y-axis eats the canvas.
pub const FALLBACK_LINE_COLS: usize = 60;

/// Horizontal bars fall back to this run length when labels eat the canvas.
pub const FALLBACK_BAR_WIDTH: usize = 20;
/// Vertical bars fall back to this height below [`MIN_BAR_HEIGHT`].
pub const FALLBACK_BAR_HEIGHT: usize = 10;
/// Smallest vertical bar height honoured as given.
pub const MIN_BAR_HEIGHT: usize = 3;
/// Widest column a single vertical bar gets.
pub const MAX_BAR_COLUMNS: usize = 3;
/// Blank columns between vertical bar groups.
pub const BAR_GAP: usize = 1;

/// Terminal glyphs are roughly twice as tall as they are wide.
pub const PIE_ASPECT: f64 = 2.0;
/// Pulled in from the cell-centre rim so the circle edge reads smooth.
pub const PIE_EDGE_INSET: f64 = 0.2;
/// Largest pie radius, in rows.
pub const PIE_MAX_RADIUS: usize = 8;
/// Blank columns between the pie and its legend.
pub const PIE_LEGEND_GAP: usize = 3;
/// Sector boundaries start at twelve o'clock.
pub const PIE_START_ANGLE: f64 = -90.0;

/// Sparkline glyph ramp length.
pub const SPARK_LEVELS: usize = 8;
