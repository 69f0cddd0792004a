//! Pure numeric helpers: range mapping, extrema, clamping.
//!
//! Every helper is total: empty input and degenerate ranges map to a
//! defined value instead of dividing by zero.

use crate::core::data::Series;

/// Map `values` linearly onto `[0, 1]`.
///
/// * Empty input gives `([], 0.0, 0.0)`.
/// * A flat series (`min == max`) maps every element to `0.5` so it still
///   renders as a visible mid-level line rather than collapsing.
#[must_use]
pub fn normalize(values: &[f64]) -> (Vec<f64>, f64, f64) {
    if values.is_empty() {
        return (Vec::new(), 0.0, 0.0);
    }
    let (min, max) = min_max(values);
    let normalized = values.iter().map(|&v| fraction(v, min, max)).collect();
    (normalized, min, max)
}

/// Affine remap of `value` from `[src_min, src_max]` to `[dst_min, dst_max]`.
///
/// A degenerate source range yields `dst_min`.
#[inline]
#[must_use]
#[allow(clippy::float_cmp)]
pub fn scale(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    if src_min == src_max {
        return dst_min;
    }
    let t = (value - src_min) / (src_max - src_min);
    t.mul_add(dst_max - dst_min, dst_min)
}

/// Position of `value` inside `[min, max]`, `0.5` when the range is flat.
#[inline]
#[must_use]
#[allow(clippy::float_cmp)]
pub fn fraction(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        0.5
    } else {
        (value - min) / (max - min)
    }
}

/// Standard clamp; guards rounding overshoot at grid edges.
#[inline]
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Inclusive extrema, `(0.0, 0.0)` for empty input.
#[must_use]
pub fn min_max(values: &[f64]) -> (f64, f64) {
    let Some((&first, rest)) = values.split_first() else {
        return (0.0, 0.0);
    };
    rest.iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Extrema across every value of every series.
#[must_use]
pub fn global_min_max(series: &[Series]) -> (f64, f64) {
    let mut it = series.iter().flat_map(|s| s.values.iter().copied());
    let Some(first) = it.next() else {
        return (0.0, 0.0);
    };
    it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

#[inline]
#[must_use]
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// `(series, index)` of the first NaN/±∞ in the set, if any.
#[must_use]
pub fn first_non_finite(series: &[Series]) -> Option<(usize, usize)> {
    series.iter().enumerate().find_map(|(s, ser)| {
        ser.values
            .iter()
            .position(|v| !v.is_finite())
            .map(|i| (s, i))
    })
}

/// Round a non-negative real to a grid index; negatives and NaN land on 0.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_index(v: f64) -> usize {
    v.round().max(0.0) as usize
}
