//! Angle utilities shared by the assembler and the estimator.
//!
//! The accumulator covers `[-45°, 45°)` with `45 · mark` rows per half. Row
//! `r` of either half corresponds to `θ = r · (π/2) / rows`; the lower half
//! stores `-θ` bottom-up from the centre (read from the clockwise rotated
//! plane) and the upper half `+θ` top-down (read from the transposed plane).
//! Both halves start at `θ = 0`, so the two centre rows sample the same angle.
use std::ops::Range;

/// Lowest candidate angle in degrees.
pub const MIN_ANGLE_DEG: i32 = -45;
/// One past the highest candidate angle in degrees.
pub const MAX_ANGLE_DEG: i32 = 45;

/// Angle in radians sampled by row `r` of an accumulator half with `rows` total rows.
#[inline]
pub fn row_theta(r: usize, rows: usize) -> f64 {
    r as f64 * std::f64::consts::FRAC_PI_2 / rows as f64
}

/// Signed angle in degrees sampled by accumulator row `row`.
#[inline]
pub fn row_angle_deg(row: usize, mark_in_degree: usize) -> f64 {
    let half = half_rows(mark_in_degree) as f64;
    let mark = mark_in_degree as f64;
    let row = row as f64;
    if row < half {
        -(half - 1.0 - row) / mark
    } else {
        (row - half) / mark
    }
}

/// Accumulator rows whose sampled angle lies in `[angle_deg, angle_deg + step_deg)`.
///
/// Bands tile the accumulator. The `0°` band also takes the centre row of the
/// lower half, and the `-45°` band is one row short since `-45°` itself is
/// never sampled.
pub fn band_rows(angle_deg: i32, step_deg: usize, mark_in_degree: usize) -> Range<usize> {
    let half = half_rows(mark_in_degree) as i64;
    let mark = mark_in_degree as i64;
    let lo = i64::from(angle_deg);
    let hi = lo + step_deg as i64;
    // lower-half row i samples -(half - 1 - i) / mark, upper-half row i samples (i - half) / mark
    let start = if lo <= 0 { half - 1 + lo * mark } else { half + lo * mark };
    let end = if hi <= 0 { half - 1 + hi * mark } else { half + hi * mark };
    let clamp = |v: i64| v.clamp(0, 2 * half) as usize;
    clamp(start)..clamp(end)
}

#[inline]
fn half_rows(mark_in_degree: usize) -> usize {
    (MAX_ANGLE_DEG as usize) * mark_in_degree
}

/// Candidate band start angles in `[-45, 45)` for the given step.
pub fn candidate_angles(step_deg: usize) -> impl Iterator<Item = i32> {
    (MIN_ANGLE_DEG..MAX_ANGLE_DEG).step_by(step_deg.max(1))
}

/// Whether `step_deg` tiles the 90° domain into whole bands.
#[inline]
pub fn is_valid_step(step_deg: usize) -> bool {
    step_deg > 0 && (MAX_ANGLE_DEG - MIN_ANGLE_DEG) as usize % step_deg == 0
}

/// Folds a line orientation in degrees into the `[-45, 45)` domain.
///
/// Line orientations repeat every 180°. Inside the domain the fold is the
/// identity; outside it the result is the orientation a quarter turn away.
#[inline]
pub fn fold_quarter_turn(angle_deg: f64) -> f64 {
    (angle_deg + 45.0).rem_euclid(90.0) - 45.0
}

/// Smallest unsigned difference between two orientations modulo 90°.
#[inline]
pub fn quarter_turn_difference(a_deg: f64, b_deg: f64) -> f64 {
    fold_quarter_turn(a_deg - b_deg).abs()
}
