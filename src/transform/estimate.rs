//! Slant-angle selection by per-band variance of the normalized accumulator.
//!
//! Each candidate angle owns the accumulator rows whose sampled angle falls
//! in `[angle, angle + step)` (see [`band_rows`]). The band statistic is the
//! variance of its cells (zero cells excluded by default); the band with the
//! largest variance wins, and on an exact tie the first band found is kept.
//! A ridge concentrated at a few offsets (a straight edge or a text baseline)
//! makes its band the most peaked one.
//!
//! Two degenerate profiles are resolved before the variance ranking:
//! - a *ridge band*, where every sampled angle responds at no more than one
//!   offset and each response is the accumulator maximum, has zero variance
//!   only because nothing is left to spread; the first such band wins;
//! - a response with signal in some band but no positive variance anywhere
//!   (a line outside the `±45°` family, e.g. a vertical one, lights every
//!   band the same way) reports the domain boundary, `-45`.
//!
//! With no signal at all the result is `0`.
use super::normalize::NORMALIZED_MAX;
use super::params::{CellSupport, EstimatorParams};
use crate::angle::{band_rows, candidate_angles, is_valid_step, MIN_ANGLE_DEG};
use crate::image::ImageView;
use crate::matrix::Matrix;
use log::{debug, warn};
use serde::Serialize;

/// Statistics of one candidate band.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleScore {
    pub angle_deg: i32,
    /// Accumulator rows in the band.
    pub rows: usize,
    pub count: u64,
    pub min: i32,
    pub max: i32,
    pub mean: f64,
    pub variance: f64,
}

impl AngleScore {
    /// At most one counted cell per row, every one at the accumulator maximum.
    pub fn is_ridge(&self) -> bool {
        self.count <= self.rows as u64 && self.min == NORMALIZED_MAX
    }
}

/// Which rule picked the angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AngleSelection {
    /// Largest band variance.
    Variance,
    /// First ridge band.
    Ridge,
    /// Signal without spread in any band: the `-45°` boundary.
    Boundary,
    /// No counted cells anywhere.
    #[default]
    Empty,
}

/// Selected angle plus the statistics of every band that had cells to count.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleEstimate {
    pub angle_deg: i32,
    pub variance: f64,
    pub selection: AngleSelection,
    pub profile: Vec<AngleScore>,
}

#[derive(Clone, Debug, Default)]
pub struct AngleEstimator {
    params: EstimatorParams,
}

impl AngleEstimator {
    pub fn new(params: EstimatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    /// Scans every candidate band of a normalized accumulator.
    pub fn estimate(&self, acc: &Matrix, mark_in_degree: usize) -> AngleEstimate {
        let step = self.effective_step();
        let mut profile = Vec::new();
        let mut best: Option<(i32, f64)> = None;
        let mut ridge: Option<i32> = None;

        for angle in candidate_angles(step) {
            let rows = band_rows(angle, step, mark_in_degree);
            let Some(score) = self.score_band(acc, angle, rows) else {
                continue;
            };
            if ridge.is_none() && score.is_ridge() {
                ridge = Some(angle);
            }
            if score.variance > best.map_or(0.0, |(_, v)| v) {
                best = Some((angle, score.variance));
            }
            profile.push(score);
        }

        let signal = profile.iter().any(|s| s.max > 0);
        let (angle_deg, selection) = match (ridge, best) {
            (Some(angle), _) => (angle, AngleSelection::Ridge),
            (None, Some((angle, _))) => (angle, AngleSelection::Variance),
            (None, None) if signal => (MIN_ANGLE_DEG, AngleSelection::Boundary),
            (None, None) => (0, AngleSelection::Empty),
        };
        let variance = profile
            .iter()
            .find(|s| s.angle_deg == angle_deg)
            .map_or(0.0, |s| s.variance);

        debug!(
            "AngleEstimator: angle={} ({:?}) variance={:.3} bands={}",
            angle_deg,
            selection,
            variance,
            profile.len()
        );
        AngleEstimate {
            angle_deg,
            variance,
            selection,
            profile,
        }
    }

    fn effective_step(&self) -> usize {
        let step = self.params.angle_step_deg as usize;
        if is_valid_step(step) {
            step
        } else {
            warn!("angle step {step}° does not divide 90°, using 1°");
            1
        }
    }

    fn score_band(
        &self,
        acc: &Matrix,
        angle_deg: i32,
        rows: std::ops::Range<usize>,
    ) -> Option<AngleScore> {
        let band_len = rows.len();
        let mut count = 0u64;
        let mut sum = 0u64;
        let mut sum_sq = 0u64;
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for y in rows.filter(|&y| y < acc.h) {
            for &v in acc.row(y) {
                if v == 0 && self.params.cell_support == CellSupport::NonZero {
                    continue;
                }
                min = min.min(v);
                max = max.max(v);
                let v = v.max(0) as u64;
                count += 1;
                sum += v;
                sum_sq += v * v;
            }
        }
        if count == 0 {
            return None;
        }
        let mean = sum as f64 / count as f64;
        let variance = sum_sq as f64 / count as f64 - mean * mean;
        Some(AngleScore {
            angle_deg,
            rows: band_len,
            count,
            min,
            max,
            mean,
            variance,
        })
    }
}
