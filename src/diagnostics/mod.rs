//! Serializable reports describing one transform run.
//!
//! `TransformReport` gathers the input geometry, the working size, the
//! accumulator dimensions and normalization range, the selected angle with
//! the rule that picked it, the per-band variance profile and stage timings.
//! The CLI writes it as JSON.
mod timing;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};

use crate::transform::{AngleScore, AngleSelection, Normalization, WorkingSize};
use serde::Serialize;

/// Geometry of the ingested image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

/// Dimensions of the accumulator (rows index angle, columns index offset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorDims {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReport {
    pub input: InputDescriptor,
    pub working_size: WorkingSize,
    pub accumulator: AccumulatorDims,
    pub normalization: Normalization,
    pub angle_deg: i32,
    pub variance: f64,
    pub selection: AngleSelection,
    pub profile: Vec<AngleScore>,
    pub timing: TimingBreakdown,
}
