use super::assemble::{accumulate_plane, new_accumulator};
use super::estimate::{AngleEstimate, AngleEstimator};
use super::normalize::{normalize, Normalization};
use super::params::TransformParams;
use super::preprocess::{padded_planes, WorkingSize};
use super::workspace::QuadrantWorkspace;
use crate::diagnostics::{
    elapsed_ms, AccumulatorDims, InputDescriptor, TimingBreakdown, TransformReport,
};
use crate::error::Result;
use crate::image::io::{accumulator_to_gray, save_accumulator};
use crate::image::ImageU8;
use crate::matrix::Matrix;
use image::GrayImage;
use log::{debug, warn};
use std::path::Path;
use std::time::Instant;

/// Fast Hough transform of one image and the slant angle derived from it.
///
/// Construction pads the image, sums the transform of every plane into one
/// accumulator and normalizes it to `[0, 255]`. Afterwards the accumulator
/// is read-only: `apply` can be called any number of times and the
/// accumulator exported, but a new image needs a new instance.
#[derive(Debug)]
pub struct FastHoughTransformer {
    input: InputDescriptor,
    size: WorkingSize,
    params: TransformParams,
    accumulator: Matrix,
    normalization: Normalization,
    timing: TimingBreakdown,
}

impl FastHoughTransformer {
    /// Transform with default parameters (all channels accumulated).
    pub fn new(image: ImageU8<'_>) -> Result<Self> {
        Self::with_params(image, TransformParams::default())
    }

    pub fn with_params(image: ImageU8<'_>, params: TransformParams) -> Result<Self> {
        image.validate()?;
        let total = Instant::now();
        let size = WorkingSize::for_dimensions(image.w, image.h)?;
        debug!(
            "FastHoughTransformer: {}x{}x{} -> n={} mark_in_degree={} ({:.3} exact) levels={}",
            image.w,
            image.h,
            image.channels,
            size.n,
            size.mark_in_degree,
            size.exact_rows_per_degree(),
            size.levels()
        );

        let mut timing = TimingBreakdown::default();
        let start = Instant::now();
        let planes = padded_planes(&image, size.n, params.channel_policy);
        timing.push("pad", elapsed_ms(start));

        let start = Instant::now();
        let mut accumulator = new_accumulator(&size);
        let mut ws = QuadrantWorkspace::new();
        for (idx, plane) in planes.iter().enumerate() {
            accumulate_plane(&mut accumulator, plane, &size, &mut ws);
            debug!("FastHoughTransformer: accumulated plane {idx}");
        }
        timing.push("assemble", elapsed_ms(start));

        let start = Instant::now();
        let normalization = normalize(&mut accumulator);
        timing.push("normalize", elapsed_ms(start));
        match normalization {
            Normalization::Scaled { min, max } => {
                debug!("FastHoughTransformer: normalized range [{min}, {max}]")
            }
            Normalization::Flat { value } => {
                warn!("flat accumulator (every cell = {value}), cleared to zero")
            }
            Normalization::Empty => warn!("empty accumulator"),
        }
        timing.total_ms = elapsed_ms(total);

        Ok(Self {
            input: InputDescriptor {
                width: image.w,
                height: image.h,
                channels: image.channels,
            },
            size,
            params,
            accumulator,
            normalization,
            timing,
        })
    }

    /// Estimated slant angle in degrees, in `[-45, 44]`.
    pub fn apply(&self) -> i32 {
        self.estimate().angle_deg
    }

    /// Angle plus the per-band statistics behind it.
    pub fn estimate(&self) -> AngleEstimate {
        AngleEstimator::new(self.params.estimator.clone())
            .estimate(&self.accumulator, self.size.mark_in_degree)
    }

    /// Runs the estimator and collects everything known about this run.
    pub fn report(&self) -> TransformReport {
        let start = Instant::now();
        let estimate = self.estimate();
        let estimate_ms = elapsed_ms(start);
        let mut timing = self.timing.clone();
        timing.push("estimate", estimate_ms);
        timing.total_ms += estimate_ms;

        TransformReport {
            input: self.input,
            working_size: self.size,
            accumulator: AccumulatorDims {
                rows: self.accumulator.h,
                cols: self.accumulator.w,
            },
            normalization: self.normalization,
            angle_deg: estimate.angle_deg,
            variance: estimate.variance,
            selection: estimate.selection,
            profile: estimate.profile,
            timing,
        }
    }

    pub fn working_size(&self) -> WorkingSize {
        self.size
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    /// Normalized accumulator: `90 · mark_in_degree` rows, values in `[0, 255]`.
    pub fn accumulator(&self) -> &Matrix {
        &self.accumulator
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Timings of the construction stages.
    pub fn timing(&self) -> &TimingBreakdown {
        &self.timing
    }

    pub fn to_gray_image(&self) -> GrayImage {
        accumulator_to_gray(&self.accumulator)
    }

    /// Writes the accumulator as a grayscale image.
    pub fn save_accumulator(&self, path: &Path) -> Result<()> {
        save_accumulator(&self.accumulator, path)
    }
}
