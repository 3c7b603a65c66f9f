//! Fast Hough (discrete Radon) transform and slant-angle estimation.
//!
//! Overview
//! - [`preprocess`] picks the working size `n` (next power of two of the
//!   larger side), zero-pads the image to `n × n` and splits it into planes.
//! - [`quadrant`] computes dyadic-pattern line sums over a quarter turn with
//!   additions only, in `O(n² log n)`, using a double-buffered
//!   [`QuadrantWorkspace`].
//! - [`assemble`] runs the quadrant transform on the clockwise-rotated and on
//!   the transposed plane and re-indexes both results into one accumulator
//!   whose rows span `[-45°, 45°)` and whose columns are line offsets. Planes
//!   of a multi-channel image are summed into the same accumulator.
//! - [`normalize`] rescales the accumulator to `[0, 255]`.
//! - [`estimate`] picks the angle band with the largest variance, with
//!   explicit outcomes for ridge bands and spread-free responses.
//!
//! [`FastHoughTransformer`] strings the stages together.

pub mod assemble;
pub mod estimate;
pub mod normalize;
pub mod params;
mod pipeline;
pub mod preprocess;
pub mod quadrant;
mod workspace;

pub use estimate::{AngleEstimate, AngleEstimator, AngleScore, AngleSelection};
pub use normalize::{normalize, Normalization};
pub use params::{CellSupport, ChannelPolicy, EstimatorParams, TransformParams};
pub use pipeline::FastHoughTransformer;
pub use preprocess::WorkingSize;
pub use quadrant::{quadrant_transform, quadrant_transform_into};
pub use workspace::QuadrantWorkspace;
