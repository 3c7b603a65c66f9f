//! Working-size computation, zero padding and channel splitting.
//!
//! The transform runs on an `N × N` plane where `N` is the next power of two
//! of the larger image side. The image occupies the top-left corner and the
//! bottom/right border is zero.
use super::params::ChannelPolicy;
use crate::error::{Error, Result};
use crate::image::{ImageU8, ImageView};
use crate::matrix::Matrix;
use serde::Serialize;

/// Degrees in a half turn; the accumulator spans half of it.
pub const HALF_TURN_DEG: usize = 180;

/// Padded side `n` and the number of accumulator rows per degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingSize {
    pub n: usize,
    pub mark_in_degree: usize,
}

impl WorkingSize {
    /// `n = 2^ceil(log2(max(width, height)))`, `mark_in_degree = max(1, 2n / 180)`.
    ///
    /// Unless `2n` is a multiple of 180 the integer division truncates, so one
    /// band of `mark_in_degree` rows covers slightly more than a degree. That
    /// bias is kept as is.
    pub fn for_dimensions(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_input(width, height, "image has zero area"));
        }
        let n = width.max(height).next_power_of_two();
        let mark_in_degree = (2 * n / HALF_TURN_DEG).max(1);
        Ok(Self { n, mark_in_degree })
    }

    /// `floor(n * sqrt(2))`, the longest line through the padded plane.
    pub fn diagonal(&self) -> usize {
        (self.n as f64 * std::f64::consts::SQRT_2) as usize
    }

    pub fn accumulator_rows(&self) -> usize {
        HALF_TURN_DEG / 2 * self.mark_in_degree
    }

    pub fn accumulator_cols(&self) -> usize {
        let d = self.diagonal();
        d / 2 + d
    }

    /// Number of dyadic merge levels, `log2(n)`.
    pub fn levels(&self) -> u32 {
        self.n.trailing_zeros()
    }

    /// Rows per degree before integer truncation.
    pub fn exact_rows_per_degree(&self) -> f64 {
        2.0 * self.n as f64 / HALF_TURN_DEG as f64
    }
}

/// Copies channel `channel` of `image` into the top-left of a zeroed `n × n` plane.
pub fn pad_channel(image: &ImageU8<'_>, channel: usize, n: usize) -> Matrix {
    let mut plane = Matrix::new(image.w, image.h);
    for y in 0..image.h {
        let src = image.row(y);
        for (x, px) in src.iter().skip(channel).step_by(image.channels).enumerate() {
            plane.set(x, y, i32::from(*px));
        }
    }
    pad_to(&plane, n)
}

/// BT.601 luma of every pixel, padded to `n × n`.
pub fn pad_luma(image: &ImageU8<'_>, n: usize) -> Matrix {
    let mut plane = Matrix::new(image.w, image.h);
    for y in 0..image.h {
        let src = image.row(y);
        for (x, px) in src.chunks_exact(image.channels).enumerate() {
            plane.set(x, y, luma(px));
        }
    }
    pad_to(&plane, n)
}

/// Splits `image` into the padded planes the accumulator is built from.
pub fn padded_planes(image: &ImageU8<'_>, n: usize, policy: ChannelPolicy) -> Vec<Matrix> {
    match policy {
        ChannelPolicy::Accumulate => (0..image.channels)
            .map(|c| pad_channel(image, c, n))
            .collect(),
        ChannelPolicy::Luma => vec![pad_luma(image, n)],
    }
}

fn pad_to(plane: &Matrix, n: usize) -> Matrix {
    let mut padded = Matrix::new(n, n);
    padded.blit(plane, 0, 0);
    padded
}

/// Integer BT.601 weights; a second channel (alpha) and anything after RGB is ignored.
fn luma(px: &[u8]) -> i32 {
    match *px {
        [v] | [v, _] => i32::from(v),
        [r, g, b, ..] => (299 * i32::from(r) + 587 * i32::from(g) + 114 * i32::from(b) + 500) / 1000,
        [] => 0,
    }
}
