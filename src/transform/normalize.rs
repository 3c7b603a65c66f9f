//! Linear rescale of the accumulator into `[0, 255]`.
use crate::matrix::Matrix;
use serde::Serialize;

/// Largest value of a normalized accumulator.
pub const NORMALIZED_MAX: i32 = 255;

/// What the rescale found and did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Normalization {
    /// Cells mapped with `round((v - min) / (max - min) · 255)`.
    Scaled { min: i32, max: i32 },
    /// Every cell held `value`; the accumulator was cleared to zero.
    Flat { value: i32 },
    /// Nothing to scale.
    Empty,
}

/// Rescales `acc` in place so that its minimum maps to 0 and maximum to 255.
pub fn normalize(acc: &mut Matrix) -> Normalization {
    let Some((min, max)) = acc.min_max() else {
        return Normalization::Empty;
    };
    if max == min {
        acc.fill(0);
        return Normalization::Flat { value: min };
    }
    let range = (i64::from(max) - i64::from(min)) as f64;
    let scale = f64::from(NORMALIZED_MAX);
    for v in acc.data_mut() {
        let shifted = (i64::from(*v) - i64::from(min)) as f64;
        *v = (shifted / range * scale).round() as i32;
    }
    Normalization::Scaled { min, max }
}
