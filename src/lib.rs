#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod matrix;
pub mod transform;

// Helpers shared by the transform stages.
pub mod angle;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::matrix::Matrix;
pub use crate::transform::{FastHoughTransformer, TransformParams, WorkingSize};

pub use crate::diagnostics::TransformReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use fast_hough::prelude::*;
///
/// # fn main() -> fast_hough::Result<()> {
/// let (w, h) = (64usize, 64usize);
/// let mut gray = vec![0u8; w * h];
/// gray[32 * w..33 * w].fill(255);
///
/// let fht = FastHoughTransformer::new(ImageU8::gray(w, h, &gray))?;
/// println!("slant={}° accumulator={}x{}", fht.apply(), fht.accumulator().w, fht.accumulator().h);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::transform::{ChannelPolicy, TransformParams};
    pub use crate::{FastHoughTransformer, Matrix, WorkingSize};
}
