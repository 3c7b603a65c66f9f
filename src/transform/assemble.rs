//! Assembly of two quadrant transforms into the `(angle, offset)` accumulator.
//!
//! One plane yields two quadrant transforms:
//! - `r_clock` from the plane rotated 90° clockwise, feeding the lower half of
//!   the accumulator (negative angles, written bottom-up from the centre row);
//! - `r_t` from the transposed plane, feeding the upper half (positive angles).
//!
//! For accumulator half-row `r`, `θ = r · (π/2) / rows` and the dyadic slope
//! row is `y = round(n · tan θ)`. The offset column `col` is re-projected to a
//! start column of the dyadic line:
//! - lower half, `col ∈ [-d/2, n)`: `x = round(|col| / cos θ)`, skipped when
//!   `x ≥ n`, mirrored to `2n - x` for negative `col`;
//! - upper half, `col ∈ [0, d)`: `x = n - round(col / cos θ)`; a negative `x`
//!   wraps to `2n + x` unless `y + x < 0`, in which case the cell is skipped.
//!
//! Here `d = floor(n·√2)` and accumulator column `d/2 + col`. Every read is
//! added, so repeated calls (one per channel) sum into the same accumulator.
use super::preprocess::WorkingSize;
use super::quadrant::quadrant_transform_into;
use super::workspace::QuadrantWorkspace;
use crate::angle::row_theta;
use crate::image::ImageView;
use crate::matrix::Matrix;

/// Zeroed accumulator with the dimensions implied by `size`.
pub fn new_accumulator(size: &WorkingSize) -> Matrix {
    Matrix::new(size.accumulator_cols(), size.accumulator_rows())
}

/// Adds the line sums of one padded `n × n` plane into `acc`.
pub fn accumulate_plane(
    acc: &mut Matrix,
    plane: &Matrix,
    size: &WorkingSize,
    ws: &mut QuadrantWorkspace,
) {
    debug_assert_eq!((acc.w, acc.h), (size.accumulator_cols(), size.accumulator_rows()));
    debug_assert_eq!((plane.w, plane.h), (size.n, size.n));

    let clockwise = plane.rotate_cw();
    let r_clock = quadrant_transform_into(&clockwise, ws);
    accumulate_negative_half(acc, r_clock, size);

    let transposed = plane.transpose();
    let r_t = quadrant_transform_into(&transposed, ws);
    accumulate_positive_half(acc, r_t, size);
}

fn accumulate_negative_half(acc: &mut Matrix, r_clock: &Matrix, size: &WorkingSize) {
    let n = size.n as i64;
    let rows = acc.h;
    let half_rows = rows / 2;
    let center = (size.diagonal() / 2) as i64;

    for r in 0..half_rows {
        let theta = row_theta(r, rows);
        let y = (n as f64 * theta.tan()).round() as i64;
        if y >= n {
            continue;
        }
        let cos = theta.cos();
        let src = r_clock.row(y as usize);
        let dst_y = half_rows - 1 - r;
        for col in -center..n {
            let mut x = (col.abs() as f64 / cos).round() as i64;
            if x >= n {
                continue;
            }
            if col < 0 {
                x = 2 * n - x;
            }
            acc.add((center + col) as usize, dst_y, src[x as usize]);
        }
    }
}

fn accumulate_positive_half(acc: &mut Matrix, r_t: &Matrix, size: &WorkingSize) {
    let n = size.n as i64;
    let rows = acc.h;
    let half_rows = rows / 2;
    let diagonal = size.diagonal() as i64;
    let center = diagonal / 2;

    for r in 0..half_rows {
        let theta = row_theta(r, rows);
        let y = (n as f64 * theta.tan()).round() as i64;
        if y >= n {
            continue;
        }
        let cos = theta.cos();
        let src = r_t.row(y as usize);
        let dst_y = half_rows + r;
        for col in 0..diagonal {
            let mut x = n - (col as f64 / cos).round() as i64;
            if x < 0 {
                if y + x < 0 {
                    continue;
                }
                x += 2 * n;
            }
            acc.add((center + col) as usize, dst_y, src[x as usize]);
        }
    }
}
