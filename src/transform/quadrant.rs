//! Dyadic-pattern line sums over one quarter turn.
//!
//! Input is an `n × n` plane (`n` a power of two). The working buffer is
//! `2n` columns wide: the left half is seeded with the plane and the right
//! half is zero, so shifted reads wrap modulo `2n` into empty space.
//!
//! Level `i` (step `2^i`, half `2^(i-1)`) merges pairs of half-height blocks:
//! for block origin `y`, shift `a` in `[0, step)` and column `x`,
//!
//! ```text
//! next(y + a, x) = cur(y + a/2, x) + cur(y + half + a/2, (x + (a+1)/2) mod 2n)
//! ```
//!
//! so the top half keeps shift `a/2` and the bottom half starts `(a+1)/2`
//! columns further right. After `log2(n)` levels, cell `(x, s)` holds the sum
//! of the plane along the discrete line that starts at column `x` on row 0 and
//! drifts `s` columns to the right over the `n` rows (slope `s / n`, angles in
//! `[0, π/4)` from the vertical). Only additions are used: `O(n² log n)`.
use super::workspace::QuadrantWorkspace;
use crate::image::{ImageView, ImageViewMut};
use crate::matrix::Matrix;

/// Runs the transform with a transient workspace and returns the `2n × n` result.
pub fn quadrant_transform(plane: &Matrix) -> Matrix {
    let mut ws = QuadrantWorkspace::new();
    quadrant_transform_into(plane, &mut ws);
    ws.take_current()
}

/// Runs the transform inside `ws` and borrows the result from it.
pub fn quadrant_transform_into<'a>(plane: &Matrix, ws: &'a mut QuadrantWorkspace) -> &'a Matrix {
    debug_assert_eq!(plane.w, plane.h, "quadrant transform needs a square plane");
    debug_assert!(plane.w.is_power_of_two(), "plane side must be a power of two");
    let n = plane.w;
    let width = 2 * n;

    ws.reset(n);
    ws.current_mut().blit(plane, 0, 0);

    let mut step = 2;
    while step <= n {
        let half = step / 2;
        let (src, dst) = ws.split();
        for y in (0..n).step_by(step) {
            for a in 0..step {
                let up = src.row(y + a / 2);
                let down = src.row(y + half + a / 2);
                let shift = (a + 1) / 2;
                merge_row(dst.row_mut(y + a), up, down, shift, width);
            }
        }
        ws.swap();
        step *= 2;
    }
    ws.current()
}

#[inline]
fn merge_row(out: &mut [i32], up: &[i32], down: &[i32], shift: usize, width: usize) {
    // out[x] = up[x] + down[(x + shift) % width], split at the wrap point
    let (out_head, out_tail) = out.split_at_mut(width - shift);
    let (up_head, up_tail) = up.split_at(width - shift);
    for ((o, &u), &d) in out_head.iter_mut().zip(up_head).zip(&down[shift..]) {
        *o = u + d;
    }
    for ((o, &u), &d) in out_tail.iter_mut().zip(up_tail).zip(&down[..shift]) {
        *o = u + d;
    }
}
