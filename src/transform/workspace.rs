//! Double buffer for the dyadic merge.
//!
//! The quadrant transform alternates two equally sized `2n × n` grids: one
//! holds the current level, the other receives the next one, then the roles
//! swap. Reusing the workspace across calls avoids reallocating both grids.
use crate::matrix::Matrix;
use std::mem;

#[derive(Debug)]
pub struct QuadrantWorkspace {
    current: Matrix,
    next: Matrix,
}

impl QuadrantWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures both buffers are `2n × n` and zeroed.
    pub(crate) fn reset(&mut self, n: usize) {
        for buf in [&mut self.current, &mut self.next] {
            if buf.w == 2 * n && buf.h == n {
                buf.fill(0);
            } else {
                *buf = Matrix::new(2 * n, n);
            }
        }
    }

    /// `(source, destination)` for the merge level in progress.
    pub(crate) fn split(&mut self) -> (&Matrix, &mut Matrix) {
        (&self.current, &mut self.next)
    }

    pub(crate) fn current(&self) -> &Matrix {
        &self.current
    }

    pub(crate) fn current_mut(&mut self) -> &mut Matrix {
        &mut self.current
    }

    pub(crate) fn swap(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Moves the finished buffer out, leaving an empty one behind.
    pub(crate) fn take_current(&mut self) -> Matrix {
        mem::replace(&mut self.current, Matrix::new(0, 0))
    }
}

impl Default for QuadrantWorkspace {
    fn default() -> Self {
        Self {
            current: Matrix::new(0, 0),
            next: Matrix::new(0, 0),
        }
    }
}
