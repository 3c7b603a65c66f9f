//! Owned single-channel `i32` grid in row-major layout (stride == width).
//!
//! Backing store for padded planes, quadrant buffers and the Radon
//! accumulator. Only the operations the transform needs are provided:
//! transpose, clockwise quarter rotation, rectangular blit, additive
//! accumulation and a global min/max scan.
use crate::error::{Error, Result};
use crate::image::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    /// Number of columns
    pub w: usize,
    /// Number of rows
    pub h: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Construct a zero-filled `w × h` matrix.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(w: usize, h: usize, data: Vec<i32>) -> Result<Self> {
        if data.len() != w * h {
            return Err(Error::invalid_input(
                w,
                h,
                format!("expected {} cells, got {}", w * h, data.len()),
            ));
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: i32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn add(&mut self, x: usize, y: usize, v: i32) {
        let i = self.idx(x, y);
        self.data[i] += v;
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn fill(&mut self, v: i32) {
        self.data.fill(v);
    }

    /// Returns the transposed matrix (`h × w`).
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::new(self.h, self.w);
        for y in 0..self.h {
            let src = self.row(y);
            for (x, &v) in src.iter().enumerate() {
                out.set(y, x, v);
            }
        }
        out
    }

    /// Rotates by 90° clockwise: `out(c, r) = self(r, h - 1 - c)`.
    pub fn rotate_cw(&self) -> Matrix {
        let mut out = Matrix::new(self.h, self.w);
        for r in 0..out.h {
            let dst = out.row_mut(r);
            for (c, px) in dst.iter_mut().enumerate() {
                *px = self.data[(self.h - 1 - c) * self.w + r];
            }
        }
        out
    }

    /// Copies `src` into the rectangle starting at `(x0, y0)`, clipped to `self`.
    pub fn blit(&mut self, src: &Matrix, x0: usize, y0: usize) {
        if x0 >= self.w || y0 >= self.h {
            return;
        }
        let cw = src.w.min(self.w - x0);
        let ch = src.h.min(self.h - y0);
        for y in 0..ch {
            let from = &src.row(y)[..cw];
            let start = self.idx(x0, y0 + y);
            self.data[start..start + cw].copy_from_slice(from);
        }
    }

    /// Global `(min, max)`; `None` for an empty matrix.
    pub fn min_max(&self) -> Option<(i32, i32)> {
        let mut it = self.data.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl ImageView for Matrix {
    type Pixel = i32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[i32]> {
        Some(&self.data)
    }
}

impl ImageViewMut for Matrix {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
