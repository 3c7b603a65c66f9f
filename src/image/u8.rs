//! Borrowed 8-bit image view with interleaved channels.
use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Interleaved samples per pixel (1 = gray, 3 = RGB, ...)
    pub channels: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed single-channel view.
    pub fn gray(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            channels: 1,
            stride: w,
            data,
        }
    }

    /// Tightly packed interleaved view with `channels` samples per pixel.
    pub fn interleaved(w: usize, h: usize, channels: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            channels,
            stride: w * channels,
            data,
        }
    }

    /// Checks that the view describes a non-empty grid backed by enough bytes.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(Error::invalid_input(self.w, self.h, "image has zero area"));
        }
        if self.channels == 0 {
            return Err(Error::invalid_input(self.w, self.h, "image has no channels"));
        }
        let row_len = self.w * self.channels;
        if self.stride < row_len {
            return Err(Error::invalid_input(
                self.w,
                self.h,
                format!("stride {} shorter than row of {row_len} bytes", self.stride),
            ));
        }
        let needed = (self.h - 1) * self.stride + row_len;
        if self.data.len() < needed {
            return Err(Error::invalid_input(
                self.w,
                self.h,
                format!("buffer holds {} bytes, need {needed}", self.data.len()),
            ));
        }
        Ok(())
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

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
        self.stride
    }
    #[inline]
    fn row_len(&self) -> usize {
        self.w * self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        let len = self.w * self.channels;
        (self.stride == len).then_some(&self.data[..len * self.h])
    }
}
