//! I/O helpers for input images, accumulator export and JSON reports.
//!
//! - `load_image`: decode a PNG/JPEG/etc. into an owned 8-bit interleaved buffer.
//! - `accumulator_to_gray`: convert a normalized accumulator into an `image::GrayImage`.
//! - `save_accumulator`: write a normalized accumulator as a grayscale image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit buffer with interleaved channels and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct OwnedImageU8 {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl OwnedImageU8 {
    /// Construct an owned buffer given raw interleaved bytes.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::interleaved(self.width, self.height, self.channels, &self.data)
    }
}

/// Load an image from disk keeping its channel layout (L, LA, RGB or RGBA, 8 bits each).
pub fn load_image(path: &Path) -> Result<OwnedImageU8> {
    let img = image::open(path)?;
    let width = img.width() as usize;
    let height = img.height() as usize;
    let color = img.color();
    let (channels, data) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (1, img.into_luma8().into_raw()),
        (false, true) => (2, img.into_luma_alpha8().into_raw()),
        (true, false) => (3, img.into_rgb8().into_raw()),
        (true, true) => (4, img.into_rgba8().into_raw()),
    };
    log::debug!(
        "loaded {} ({}x{}, {} channel(s))",
        path.display(),
        width,
        height,
        channels
    );
    Ok(OwnedImageU8::new(width, height, channels, data))
}

/// Convert an accumulator to an 8-bit grayscale image, clamping into [0, 255].
pub fn accumulator_to_gray(acc: &Matrix) -> GrayImage {
    let mut out = GrayImage::new(acc.w as u32, acc.h as u32);
    for y in 0..acc.h {
        for x in 0..acc.w {
            let v = acc.get(x, y).clamp(0, 255) as u8;
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out
}

/// Save a normalized accumulator as a grayscale image; the format follows the extension.
pub fn save_accumulator(acc: &Matrix, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    accumulator_to_gray(acc).save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("fast-hough-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn accumulator_png_round_trips_through_loader() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("acc.png");
        let acc = Matrix::from_vec(3, 2, vec![0, 128, 255, 300, -4, 7]).unwrap();
        save_accumulator(&acc, &path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.channels(), 1);
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
        assert_eq!(loaded.as_view().data, &[0, 128, 255, 255, 0, 7]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_image_reports_missing_file() {
        let dir = scratch_dir("missing");
        let err = load_image(&dir.join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn write_json_file_creates_parents() {
        let dir = scratch_dir("json");
        let path = dir.join("a").join("b.json");
        write_json_file(&path, &vec![1, 2, 3]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('2'));
        let _ = fs::remove_dir_all(&dir);
    }
}
