//! I/O helpers for image batches and JSON.
//!
//! - `load_image_batch`: read same-sized PNG/JPEG/etc. files into one array.
//! - `save_rgba`: write a rendered raster to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use image::{DynamicImage, RgbaImage};
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Pixel layout images are converted to when loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// 8-bit luma; the batch is `(n, h, w)`.
    #[default]
    Gray,
    /// `(n, h, w, 3)`
    Rgb,
    /// `(n, h, w, 4)`
    Rgba,
}

impl ColorMode {
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Gray => 1,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    fn raw_pixels(self, img: DynamicImage) -> Vec<u8> {
        match self {
            ColorMode::Gray => img.into_luma8().into_raw(),
            ColorMode::Rgb => img.into_rgb8().into_raw(),
            ColorMode::Rgba => img.into_rgba8().into_raw(),
        }
    }
}

/// Load `paths` in order and stack them into one 8-bit batch.
///
/// All images must share the dimensions of the first one.
pub fn load_image_batch(paths: &[PathBuf], color: ColorMode) -> Result<ArrayD<u8>, String> {
    let mut dims: Option<(u32, u32)> = None;
    let mut data = Vec::new();
    for path in paths {
        let img =
            image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
        let size = (img.width(), img.height());
        match dims {
            None => dims = Some(size),
            Some(expected) if expected != size => {
                return Err(format!(
                    "Image {} is {}x{}, expected {}x{}",
                    path.display(),
                    size.0,
                    size.1,
                    expected.0,
                    expected.1
                ));
            }
            Some(_) => {}
        }
        data.extend(color.raw_pixels(img));
    }

    let (w, h) = dims.unwrap_or((0, 0));
    let mut shape = vec![paths.len(), h as usize, w as usize];
    if color != ColorMode::Gray {
        shape.push(color.channels());
    }
    ArrayD::from_shape_vec(IxDyn(&shape), data)
        .map_err(|e| format!("Failed to assemble image batch: {e}"))
}

/// Save an RGBA raster; the format follows the file extension.
pub fn save_rgba(image: &RgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
