//! Raster render target.
//!
//! `Axes` turns a canvas into an `RgbaImage`: scalar canvases go through the
//! colormap after `vmin`/`vmax` scaling, RGB(A) canvases are converted sample
//! by sample (floats in `[0, 1]`, integers in `[0, 255]`). The raster is then
//! upscaled by the requested zoom.
use super::options::{DisplayOptions, Interpolation, LineStyle};
use super::{AxisKind, RenderTarget};
use crate::error::RenderError;
use crate::sample::Sample;
use crate::tile::SeparatorLine;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::debug;
use ndarray::{ArrayViewD, Axis, Ix2, Ix3};

#[derive(Clone, Debug)]
pub struct Axes {
    raster: Option<RgbaImage>,
    limits: Option<(f64, f64)>,
    zoom: u32,
    xaxis_visible: bool,
    yaxis_visible: bool,
    draw_calls: usize,
    lines_drawn: usize,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes {
    pub fn new() -> Self {
        Self {
            raster: None,
            limits: None,
            zoom: 1,
            xaxis_visible: true,
            yaxis_visible: true,
            draw_calls: 0,
            lines_drawn: 0,
        }
    }

    /// Rendered content of the last `imshow`, including plotted lines.
    pub fn raster(&self) -> Option<&RgbaImage> {
        self.raster.as_ref()
    }

    /// `(vmin, vmax)` used for the last scalar canvas.
    pub fn limits(&self) -> Option<(f64, f64)> {
        self.limits
    }

    /// Number of `imshow` calls this axes has received.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn lines_drawn(&self) -> usize {
        self.lines_drawn
    }

    /// Drop the content and restore visible axes.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn rasterize_scalar<T: Sample>(
        &mut self,
        canvas: ArrayViewD<'_, T>,
        options: &DisplayOptions,
    ) -> Result<RgbaImage, RenderError> {
        let canvas = canvas
            .into_dimensionality::<Ix2>()
            .map_err(|_| RenderError::UnsupportedRank(2))?;
        let (rows, cols) = canvas.dim();
        let mut out = new_raster(cols, rows)?;

        let (vmin, vmax) = resolve_limits(canvas.iter().map(|v| v.to_f64()), options);
        self.limits = Some((vmin, vmax));
        let range = vmax - vmin;
        for ((y, x), v) in canvas.indexed_iter() {
            let t = if range > 0.0 {
                (v.to_f64() - vmin) / range
            } else {
                0.0
            };
            out.put_pixel(x as u32, y as u32, Rgba(options.cmap.map(t)));
        }
        Ok(out)
    }

    fn rasterize_color<T: Sample>(
        &mut self,
        canvas: ArrayViewD<'_, T>,
    ) -> Result<RgbaImage, RenderError> {
        let canvas = canvas
            .into_dimensionality::<Ix3>()
            .map_err(|_| RenderError::UnsupportedRank(3))?;
        let (rows, cols, channels) = canvas.dim();
        if channels != 3 && channels != 4 {
            return Err(RenderError::UnsupportedChannels(channels));
        }
        self.limits = None;
        let mut out = new_raster(cols, rows)?;
        for y in 0..rows {
            let row = canvas.index_axis(Axis(0), y);
            for x in 0..cols {
                let px = row.index_axis(Axis(0), x);
                let mut rgba = [0, 0, 0, 255];
                for (dst, &v) in rgba.iter_mut().zip(px.iter()) {
                    *dst = sample_to_u8(v);
                }
                out.put_pixel(x as u32, y as u32, Rgba(rgba));
            }
        }
        Ok(out)
    }
}

impl RenderTarget for Axes {
    fn imshow<T: Sample>(
        &mut self,
        canvas: ArrayViewD<'_, T>,
        options: &DisplayOptions,
    ) -> Result<(), RenderError> {
        let raster = match canvas.ndim() {
            2 => self.rasterize_scalar(canvas, options)?,
            3 => self.rasterize_color(canvas)?,
            n => return Err(RenderError::UnsupportedRank(n)),
        };
        let zoom = options.zoom.max(1);
        let raster = upscale(raster, zoom, options.interpolation)?;
        debug!(
            "Axes::imshow raster={}x{} zoom={}",
            raster.width(),
            raster.height(),
            zoom
        );
        self.raster = Some(raster);
        self.zoom = zoom;
        self.draw_calls += 1;
        Ok(())
    }

    fn plot_line(&mut self, line: &SeparatorLine, style: &LineStyle) -> Result<(), RenderError> {
        let zoom = self.zoom as f32;
        let Some(raster) = self.raster.as_mut() else {
            debug!("Axes::plot_line called before imshow, ignoring");
            return Ok(());
        };
        let to_px = |v: f32| (v + 0.5) * zoom - 0.5;
        let (x0, y0) = (to_px(line.x[0]), to_px(line.y[0]));
        let (x1, y1) = (to_px(line.x[1]), to_px(line.y[1]));
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as usize;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let x = (x0 + (x1 - x0) * t).round() as i64;
            let y = (y0 + (y1 - y0) * t).round() as i64;
            stamp(raster, x, y, style);
        }
        self.lines_drawn += 1;
        Ok(())
    }

    fn set_axis_visible(&mut self, axis: AxisKind, visible: bool) {
        match axis {
            AxisKind::X => self.xaxis_visible = visible,
            AxisKind::Y => self.yaxis_visible = visible,
        }
    }

    fn axis_visible(&self, axis: AxisKind) -> bool {
        match axis {
            AxisKind::X => self.xaxis_visible,
            AxisKind::Y => self.yaxis_visible,
        }
    }
}

fn new_raster(cols: usize, rows: usize) -> Result<RgbaImage, RenderError> {
    let too_large = || RenderError::TooLarge {
        width: cols,
        height: rows,
    };
    let w = u32::try_from(cols).map_err(|_| too_large())?;
    let h = u32::try_from(rows).map_err(|_| too_large())?;
    Ok(RgbaImage::new(w, h))
}

/// Explicit limits win; missing ones fall back to the finite data range.
fn resolve_limits(values: impl Iterator<Item = f64>, options: &DisplayOptions) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (0.0, 1.0) };
    (options.vmin.unwrap_or(lo), options.vmax.unwrap_or(hi))
}

#[inline]
fn sample_to_u8<T: Sample>(v: T) -> u8 {
    let v = v.to_f64();
    if !v.is_finite() {
        return 0;
    }
    if T::IS_FLOAT {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        v.clamp(0.0, 255.0) as u8
    }
}

fn upscale(
    raster: RgbaImage,
    zoom: u32,
    interpolation: Interpolation,
) -> Result<RgbaImage, RenderError> {
    if zoom == 1 || raster.width() == 0 || raster.height() == 0 {
        return Ok(raster);
    }
    let too_large = || RenderError::TooLarge {
        width: raster.width() as usize * zoom as usize,
        height: raster.height() as usize * zoom as usize,
    };
    let w = raster.width().checked_mul(zoom).ok_or_else(too_large)?;
    let h = raster.height().checked_mul(zoom).ok_or_else(too_large)?;
    let filter = match interpolation {
        Interpolation::Nearest => FilterType::Nearest,
        Interpolation::Bilinear => FilterType::Triangle,
    };
    Ok(imageops::resize(&raster, w, h, filter))
}

/// Paint a `width x width` square centred on `(x, y)`, clipped to the raster.
fn stamp(raster: &mut RgbaImage, x: i64, y: i64, style: &LineStyle) {
    let width = style.width as i64;
    if width == 0 {
        return;
    }
    let lo = -(width - 1) / 2;
    let hi = width / 2;
    for dy in lo..=hi {
        for dx in lo..=hi {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && px < raster.width() as i64 && py < raster.height() as i64 {
                raster.put_pixel(px as u32, py as u32, Rgba(style.color));
            }
        }
    }
}
