use super::colormap::Colormap;
use serde::{Deserialize, Serialize};

/// Display options forwarded to [`RenderTarget::imshow`](super::RenderTarget::imshow).
///
/// The tiler never reads these apart from `separators`; they only describe
/// how the target should turn samples into pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Colormap for single-channel canvases. Ignored for RGB(A).
    pub cmap: Colormap,
    /// Value mapped to the low end of the colormap. Defaults to the data min.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmin: Option<f64>,
    /// Value mapped to the high end of the colormap. Defaults to the data max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmax: Option<f64>,
    /// Resampling used when `zoom > 1`.
    pub interpolation: Interpolation,
    /// Integer upscale factor applied to the rendered raster (>= 1).
    pub zoom: u32,
    /// Lines drawn on the tile boundaries. `None` draws nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separators: Option<LineStyle>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            cmap: Colormap::Gray,
            vmin: None,
            vmax: None,
            interpolation: Interpolation::Nearest,
            zoom: 1,
            separators: None,
        }
    }
}

impl DisplayOptions {
    pub fn with_cmap(mut self, cmap: Colormap) -> Self {
        self.cmap = cmap;
        self
    }

    pub fn with_limits(mut self, vmin: Option<f64>, vmax: Option<f64>) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    pub fn with_zoom(mut self, zoom: u32, interpolation: Interpolation) -> Self {
        self.zoom = zoom;
        self.interpolation = interpolation;
        self
    }

    pub fn with_separators(mut self, style: LineStyle) -> Self {
        self.separators = Some(style);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Nearest,
    Bilinear,
}

/// Stroke used for separator lines, in raster pixels after zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: [u8; 4],
    pub width: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0, 255],
            width: 2,
        }
    }
}
