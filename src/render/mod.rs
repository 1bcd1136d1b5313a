//! Rendering backend seam.
//!
//! The tiler only needs a target that can show a 2D/3D array and hide its
//! axis indicators. [`Axes`] is the bundled raster implementation and
//! [`Figure`] the caller-owned holder of the "current" axes.

pub mod axes;
pub mod colormap;
pub mod figure;
pub mod options;

pub use axes::Axes;
pub use colormap::Colormap;
pub use figure::Figure;
pub use options::{DisplayOptions, Interpolation, LineStyle};

use crate::error::RenderError;
use crate::sample::Sample;
use crate::tile::SeparatorLine;
use ndarray::ArrayViewD;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

/// Drawing surface that accepts a composed canvas.
pub trait RenderTarget {
    /// Replace the displayed content with `canvas`.
    ///
    /// `canvas` is `(rows, cols)` for scalar data or `(rows, cols, channels)`
    /// for RGB(A) data.
    fn imshow<T: Sample>(
        &mut self,
        canvas: ArrayViewD<'_, T>,
        options: &DisplayOptions,
    ) -> Result<(), RenderError>;

    /// Draw a straight line over the displayed content.
    fn plot_line(&mut self, line: &SeparatorLine, style: &LineStyle) -> Result<(), RenderError>;

    fn set_axis_visible(&mut self, axis: AxisKind, visible: bool);

    fn axis_visible(&self, axis: AxisKind) -> bool;
}

/// Owner of a default target, used when the caller does not pass one.
pub trait CurrentSurface {
    type Target: RenderTarget;

    /// Current target, created on first use.
    fn current(&mut self) -> &mut Self::Target;
}
