//! Tiling of an image batch into a single grid canvas.
//!
//! `tile_images` is the pure part: it validates the batch rank, allocates a
//! zero-filled canvas of `(nx * h, ny * w, c)` and copies every image into its
//! block. `draw_images` additionally hands the canvas to a [`RenderTarget`]
//! and hides the target's axis indicators.
//!
//! ```
//! use image_tiler::prelude::*;
//! use ndarray::Array3;
//!
//! let batch = Array3::<u8>::from_elem((4, 2, 2), 7);
//! let mut figure = Figure::new();
//! let axes = draw_images(
//!     batch.view().into_dyn(),
//!     GridLayout { nx: 2, ny: 2 },
//!     None,
//!     &mut figure,
//!     &DisplayOptions::default(),
//! )
//! .expect("valid batch");
//! assert!(!axes.axis_visible(AxisKind::X));
//! ```

pub mod batch;
pub mod layout;

pub use batch::ImageBatch;
pub use layout::{GridCell, GridLayout, SeparatorLine};

use crate::error::{RenderError, ShapeError, TileError};
use crate::render::{AxisKind, CurrentSurface, DisplayOptions, RenderTarget};
use crate::sample::Sample;
use log::{debug, warn};
use ndarray::{s, Array3, ArrayD, ArrayViewD, Axis};

/// Composed canvas plus bookkeeping about how the grid was filled.
#[derive(Clone, Debug)]
pub struct TiledCanvas<T> {
    /// `(nx * h, ny * w)` for single-channel input, `(nx * h, ny * w, c)`
    /// otherwise.
    pub canvas: ArrayD<T>,
    pub layout: GridLayout,
    /// `(height, width, channels)` of one tile.
    pub tile_shape: (usize, usize, usize),
    /// Number of images in the input batch.
    pub available: usize,
    /// Number of grid slots that received an image.
    pub filled: usize,
}

impl<T> TiledCanvas<T> {
    /// `true` when the batch had fewer images than grid slots.
    pub fn is_underfilled(&self) -> bool {
        self.filled < self.layout.slots()
    }

    pub fn empty_slots(&self) -> usize {
        self.layout.slots() - self.filled
    }

    pub fn is_grayscale(&self) -> bool {
        self.tile_shape.2 == 1
    }
}

/// Lay out `images` on a `layout.nx x layout.ny` grid.
///
/// Image `k` lands in block row `k % nx`, block column `k / nx`. Exactly
/// `min(N, nx * ny)` images are copied; surplus images are ignored and
/// missing ones leave their block at `T::default()`. An underfilled grid is
/// reported once through `log::warn!` and through [`TiledCanvas::filled`].
pub fn tile_images<T>(
    images: ArrayViewD<'_, T>,
    layout: GridLayout,
) -> Result<TiledCanvas<T>, ShapeError>
where
    T: Copy + Default,
{
    let batch = ImageBatch::from_view(images)?;
    layout.validate()?;

    let (h, w, c) = batch.image_shape();
    let mut canvas = Array3::from_elem((layout.nx * h, layout.ny * w, c), T::default());

    let filled = batch.len().min(layout.slots());
    for cell in layout.cells().take(filled) {
        canvas
            .slice_mut(s![cell.i * h..(cell.i + 1) * h, cell.j * w..(cell.j + 1) * w, ..])
            .assign(&batch.image(cell.index));
    }

    if filled < layout.slots() {
        warn!(
            "not enough images to tile the entire grid: {} images for {}x{} slots",
            batch.len(),
            layout.nx,
            layout.ny
        );
    } else if batch.len() > filled {
        debug!(
            "tile_images ignoring {} images beyond the {}x{} grid",
            batch.len() - filled,
            layout.nx,
            layout.ny
        );
    }
    debug!(
        "tile_images canvas={}x{}x{} filled={}/{}",
        canvas.len_of(Axis(0)),
        canvas.len_of(Axis(1)),
        c,
        filled,
        layout.slots()
    );

    let canvas = if c == 1 {
        canvas.index_axis_move(Axis(2), 0).into_dyn()
    } else {
        canvas.into_dyn()
    };

    Ok(TiledCanvas {
        canvas,
        layout,
        tile_shape: (h, w, c),
        available: batch.len(),
        filled,
    })
}

/// Tile `images` and display the canvas.
///
/// When `target` is `None` the current surface of `surface` is used. The
/// returned reference is the target that received the draw call. Shape errors
/// are raised before the target is touched.
pub fn draw_images<'a, T, S>(
    images: ArrayViewD<'_, T>,
    layout: GridLayout,
    target: Option<&'a mut S::Target>,
    surface: &'a mut S,
    options: &DisplayOptions,
) -> Result<&'a mut S::Target, TileError>
where
    T: Sample,
    S: CurrentSurface,
{
    let tiled = tile_images(images, layout)?;
    let target = match target {
        Some(target) => target,
        None => surface.current(),
    };
    show_tiled(&tiled, target, options)?;
    Ok(target)
}

/// Same as [`draw_images`] with an explicit target.
pub fn draw_images_on<'a, T, R>(
    images: ArrayViewD<'_, T>,
    layout: GridLayout,
    target: &'a mut R,
    options: &DisplayOptions,
) -> Result<&'a mut R, TileError>
where
    T: Sample,
    R: RenderTarget,
{
    let tiled = tile_images(images, layout)?;
    show_tiled(&tiled, target, options)?;
    Ok(target)
}

/// Draw an already composed canvas: one `imshow`, optional separators, then
/// both axes hidden.
pub fn show_tiled<T, R>(
    tiled: &TiledCanvas<T>,
    target: &mut R,
    options: &DisplayOptions,
) -> Result<(), RenderError>
where
    T: Sample,
    R: RenderTarget,
{
    target.imshow(tiled.canvas.view(), options)?;
    if let Some(style) = &options.separators {
        let (h, w, _) = tiled.tile_shape;
        for line in tiled.layout.separator_lines(h, w) {
            target.plot_line(&line, style)?;
        }
    }
    target.set_axis_visible(AxisKind::X, false);
    target.set_axis_visible(AxisKind::Y, false);
    Ok(())
}
