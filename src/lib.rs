#![doc = include_str!("../README.md")]

// Public modules
pub mod error;
pub mod render;
pub mod sample;
pub mod tile;

// Tool support: file I/O, JSON configs and run summaries.
pub mod config;
pub mod diagnostics;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{RenderError, ShapeError, TileError};
pub use crate::render::{DisplayOptions, Figure};
pub use crate::tile::{draw_images, draw_images_on, tile_images, GridLayout, TiledCanvas};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::render::{
        Axes, AxisKind, Colormap, CurrentSurface, DisplayOptions, Figure, Interpolation,
        LineStyle, RenderTarget,
    };
    pub use crate::sample::Sample;
    pub use crate::tile::{draw_images, draw_images_on, tile_images, GridLayout, TiledCanvas};
    pub use crate::{ShapeError, TileError};
}
