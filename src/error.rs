//! Error types shared by the tiler and the rendering backend.
use thiserror::Error;

/// Input array or grid has a shape the tiler cannot lay out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Rank 1 input, or a zero-dimensional scalar.
    #[error("wrong data shape: expected 2 to 4 dimensions, got {0}")]
    TooFewDimensions(usize),
    #[error("the input contains too many dimensions: expected at most 4, got {0}")]
    TooManyDimensions(usize),
    /// `nx` or `ny` is zero.
    #[error("grid layout must be at least 1x1, got {nx}x{ny}")]
    EmptyGrid { nx: usize, ny: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("cannot display a {0}-dimensional canvas")]
    UnsupportedRank(usize),
    #[error("cannot display {0} channels, expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannels(usize),
    #[error("canvas of {width}x{height} does not fit a raster image")]
    TooLarge { width: usize, height: usize },
}

/// Failure of a full tile-and-draw call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
