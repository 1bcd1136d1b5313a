use crate::error::ShapeError;
use serde::{Deserialize, Serialize};

/// Number of image slots along each canvas axis.
///
/// `nx` slots are stacked along the row (vertical) axis and `ny` along the
/// column (horizontal) axis, so the canvas is `nx * height` rows by
/// `ny * width` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub nx: usize,
    pub ny: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { nx: 1, ny: 1 }
    }
}

/// One slot of the grid: block row `i`, block column `j` and the batch index
/// that fills it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub i: usize,
    pub j: usize,
    pub index: usize,
}

/// Straight line in canvas pixel coordinates (`x` = column, `y` = row).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeparatorLine {
    pub x: [f32; 2],
    pub y: [f32; 2],
}

impl GridLayout {
    pub fn new(nx: usize, ny: usize) -> Result<Self, ShapeError> {
        let layout = Self { nx, ny };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.nx == 0 || self.ny == 0 {
            return Err(ShapeError::EmptyGrid {
                nx: self.nx,
                ny: self.ny,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn slots(&self) -> usize {
        self.nx * self.ny
    }

    /// Cells in fill order: block columns outer, block rows inner, so the
    /// batch index of cell `(i, j)` is `i + j * nx`.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let nx = self.nx;
        (0..self.ny).flat_map(move |j| {
            (0..nx).map(move |i| GridCell {
                i,
                j,
                index: i + j * nx,
            })
        })
    }

    /// Lines on the inner block boundaries of a canvas built from
    /// `height x width` tiles. Vertical lines come first.
    pub fn separator_lines(&self, height: usize, width: usize) -> Vec<SeparatorLine> {
        let rows = (self.nx * height) as f32;
        let cols = (self.ny * width) as f32;
        let mut lines = Vec::with_capacity(self.nx + self.ny);
        for j in 1..self.ny {
            let x = (width * j) as f32;
            lines.push(SeparatorLine {
                x: [x, x],
                y: [0.0, rows - 1.0],
            });
        }
        for i in 1..self.nx {
            let y = (height * i) as f32;
            lines.push(SeparatorLine {
                x: [0.0, cols - 1.0],
                y: [y, y],
            });
        }
        lines
    }
}
