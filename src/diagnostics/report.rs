use super::timing::TimingBreakdown;
use crate::tile::{GridLayout, TiledCanvas};
use serde::Serialize;

/// Shape of the batch that was tiled.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub count: usize,
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

/// Summary of a tiling run written by the demo tool.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileReport {
    pub input: InputDescriptor,
    pub grid: GridLayout,
    pub canvas_shape: Vec<usize>,
    pub filled: usize,
    pub empty_slots: usize,
    pub underfilled: bool,
    pub raster_size: Option<(u32, u32)>,
    pub timing: TimingBreakdown,
}

impl TileReport {
    pub fn from_tiled<T>(tiled: &TiledCanvas<T>, timing: TimingBreakdown) -> Self {
        let (height, width, channels) = tiled.tile_shape;
        Self {
            input: InputDescriptor {
                count: tiled.available,
                height,
                width,
                channels,
            },
            grid: tiled.layout,
            canvas_shape: tiled.canvas.shape().to_vec(),
            filled: tiled.filled,
            empty_slots: tiled.empty_slots(),
            underfilled: tiled.is_underfilled(),
            raster_size: None,
            timing,
        }
    }

    pub fn with_raster_size(mut self, size: Option<(u32, u32)>) -> Self {
        self.raster_size = size;
        self
    }
}
