use super::axes::Axes;
use super::CurrentSurface;
use crate::image::io::save_rgba;
use std::path::Path;

/// Caller-owned collection of axes with a notion of the current one.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    axes: Vec<Axes>,
    current: Option<usize>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current axes, created if the figure has none.
    pub fn gca(&mut self) -> &mut Axes {
        let idx = match self.current {
            Some(idx) => idx,
            None => self.add_axes(),
        };
        &mut self.axes[idx]
    }

    /// Append a fresh axes, make it current and return its index.
    pub fn add_axes(&mut self) -> usize {
        self.axes.push(Axes::new());
        let idx = self.axes.len() - 1;
        self.current = Some(idx);
        idx
    }

    /// Make axes `idx` current. Returns `false` if there is no such axes.
    pub fn sca(&mut self, idx: usize) -> bool {
        if idx < self.axes.len() {
            self.current = Some(idx);
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_mut(&mut self, idx: usize) -> Option<&mut Axes> {
        self.axes.get_mut(idx)
    }

    /// Write the raster of the current axes to `path` (format from the
    /// extension).
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let axes = self
            .current
            .and_then(|idx| self.axes.get(idx))
            .ok_or("Figure has no axes to save")?;
        let raster = axes
            .raster()
            .ok_or("Current axes has nothing drawn")?;
        save_rgba(raster, path)
    }
}

impl CurrentSurface for Figure {
    type Target = Axes;

    fn current(&mut self) -> &mut Axes {
        self.gca()
    }
}
