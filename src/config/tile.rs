use crate::image::ColorMode;
use crate::render::DisplayOptions;
use crate::tile::GridLayout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TileToolConfig {
    /// Images stacked into the batch, in fill order.
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub color: ColorMode,
    #[serde(default)]
    pub grid: GridLayout,
    #[serde(default)]
    pub display: DisplayOptions,
    pub output: TileOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TileOutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    #[serde(rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TileToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<TileToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
