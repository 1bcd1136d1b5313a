use image_tiler::config::tile;
use image_tiler::diagnostics::{TileReport, TimingBreakdown};
use image_tiler::image::io::{load_image_batch, write_json_file};
use image_tiler::render::Figure;
use image_tiler::tile::{show_tiled, tile_images};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = tile::load_config(Path::new(&config_path))?;
    if config.inputs.is_empty() {
        return Err("Config lists no input images".to_string());
    }

    let mut timing = TimingBreakdown::default();
    let batch = timing.measure("load", || load_image_batch(&config.inputs, config.color))?;
    let tiled = timing
        .measure("tile", || tile_images(batch.view(), config.grid))
        .map_err(|e| e.to_string())?;

    let mut figure = Figure::new();
    timing
        .measure("render", || show_tiled(&tiled, figure.gca(), &config.display))
        .map_err(|e| e.to_string())?;
    timing.measure("save", || figure.save(&config.output.image))?;

    let raster_size = figure.gca().raster().map(|r| r.dimensions());
    println!(
        "Saved {}x{} grid of {} images to {}",
        config.grid.nx,
        config.grid.ny,
        tiled.filled,
        config.output.image.display()
    );
    if tiled.is_underfilled() {
        println!("Warning: {} grid slots left empty", tiled.empty_slots());
    }

    if let Some(summary_path) = &config.output.summary_json {
        let report = TileReport::from_tiled(&tiled, timing).with_raster_size(raster_size);
        write_json_file(summary_path, &report)?;
        println!("Saved tiling summary to {}", summary_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: tile_demo <config.json>".to_string()
}
