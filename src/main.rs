use image_tiler::prelude::*;
use ndarray::Array3;

fn main() {
    // Demo stub: tiles a synthetic batch of constant images on a 3x2 grid
    let (n, h, w) = (5usize, 16usize, 24usize);
    let batch = Array3::from_shape_fn((n, h, w), |(k, _, _)| k as f32 / n as f32);

    let mut figure = Figure::new();
    let layout = GridLayout { nx: 3, ny: 2 };
    let options = DisplayOptions::default();
    match draw_images(batch.view().into_dyn(), layout, None, &mut figure, &options) {
        Ok(axes) => {
            let (rw, rh) = axes.raster().map(|r| r.dimensions()).unwrap_or((0, 0));
            println!("raster={rw}x{rh} draw_calls={}", axes.draw_calls());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
