pub mod io;

pub use self::io::{load_image_batch, save_rgba, write_json_file, ColorMode};
