mod common;

use common::synthetic_image::{constant_gray_batch, patterned_color_batch};
use image_tiler::error::RenderError;
use image_tiler::image::io::{load_image_batch, ColorMode};
use image_tiler::prelude::*;
use image_tiler::tile::SeparatorLine;
use ndarray::{Array, ArrayViewD, IxDyn};

/// Target that records every call it receives.
#[derive(Default)]
struct RecordingTarget {
    calls: Vec<String>,
    shapes: Vec<Vec<usize>>,
    hidden: Vec<AxisKind>,
}

impl RenderTarget for RecordingTarget {
    fn imshow<T: Sample>(
        &mut self,
        canvas: ArrayViewD<'_, T>,
        _options: &DisplayOptions,
    ) -> Result<(), RenderError> {
        self.calls.push("imshow".to_string());
        self.shapes.push(canvas.shape().to_vec());
        Ok(())
    }

    fn plot_line(&mut self, _line: &SeparatorLine, _style: &LineStyle) -> Result<(), RenderError> {
        self.calls.push("plot_line".to_string());
        Ok(())
    }

    fn set_axis_visible(&mut self, axis: AxisKind, visible: bool) {
        self.calls.push(format!("axis {axis:?} {visible}"));
        if !visible {
            self.hidden.push(axis);
        }
    }

    fn axis_visible(&self, axis: AxisKind) -> bool {
        !self.hidden.contains(&axis)
    }
}

struct RecordingSurface {
    default: RecordingTarget,
}

impl CurrentSurface for RecordingSurface {
    type Target = RecordingTarget;

    fn current(&mut self) -> &mut RecordingTarget {
        &mut self.default
    }
}

#[test]
fn one_draw_call_then_axes_hidden() {
    let batch = constant_gray_batch(4, 2, 2);
    let mut target = RecordingTarget::default();
    let out = draw_images_on(
        batch.view().into_dyn(),
        GridLayout { nx: 2, ny: 2 },
        &mut target,
        &DisplayOptions::default(),
    )
    .expect("valid batch");
    assert_eq!(
        out.calls,
        vec!["imshow", "axis X false", "axis Y false"]
    );
    assert_eq!(out.shapes, vec![vec![4, 4]]);
}

#[test]
fn explicit_target_wins_over_current_surface() {
    let batch = patterned_color_batch(2, 3, 3, 3);
    let mut surface = RecordingSurface {
        default: RecordingTarget::default(),
    };
    let mut explicit = RecordingTarget::default();
    draw_images(
        batch.view().into_dyn(),
        GridLayout { nx: 1, ny: 2 },
        Some(&mut explicit),
        &mut surface,
        &DisplayOptions::default(),
    )
    .expect("valid batch");
    assert!(surface.default.calls.is_empty());
    assert_eq!(explicit.shapes, vec![vec![3, 6, 3]]);
}

#[test]
fn missing_target_uses_current_surface() {
    let batch = constant_gray_batch(1, 4, 4);
    let mut surface = RecordingSurface {
        default: RecordingTarget::default(),
    };
    let target = draw_images(
        batch.view().into_dyn(),
        GridLayout::default(),
        None,
        &mut surface,
        &DisplayOptions::default(),
    )
    .expect("valid batch");
    assert!(!target.axis_visible(AxisKind::X));
    assert!(!target.axis_visible(AxisKind::Y));
    assert_eq!(surface.default.calls.len(), 3);
}

#[test]
fn shape_error_leaves_target_untouched() {
    let flat = Array::<f32, _>::zeros(IxDyn(&[16]));
    let mut target = RecordingTarget::default();
    let err = draw_images_on(
        flat.view(),
        GridLayout::default(),
        &mut target,
        &DisplayOptions::default(),
    )
    .map(|_| ())
    .unwrap_err();
    assert_eq!(err, TileError::Shape(ShapeError::TooFewDimensions(1)));
    assert!(target.calls.is_empty());
}

#[test]
fn separators_drawn_between_tiles() {
    let batch = constant_gray_batch(6, 2, 2);
    let mut target = RecordingTarget::default();
    let opts = DisplayOptions::default().with_separators(LineStyle::default());
    draw_images_on(
        batch.view().into_dyn(),
        GridLayout { nx: 2, ny: 3 },
        &mut target,
        &opts,
    )
    .expect("valid batch");
    let lines = target.calls.iter().filter(|c| *c == "plot_line").count();
    assert_eq!(lines, 3);
    assert_eq!(target.calls.first().map(String::as_str), Some("imshow"));
}

#[test]
fn figure_axes_renders_tiled_grid() {
    let batch = constant_gray_batch(3, 2, 2);
    let mut figure = Figure::new();
    let axes = draw_images(
        batch.view().into_dyn(),
        GridLayout { nx: 2, ny: 2 },
        None,
        &mut figure,
        &DisplayOptions::default().with_limits(Some(0.0), Some(3.0)),
    )
    .expect("valid batch");

    assert_eq!(axes.draw_calls(), 1);
    let raster = axes.raster().expect("raster");
    assert_eq!(raster.dimensions(), (4, 4));
    // Image 1 (value 2) sits below image 0; the empty slot renders black.
    assert_eq!(raster.get_pixel(0, 2).0, [170, 170, 170, 255]);
    assert_eq!(raster.get_pixel(3, 3).0, [0, 0, 0, 255]);
    assert_eq!(figure.axes().len(), 1);
}

#[test]
fn unsupported_channel_count_surfaces_render_error() {
    let batch = Array::<u8, _>::zeros(IxDyn(&[2, 2, 2, 2]));
    let mut figure = Figure::new();
    let err = draw_images(
        batch.view(),
        GridLayout { nx: 2, ny: 1 },
        None,
        &mut figure,
        &DisplayOptions::default(),
    )
    .map(|_| ())
    .unwrap_err();
    assert_eq!(err, TileError::Render(RenderError::UnsupportedChannels(2)));
}

#[test]
fn images_on_disk_to_png() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().expect("tempdir");
    let mut paths = Vec::new();
    for k in 0..4u8 {
        let path = dir.path().join(format!("in{k}.png"));
        image::RgbImage::from_pixel(5, 3, image::Rgb([k * 60, 0, 255 - k * 60]))
            .save(&path)
            .expect("write png");
        paths.push(path);
    }

    let batch = load_image_batch(&paths, ColorMode::Rgb).expect("batch loads");
    let mut figure = Figure::new();
    draw_images(
        batch.view(),
        GridLayout { nx: 2, ny: 2 },
        None,
        &mut figure,
        &DisplayOptions::default().with_zoom(2, Interpolation::Nearest),
    )
    .expect("valid batch");

    let out = dir.path().join("out/grid.png");
    figure.save(&out).expect("png written");
    let written = image::open(&out).expect("png readable").into_rgba8();
    assert_eq!(written.dimensions(), (20, 12));
    // Top-right block holds image 2.
    assert_eq!(written.get_pixel(19, 0).0, [120, 0, 135, 255]);
}
