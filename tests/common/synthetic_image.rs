use ndarray::{Array3, Array4};

/// Batch of `n` single-channel `h x w` images where image `k` is filled with
/// `k + 1`, so every tile is distinguishable and none equals the zero padding.
pub fn constant_gray_batch(n: usize, h: usize, w: usize) -> Array4<f32> {
    assert!(h > 0 && w > 0, "image dimensions must be positive");
    Array4::from_shape_fn((n, h, w, 1), |(k, _, _, _)| (k + 1) as f32)
}

/// Batch of `n` RGB(A) images with a per-image, per-pixel unique pattern.
pub fn patterned_color_batch(n: usize, h: usize, w: usize, c: usize) -> Array4<u8> {
    Array4::from_shape_fn((n, h, w, c), |(k, y, x, ch)| {
        (k * 50 + y * 7 + x * 3 + ch) as u8
    })
}

/// Simple high-contrast checkerboard stack, `(n, h, w)`.
pub fn checkerboard_stack(n: usize, h: usize, w: usize, cell: usize) -> Array3<u8> {
    assert!(cell > 0, "cell size must be positive");
    Array3::from_shape_fn((n, h, w), |(_, y, x)| {
        if (x / cell + y / cell) % 2 == 0 {
            32
        } else {
            220
        }
    })
}
