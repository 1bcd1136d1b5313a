//! Rank normalization of an image batch to `(count, height, width, channels)`.
use crate::error::ShapeError;
use ndarray::{ArrayView3, ArrayView4, ArrayViewD, Axis, Ix4};

/// Borrowed batch of same-shaped images, always viewed as rank 4.
#[derive(Clone, Debug)]
pub struct ImageBatch<'a, T> {
    data: ArrayView4<'a, T>,
}

impl<'a, T> ImageBatch<'a, T> {
    /// Normalize a rank 2, 3 or 4 array into a batch.
    ///
    /// Rank 2 becomes a batch of one single-channel image, rank 3 a batch of
    /// single-channel images. Any other rank is rejected.
    pub fn from_view(images: ArrayViewD<'a, T>) -> Result<Self, ShapeError> {
        let ndim = images.ndim();
        let normalized = match ndim {
            0 | 1 => return Err(ShapeError::TooFewDimensions(ndim)),
            2 => images.insert_axis(Axis(0)).insert_axis(Axis(3)),
            3 => images.insert_axis(Axis(3)),
            4 => images,
            _ => return Err(ShapeError::TooManyDimensions(ndim)),
        };
        let data = normalized
            .into_dimensionality::<Ix4>()
            .map_err(|_| ShapeError::TooManyDimensions(ndim))?;
        Ok(Self { data })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.data.len_of(Axis(3))
    }

    /// `(height, width, channels)` of every image in the batch.
    pub fn image_shape(&self) -> (usize, usize, usize) {
        (self.height(), self.width(), self.channels())
    }

    /// View of image `k` as `(height, width, channels)`.
    ///
    /// Panics if `k >= len()`.
    pub fn image(&self, k: usize) -> ArrayView3<'_, T> {
        self.data.index_axis(Axis(0), k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, IxDyn};

    fn zeros(shape: &[usize]) -> Array<f32, IxDyn> {
        Array::zeros(IxDyn(shape))
    }

    #[test]
    fn rank2_is_single_gray_image() {
        let a = zeros(&[5, 7]);
        let batch = ImageBatch::from_view(a.view()).expect("rank 2 accepted");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.image_shape(), (5, 7, 1));
    }

    #[test]
    fn rank3_gets_channel_axis() {
        let a = zeros(&[3, 4, 6]);
        let batch = ImageBatch::from_view(a.view()).expect("rank 3 accepted");
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.image_shape(), (4, 6, 1));
    }

    #[test]
    fn rank4_keeps_channels() {
        let a = zeros(&[2, 4, 6, 4]);
        let batch = ImageBatch::from_view(a.view()).expect("rank 4 accepted");
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.image_shape(), (4, 6, 4));
        assert_eq!(batch.image(1).dim(), (4, 6, 4));
    }

    #[test]
    fn invalid_ranks_rejected() {
        assert_eq!(
            ImageBatch::from_view(zeros(&[]).view()).unwrap_err(),
            ShapeError::TooFewDimensions(0)
        );
        assert_eq!(
            ImageBatch::from_view(zeros(&[9]).view()).unwrap_err(),
            ShapeError::TooFewDimensions(1)
        );
        assert_eq!(
            ImageBatch::from_view(zeros(&[1, 2, 2, 3, 1]).view()).unwrap_err(),
            ShapeError::TooManyDimensions(5)
        );
    }
}
