//! Scalar element types accepted in an image batch.
//!
//! The tiler itself only needs `Copy + Default` (the default value is the
//! zero used to pad unfilled grid slots). Rendering additionally needs a lossy
//! conversion to `f64` and to know whether samples are normalized floats or
//! integer intensities.

pub trait Sample: Copy + Default + PartialOrd + std::fmt::Debug {
    /// `true` for floating point samples, whose RGB(A) range is `[0, 1]`.
    const IS_FLOAT: bool;

    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($is_float:expr => $($t:ty),*) => {
        $(
            impl Sample for $t {
                const IS_FLOAT: bool = $is_float;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(false => u8, u16, u32, u64, i8, i16, i32, i64);
impl_sample!(true => f32, f64);
