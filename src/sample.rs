use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Represents the value of a single sample, or of a single filter tap.
///
/// This trait is implemented on `f32`, `f64`, `i32` and `i64`. Silence is zero for all of
/// them.
///
/// You can implement this trait on your own type as well if you wish so.
pub trait Sample:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Returns the value corresponding to the absence of signal.
    fn zero_value() -> Self;

    /// Converts an integer interpolation weight into this type.
    fn from_weight(weight: u64) -> Self;

    /// Weighted average of two samples.
    ///
    /// The result should be equal to
    /// `(first * first_weight + second * second_weight) / (first_weight + second_weight)`.
    /// The weights must not both be zero.
    #[inline]
    fn blend(first: Self, first_weight: u64, second: Self, second_weight: u64) -> Self {
        let w1 = Self::from_weight(first_weight);
        let w2 = Self::from_weight(second_weight);
        (first * w1 + second * w2) / (w1 + w2)
    }
}

macro_rules! impl_float_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            fn zero_value() -> $t {
                0.0
            }

            #[inline]
            fn from_weight(weight: u64) -> $t {
                weight as $t
            }
        }
    )*};
}

// Integer blends go through i128 so the weighted sum can not overflow before dividing.
macro_rules! impl_int_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            fn zero_value() -> $t {
                0
            }

            #[inline]
            fn from_weight(weight: u64) -> $t {
                weight as $t
            }

            #[inline]
            fn blend(first: $t, first_weight: u64, second: $t, second_weight: u64) -> $t {
                let (w1, w2) = (first_weight as i128, second_weight as i128);
                let sum = first as i128 * w1 + second as i128 * w2;
                (sum / (w1 + w2)) as $t
            }
        }
    )*};
}

impl_float_sample!(f32, f64);
impl_int_sample!(i32, i64);
