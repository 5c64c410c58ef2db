use num_rational::Ratio;

/// Exact fraction used for every sample position and rate ratio.
///
/// Always kept reduced, so [`Ratio::numer`] and [`Ratio::denom`] are the canonical pair.
pub type Rational = Ratio<i64>;

/// Floating point type used where a result can not stay rational.
#[cfg(not(feature = "64bit"))]
pub type Float = f32;

/// Floating point type used where a result can not stay rational.
#[cfg(feature = "64bit")]
pub type Float = f64;

/// Which part of a convolution is kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvolutionMode {
    /// Every position where the filter overlaps the input at least partially.
    #[default]
    Full,
    /// Only the positions where the filter overlaps the input completely.
    Central,
}

/// Length of the result of convolving `input_len` samples with `filter_len` taps.
///
/// Either operand being empty gives an empty result.
#[inline]
pub fn convolution_length(input_len: usize, filter_len: usize, mode: ConvolutionMode) -> usize {
    if input_len == 0 || filter_len == 0 {
        return 0;
    }
    match mode {
        ConvolutionMode::Full => input_len.saturating_add(filter_len - 1),
        ConvolutionMode::Central => input_len.max(filter_len) - input_len.min(filter_len) + 1,
    }
}

/// Shorthand for building a [`Rational`].
///
/// # Panics
///
/// Panics if `denom` is zero.
#[inline]
pub fn rational(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom)
}

/// A sample index as a [`Rational`] position, saturating at `i64::MAX`.
#[inline]
pub(crate) fn position(index: usize) -> Rational {
    Rational::from_integer(i64::try_from(index).unwrap_or(i64::MAX))
}

macro_rules! assert_error_traits {
    ($to_test:path) => {
        const _: () = {
            const fn test_error_traits<T: std::error::Error + Send + Sync + 'static>() {}
            test_error_traits::<$to_test>();
        };
    };
}
pub(crate) use assert_error_traits;
