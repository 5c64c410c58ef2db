//! Index algebra and inner products shared by the interpolator and the resampler.

use std::ops::{Range, Sub};

use crate::Sample;

/// Half-open range of signed sample indices, `[first, last)`.
///
/// Indices may be negative or past the end of a signal; clipping against the signal is
/// done with [`Interval::intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// First index inside the interval.
    pub first: isize,
    /// One past the last index inside the interval.
    pub last: isize,
}

impl Interval {
    /// Creates the interval `[first, last)`.
    #[inline]
    pub const fn new(first: isize, last: isize) -> Self {
        Self { first, last }
    }

    /// The interval covering every index of a signal with `len` samples.
    #[inline]
    pub const fn of_len(len: usize) -> Self {
        Self::new(0, len as isize)
    }

    /// Number of indices inside; zero when `last <= first`.
    #[inline]
    pub fn len(&self) -> usize {
        (self.last - self.first).max(0) as usize
    }

    /// True when no index lies inside.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last <= self.first
    }

    /// Indices present in both intervals.
    #[inline]
    pub fn intersection(&self, other: &Interval) -> Interval {
        Interval::new(self.first.max(other.first), self.last.min(other.last))
    }

    /// Converts a non-empty interval that lies inside `[0, isize::MAX)` to a slice range.
    #[inline]
    fn to_range(self) -> Range<usize> {
        debug_assert!(self.first >= 0 && !self.is_empty());
        self.first as usize..self.last as usize
    }
}

impl Sub<isize> for Interval {
    type Output = Interval;

    #[inline]
    fn sub(self, offset: isize) -> Interval {
        Interval::new(self.first - offset, self.last - offset)
    }
}

/// The overlap between a filter placed over an input signal and the signal itself.
///
/// The filter occupies the input indices `[last - filter_len + 1, last]`. Where it hangs
/// over either end of the input, both ranges shrink together so that every remaining
/// input sample still meets the tap it would meet without clipping. The ranges are never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippedWindow {
    /// Range into the input signal.
    pub input: Range<usize>,
    /// Range into the filter, same length as `input`.
    pub filter: Range<usize>,
}

impl ClippedWindow {
    /// Computes the overlap for a filter of `filter_len` taps whose last tap lies on input
    /// index `last`, over an input of `input_len` samples.
    ///
    /// Returns `None` when the filter does not touch the input at all.
    pub fn new(last: isize, filter_len: usize, input_len: usize) -> Option<Self> {
        let desired = Interval::new(last - filter_len as isize + 1, last + 1);
        let possible = desired.intersection(&Interval::of_len(input_len));
        if possible.is_empty() {
            return None;
        }
        let filter = possible - desired.first;
        Some(Self {
            input: possible.to_range(),
            filter: filter.to_range(),
        })
    }

    /// Inner product of the overlapping parts of `input` and `filter`.
    #[inline]
    pub fn dot<T: Sample>(&self, input: &[T], filter: &[T]) -> T {
        dot_product(&input[self.input.clone()], &filter[self.filter.clone()])
    }
}

/// Inner product of two slices of the same length.
#[inline]
pub fn dot_product<T: Sample>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(T::zero_value(), |acc, (&x, &y)| acc + x * y)
}
