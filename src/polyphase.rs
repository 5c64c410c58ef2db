//! Polyphase decomposition of a prototype FIR filter.
//!
//! A filter `h` with `F` taps split into `P` phases gives phase `p` the taps
//! `h[p], h[p + P], h[p + 2P], ...`. Upsampling by `P` with `h` then needs no zero
//! insertion: output sample `i * P + p` is phase `p` applied to the input ending at `i`.
//!
//! Phases are stored with their taps reversed, so applying a phase is a plain forward
//! inner product with the input window that ends at the current sample. Every phase
//! occupies [`PolyphaseBank::phase_size`] slots; phases with fewer real taps are padded
//! at the front, and [`PolyphaseBank::phase`] only exposes the real taps.

use std::ops::Index;

use crate::error::{violation, Error, Result};
use crate::Sample;

/// Read-only access to a set of polyphase sub-filters.
///
/// This is the only thing the interpolator and the resampler need from a filter bank,
/// so other layouts can be plugged in by implementing it.
pub trait PolyphaseBank<T> {
    /// Number of phases, which is also the interpolation factor.
    fn filter_count(&self) -> usize;

    /// Number of taps of the prototype filter.
    fn original_size(&self) -> usize;

    /// Number of taps of the longest phase.
    fn phase_size(&self) -> usize {
        self.original_size().div_ceil(self.filter_count())
    }

    /// Reversed taps of phase `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.filter_count()`.
    fn phase(&self, index: usize) -> &[T];

    /// Like [`phase`](PolyphaseBank::phase), but reports a missing phase as an error.
    fn get_phase(&self, index: usize) -> Result<&[T]> {
        let count = self.filter_count();
        if index >= count {
            return Err(violation(Error::PhaseOutOfRange { index, count }));
        }
        Ok(self.phase(index))
    }
}

/// A polyphase filter bank owning its taps.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyphase<T> {
    taps: Vec<T>,
    num_phases: usize,
    original_size: usize,
}

impl<T: Sample> Polyphase<T> {
    /// Splits `filter` into `num_phases` phases.
    ///
    /// The filter should be a low-pass designed at the high (interpolated) rate.
    pub fn decompose(filter: &[T], num_phases: usize) -> Result<Self> {
        if num_phases == 0 {
            return Err(violation(Error::ZeroPhases));
        }
        if filter.is_empty() {
            return Err(violation(Error::EmptyFilter));
        }

        let phase_size = filter.len().div_ceil(num_phases);
        let mut taps = vec![T::zero_value(); phase_size * num_phases];
        for (phase_index, phase) in taps.chunks_exact_mut(phase_size).enumerate() {
            for (tap, slot) in phase.iter_mut().rev().enumerate() {
                if let Some(&coefficient) = filter.get(phase_index + tap * num_phases) {
                    *slot = coefficient;
                }
            }
        }

        Ok(Self {
            taps,
            num_phases,
            original_size: filter.len(),
        })
    }
}

impl<T> Polyphase<T> {
    /// Borrows the bank.
    #[inline]
    pub fn as_view(&self) -> PolyphaseView<'_, T> {
        PolyphaseView {
            taps: &self.taps,
            num_phases: self.num_phases,
            original_size: self.original_size,
        }
    }
}

impl<T> PolyphaseBank<T> for Polyphase<T> {
    #[inline]
    fn filter_count(&self) -> usize {
        self.num_phases
    }

    #[inline]
    fn original_size(&self) -> usize {
        self.original_size
    }

    #[inline]
    fn phase(&self, index: usize) -> &[T] {
        phase_of(&self.taps, self.num_phases, self.original_size, index)
    }
}

impl<T> Index<usize> for Polyphase<T> {
    type Output = [T];

    #[inline]
    fn index(&self, index: usize) -> &[T] {
        self.phase(index)
    }
}

/// A borrowed polyphase filter bank, see [`Polyphase::as_view`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyphaseView<'a, T> {
    taps: &'a [T],
    num_phases: usize,
    original_size: usize,
}

impl<T> PolyphaseBank<T> for PolyphaseView<'_, T> {
    #[inline]
    fn filter_count(&self) -> usize {
        self.num_phases
    }

    #[inline]
    fn original_size(&self) -> usize {
        self.original_size
    }

    #[inline]
    fn phase(&self, index: usize) -> &[T] {
        phase_of(self.taps, self.num_phases, self.original_size, index)
    }
}

fn phase_of<T>(taps: &[T], num_phases: usize, original_size: usize, index: usize) -> &[T] {
    assert!(
        index < num_phases,
        "phase {index} out of range for {num_phases} phases"
    );
    let phase_size = original_size.div_ceil(num_phases);
    let real_taps = (original_size + num_phases - 1 - index) / num_phases;
    let end = (index + 1) * phase_size;
    &taps[end - real_taps..end]
}
