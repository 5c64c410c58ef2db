//! Resampling by an arbitrary rational ratio, in one call or in resumable chunks.
//!
//! # Ratio convention
//!
//! `sample_rates` is the number of input samples stepped over per output sample, that is
//! `source_rate / target_rate`. Upsampling 2000 Hz to 3000 Hz uses `2/3`, downsampling by
//! two uses `2/1`. Output sample `k` (counted from the start of the input) sits at input
//! position `k * sample_rates`.
//!
//! # How a sample is computed
//!
//! The polyphase bank with `P` phases describes the input upsampled by `P`. An input
//! position is split into a whole input index and a fraction; the fraction times `P`
//! brackets the position between two neighbouring phases. Both phases are applied to the
//! input (clipped at the signal edges) and the two results are blended with exact integer
//! weights. All position arithmetic uses [`Rational`], so no error accumulates however
//! many samples are produced.
//!
//! # Streaming
//!
//! [`resample_into`] returns [`ContinuationParams`]. Dropping the first
//! `first_input_sample` samples of the input and resampling the rest from `start_point`
//! continues the output exactly where the previous call ended:
//!
//! ```rust
//! use rational_resample::{rational, resample_into, ContinuationParams, Polyphase};
//!
//! let signal: Vec<f64> = (0..64).map(|i| (i as f64 * 0.3).sin()).collect();
//! let bank = Polyphase::decompose(&[0.25, 0.5, 1.0, 0.5, 0.25], 2).unwrap();
//! let ratio = rational(3, 2);
//!
//! let mut output = vec![0.0; 40];
//! let mut offset = 0;
//! let mut next = ContinuationParams::default();
//! for chunk in output.chunks_mut(8) {
//!     offset += next.first_input_sample;
//!     next = resample_into(chunk, &signal[offset..], &bank, ratio, next.start_point).unwrap();
//! }
//! ```

use crate::common::{convolution_length, position, ConvolutionMode, Float};
use crate::error::{violation, Error, Result};
use crate::math::ClippedWindow;
use crate::polyphase::PolyphaseBank;
use crate::{Rational, Sample};


/// One end of the interpolation between two neighbouring phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseSample {
    /// Input index the phase filter ends on.
    pub input_index: usize,
    /// Which phase of the bank to apply.
    pub phase_index: usize,
    /// Integer blend weight of this end.
    pub weight: u64,
}

/// Where the next chunk of a stream starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContinuationParams {
    /// Number of leading samples of the current input the next call no longer needs.
    pub first_input_sample: usize,
    /// Output position to pass as the next call's start point, relative to the input
    /// with `first_input_sample` samples dropped.
    pub start_point: Rational,
}

impl Default for ContinuationParams {
    /// The beginning of a stream.
    fn default() -> Self {
        Self {
            first_input_sample: 0,
            start_point: Rational::from_integer(0),
        }
    }
}

/// Converts a position counted at `source_rate` into the same instant counted at
/// `target_rate`.
#[inline]
pub fn change_sample_rate(source_rate: i64, target_rate: i64, sample: Rational) -> Rational {
    sample * Rational::new(target_rate, source_rate)
}

/// Locates the two phases bracketing a fractional input position.
///
/// The first returned end is the phase at or before the position, the second the phase
/// right after it. When the second phase wraps around to phase 0 its input index moves on
/// by one. The weights are the integer numerator and complement of the remaining
/// sub-phase fraction, so they always add up to its denominator.
///
/// # Panics
///
/// Panics if `num_phases` is zero or `input_index` is negative.
pub fn input_index_to_sample(
    input_index: Rational,
    num_phases: usize,
) -> (PhaseSample, PhaseSample) {
    assert!(num_phases > 0, "a polyphase bank needs at least one phase");
    assert!(
        input_index >= Rational::from_integer(0),
        "input index {input_index} is negative"
    );

    let index_frac = input_index.fract();
    let phase_position = index_frac * num_phases as i64;

    let first_phase = phase_position.floor().to_integer() as usize;
    let second_phase = (first_phase + 1) % num_phases;

    let t = phase_position.fract();
    let second_weight = *t.numer() as u64;
    let first_weight = (*t.denom() - *t.numer()) as u64;

    let first_index = input_index.floor().to_integer() as usize;
    let second_index = if second_phase == 0 {
        first_index + 1
    } else {
        first_index
    };

    (
        PhaseSample {
            input_index: first_index,
            phase_index: first_phase,
            weight: first_weight,
        },
        PhaseSample {
            input_index: second_index,
            phase_index: second_phase,
            weight: second_weight,
        },
    )
}

/// Applies one (reversed) phase `filter` to the input window ending on `last`.
///
/// The window is clipped to the input; taps falling outside of it are skipped without
/// shifting the remaining ones. A window entirely outside the input gives zero.
#[inline]
pub fn dot_product_sample<T: Sample>(input: &[T], filter: &[T], last: usize) -> T {
    ClippedWindow::new(last as isize, filter.len(), input.len())
        .map_or(T::zero_value(), |window| window.dot(input, filter))
}

/// Upper bound on the output positions that can be produced from `input_size` samples.
///
/// This is the length of the signal one gets by expanding the input by `num_phases`,
/// convolving it with the `filter_size`-tap prototype, and stepping through the result at
/// `sample_rates`. A request must end at or before this position.
///
/// In [`ConvolutionMode::Full`] the filter tail counts even for an empty input, so the
/// bound of a stream is the same before and after its consumed input is dropped.
pub fn resampling_length(
    input_size: usize,
    filter_size: usize,
    num_phases: usize,
    sample_rates: Rational,
    mode: ConvolutionMode,
) -> Result<Rational> {
    check_phases(num_phases)?;
    check_ratio(sample_rates)?;
    check_filter(filter_size)?;
    let interpolated_size = num_phases.saturating_mul(input_size);
    let filtered_size = match mode {
        ConvolutionMode::Full => interpolated_size.saturating_add(filter_size - 1),
        ConvolutionMode::Central => convolution_length(interpolated_size, filter_size, mode),
    };
    Ok(position(filtered_size) / sample_rates / num_phases as i64)
}

/// First output position of the given convolution mode.
///
/// [`ConvolutionMode::Full`] starts at zero. [`ConvolutionMode::Central`] starts where the
/// prototype filter first covers the input completely, `(filter_size - 1) / num_phases`
/// input samples in, which assumes the expanded input is at least as long as the filter.
pub fn resampling_start_point(
    filter_size: usize,
    num_phases: usize,
    sample_rates: Rational,
    mode: ConvolutionMode,
) -> Result<Rational> {
    check_phases(num_phases)?;
    check_ratio(sample_rates)?;
    check_filter(filter_size)?;
    match mode {
        ConvolutionMode::Full => Ok(Rational::from_integer(0)),
        ConvolutionMode::Central => {
            Ok(Rational::new(filter_size as i64 - 1, num_phases as i64) / sample_rates)
        }
    }
}

/// Normalized cutoff the prototype filter of the polyphase bank has to be designed with.
///
/// The cutoff is relative to the expanded rate and equals
/// `min(1, 1 / sample_rates) / num_phases`: the input Nyquist frequency when upsampling,
/// the output Nyquist frequency when downsampling.
pub fn resampling_filter_cutoff_exact(
    sample_rates: Rational,
    num_phases: usize,
) -> Result<Rational> {
    check_phases(num_phases)?;
    check_ratio(sample_rates)?;
    let one = Rational::from_integer(1);
    Ok(one.min(sample_rates.recip()) / num_phases as i64)
}

/// [`resampling_filter_cutoff_exact`] as a floating point number, ready for filter design.
pub fn resampling_filter_cutoff(sample_rates: Rational, num_phases: usize) -> Result<Float> {
    let cutoff = resampling_filter_cutoff_exact(sample_rates, num_phases)?;
    Ok(*cutoff.numer() as Float / *cutoff.denom() as Float)
}

/// Group delay of a symmetric `filter_size`-tap prototype, in output samples.
pub fn resampling_delay(
    filter_size: usize,
    num_phases: usize,
    sample_rates: Rational,
) -> Result<Rational> {
    check_phases(num_phases)?;
    check_ratio(sample_rates)?;
    check_filter(filter_size)?;
    Ok(Rational::new(filter_size as i64 - 1, 2 * num_phases as i64) / sample_rates)
}

/// Computes where the next chunk of a stream starts.
///
/// `next_output_sample` is the output position right after the last sample produced. The
/// next call needs the input from `filter_size - 1` expanded samples before the matching
/// input position onwards. While that reaches back to the first input sample nothing can
/// be dropped, and the stream simply resumes at `next_output_sample`.
pub fn continuation(
    next_output_sample: Rational,
    filter_size: usize,
    num_phases: usize,
    sample_rates: Rational,
) -> Result<ContinuationParams> {
    check_phases(num_phases)?;
    check_ratio(sample_rates)?;
    check_filter(filter_size)?;

    let next_input_sample = change_sample_rate(
        *sample_rates.denom(),
        *sample_rates.numer(),
        next_output_sample,
    );
    let convolution_offset = Rational::new(filter_size as i64 - 1, num_phases as i64);
    let first_input_sample = next_input_sample - convolution_offset;

    if first_input_sample <= Rational::from_integer(0) {
        return Ok(ContinuationParams {
            first_input_sample: 0,
            start_point: next_output_sample,
        });
    }

    let input_start_point = first_input_sample.fract() + convolution_offset;
    let output_start_point = change_sample_rate(
        *sample_rates.numer(),
        *sample_rates.denom(),
        input_start_point,
    );
    Ok(ContinuationParams {
        first_input_sample: first_input_sample.floor().to_integer() as usize,
        start_point: output_start_point,
    })
}

/// Resamples `input` by `sample_rates`, filling `output` from output position `start_point`.
///
/// `polyphase` must hold a low-pass prototype designed for the cutoff given by
/// [`resampling_filter_cutoff`]. The requested positions
/// `[start_point, start_point + output.len())` must end within [`resampling_length`].
///
/// Returns where to continue with the next chunk of the same stream.
pub fn resample_into<T, B>(
    output: &mut [T],
    input: &[T],
    polyphase: &B,
    sample_rates: Rational,
    start_point: Rational,
) -> Result<ContinuationParams>
where
    T: Sample,
    B: PolyphaseBank<T> + ?Sized,
{
    let num_phases = polyphase.filter_count();
    let filter_size = polyphase.original_size();
    check_phases(num_phases)?;
    check_ratio(sample_rates)?;
    check_filter(filter_size)?;
    if start_point < Rational::from_integer(0) {
        return Err(violation(Error::NegativeStartPoint { start_point }));
    }

    let max = resampling_length(
        input.len(),
        filter_size,
        num_phases,
        sample_rates,
        ConvolutionMode::Full,
    )?;
    let requested = start_point + output.len() as i64;
    if requested > max {
        return Err(violation(Error::WindowOutOfBounds { requested, max }));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        %sample_rates,
        %start_point,
        output_len = output.len(),
        input_len = input.len(),
        "resampling chunk"
    );

    let mut output_index = start_point;
    for o in output.iter_mut() {
        let input_index =
            change_sample_rate(*sample_rates.denom(), *sample_rates.numer(), output_index);
        let (first, second) = input_index_to_sample(input_index, num_phases);
        let first_phase = polyphase.phase(first.phase_index);
        let second_phase = polyphase.phase(second.phase_index);
        let first_value = dot_product_sample(input, first_phase, first.input_index);
        let second_value = dot_product_sample(input, second_phase, second.input_index);
        *o = T::blend(first_value, first.weight, second_value, second.weight);
        output_index += 1;
    }

    let next = continuation(output_index, filter_size, num_phases, sample_rates)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        first_input_sample = next.first_input_sample,
        start_point = %next.start_point,
        "resampling continues"
    );

    Ok(next)
}

/// Allocating form of [`resample_into`], producing `len` samples from `start_point`.
///
/// Only the samples are returned; use [`resample_into`] to stream.
pub fn resample<T, B>(
    input: &[T],
    polyphase: &B,
    sample_rates: Rational,
    start_point: Rational,
    len: usize,
) -> Result<Vec<T>>
where
    T: Sample,
    B: PolyphaseBank<T> + ?Sized,
{
    let mut output = vec![T::zero_value(); len];
    resample_into(&mut output, input, polyphase, sample_rates, start_point)?;
    Ok(output)
}

#[inline]
fn check_phases(num_phases: usize) -> Result<()> {
    if num_phases == 0 {
        return Err(violation(Error::ZeroPhases));
    }
    Ok(())
}

#[inline]
fn check_filter(filter_size: usize) -> Result<()> {
    if filter_size == 0 {
        return Err(violation(Error::EmptyFilter));
    }
    Ok(())
}

#[inline]
fn check_ratio(ratio: Rational) -> Result<()> {
    if ratio <= Rational::from_integer(0) {
        return Err(violation(Error::NonPositiveRatio { ratio }));
    }
    Ok(())
}
