use crate::common::{convolution_length, position, ConvolutionMode};
use crate::error::{violation, Error, Result};
use crate::math::ClippedWindow;
use crate::polyphase::PolyphaseBank;
use crate::Sample;

/// Raises the sample rate by the number of phases in `polyphase`.
///
/// The result is what expanding `input` with zeros and convolving it with the prototype
/// filter would give, but computed straight from the phases. `output` receives the window
/// `[offset, offset + output.len())` of that full convolution, whose length is
/// `convolution_length(input.len() * P, F, Full)`.
///
/// The prototype filter must run at the output rate with its cutoff at the input Nyquist
/// frequency; no low-pass filtering is needed afterwards. Output samples where the filter
/// does not touch the input are left as they are.
pub fn interpolate_into<T, B>(
    output: &mut [T],
    input: &[T],
    polyphase: &B,
    offset: usize,
) -> Result<()>
where
    T: Sample,
    B: PolyphaseBank<T> + ?Sized,
{
    let rate = polyphase.filter_count();
    if rate == 0 {
        return Err(violation(Error::ZeroPhases));
    }
    let max_len = convolution_length(
        input.len().saturating_mul(rate),
        polyphase.original_size(),
        ConvolutionMode::Full,
    );
    let end = match offset.checked_add(output.len()) {
        Some(end) if end <= max_len => end,
        _ => {
            return Err(violation(Error::WindowOutOfBounds {
                requested: position(offset.saturating_add(output.len())),
                max: position(max_len),
            }));
        }
    };

    for (o, index) in output.iter_mut().zip(offset..end) {
        let phase = polyphase.phase(index % rate);
        let last = (index / rate) as isize;
        if let Some(window) = ClippedWindow::new(last, phase.len(), input.len()) {
            *o = window.dot(input, phase);
        }
    }
    Ok(())
}

/// Allocating form of [`interpolate_into`], producing `len` samples starting at `offset`.
///
/// Positions where the filter does not touch the input are zero.
pub fn interpolate<T, B>(input: &[T], polyphase: &B, offset: usize, len: usize) -> Result<Vec<T>>
where
    T: Sample,
    B: PolyphaseBank<T> + ?Sized,
{
    let mut output = vec![T::zero_value(); len];
    interpolate_into(&mut output, input, polyphase, offset)?;
    Ok(output)
}
