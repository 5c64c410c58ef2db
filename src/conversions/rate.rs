use crate::error::{violation, Error, Result};
use crate::Sample;

/// Erases all but every `rate`th sample, starting with the first.
///
/// `output` must hold exactly `ceil(input.len() / rate)` samples. No filtering is done;
/// low-pass the input first if aliasing matters.
pub fn decimate_into<T: Sample>(output: &mut [T], input: &[T], rate: usize) -> Result<()> {
    if rate == 0 {
        return Err(violation(Error::ZeroRate));
    }
    let expected = input.len().div_ceil(rate);
    if output.len() != expected {
        return Err(violation(Error::OutputLength {
            expected,
            actual: output.len(),
        }));
    }

    for (o, &i) in output.iter_mut().zip(input.iter().step_by(rate)) {
        *o = i;
    }
    Ok(())
}

/// Allocating form of [`decimate_into`].
pub fn decimate<T: Sample>(input: &[T], rate: usize) -> Result<Vec<T>> {
    if rate == 0 {
        return Err(violation(Error::ZeroRate));
    }
    let mut output = vec![T::zero_value(); input.len().div_ceil(rate)];
    decimate_into(&mut output, input, rate)?;
    Ok(output)
}

/// Inserts `rate - 1` zeros after every sample to raise the sample rate by `rate`.
///
/// `output` must hold exactly `input.len() * rate` samples. Follow the expansion with a
/// low-pass filter to interpolate the signal.
pub fn expand_into<T: Sample>(output: &mut [T], input: &[T], rate: usize) -> Result<()> {
    if rate == 0 {
        return Err(violation(Error::ZeroRate));
    }
    let expected = expanded_len(input.len(), rate, output.len())?;
    if output.len() != expected {
        return Err(violation(Error::OutputLength {
            expected,
            actual: output.len(),
        }));
    }

    for (chunk, &i) in output.chunks_exact_mut(rate).zip(input) {
        chunk[0] = i;
        chunk[1..].fill(T::zero_value());
    }
    Ok(())
}

/// Allocating form of [`expand_into`].
pub fn expand<T: Sample>(input: &[T], rate: usize) -> Result<Vec<T>> {
    if rate == 0 {
        return Err(violation(Error::ZeroRate));
    }
    let mut output = vec![T::zero_value(); expanded_len(input.len(), rate, 0)?];
    expand_into(&mut output, input, rate)?;
    Ok(output)
}

/// Length of `input_len` samples expanded by `rate`. A length that does not fit a `usize`
/// is reported as an output of `usize::MAX` samples being required.
#[inline]
fn expanded_len(input_len: usize, rate: usize, actual: usize) -> Result<usize> {
    input_len.checked_mul(rate).ok_or_else(|| {
        violation(Error::OutputLength {
            expected: usize::MAX,
            actual,
        })
    })
}
