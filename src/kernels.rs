//! Elementwise arithmetic over sample slices.
//!
//! Each operation exists in a vector-vector form, combining two slices position by
//! position, and a `_scalar` form combining every element of a slice with one value.
//! Results are written into a caller-provided slice of the same length.

use crate::error::{violation, Error, Result};
use crate::Sample;

fn binary<T, F>(out: &mut [T], a: &[T], b: &[T], op: F) -> Result<()>
where
    T: Sample,
    F: Fn(T, T) -> T,
{
    check_len(out.len(), a.len())?;
    check_len(out.len(), b.len())?;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = op(x, y);
    }
    Ok(())
}

fn scalar<T, F>(out: &mut [T], a: &[T], b: T, op: F) -> Result<()>
where
    T: Sample,
    F: Fn(T, T) -> T,
{
    check_len(out.len(), a.len())?;
    for (o, &x) in out.iter_mut().zip(a) {
        *o = op(x, b);
    }
    Ok(())
}

#[inline]
fn check_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(violation(Error::LengthMismatch { left, right }));
    }
    Ok(())
}

/// `out[i] = a[i] + b[i]`
pub fn add<T: Sample>(out: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    binary(out, a, b, |x, y| x + y)
}

/// `out[i] = a[i] - b[i]`
pub fn subtract<T: Sample>(out: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    binary(out, a, b, |x, y| x - y)
}

/// `out[i] = a[i] * b[i]`
pub fn multiply<T: Sample>(out: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    binary(out, a, b, |x, y| x * y)
}

/// `out[i] = a[i] / b[i]`
pub fn divide<T: Sample>(out: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    binary(out, a, b, |x, y| x / y)
}

/// `out[i] = a[i] + b`
pub fn add_scalar<T: Sample>(out: &mut [T], a: &[T], b: T) -> Result<()> {
    scalar(out, a, b, |x, y| x + y)
}

/// `out[i] = a[i] - b`
pub fn subtract_scalar<T: Sample>(out: &mut [T], a: &[T], b: T) -> Result<()> {
    scalar(out, a, b, |x, y| x - y)
}

/// `out[i] = a[i] * b`
pub fn multiply_scalar<T: Sample>(out: &mut [T], a: &[T], b: T) -> Result<()> {
    scalar(out, a, b, |x, y| x * y)
}

/// `out[i] = a[i] / b`
pub fn divide_scalar<T: Sample>(out: &mut [T], a: &[T], b: T) -> Result<()> {
    scalar(out, a, b, |x, y| x / y)
}
