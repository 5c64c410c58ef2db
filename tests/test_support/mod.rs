#![allow(dead_code)]
/// in separate folder so its not ran as integration test
/// shared signals, filters and the brute force reference the integration tests compare to.
use std::f64::consts::PI;

use rational_resample::{expand, Rational};

/// `len` samples of a sine with `cycles_per_sample` cycles per sample.
pub fn sine(len: usize, cycles_per_sample: f64) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * PI * cycles_per_sample * i as f64).sin())
        .collect()
}

/// A short signal with some structure and no symmetry, handy for exact comparisons.
pub fn ramp_with_noise(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| i as f64 * 0.125 - ((i * 7919) % 13) as f64 * 0.25)
        .collect()
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

fn hann(index: usize, len: usize) -> f64 {
    if len == 1 {
        return 1.0;
    }
    0.5 - 0.5 * (2.0 * PI * index as f64 / (len - 1) as f64).cos()
}

/// Hann windowed sinc low-pass with `taps` taps, `cutoff` relative to the Nyquist frequency
/// of the rate it runs at, and a gain of `num_phases` to make up for zero stuffing.
pub fn interpolation_filter(taps: usize, num_phases: usize, cutoff: f64) -> Vec<f64> {
    let center = (taps - 1) as f64 / 2.0;
    (0..taps)
        .map(|k| {
            num_phases as f64 * cutoff * sinc(cutoff * (k as f64 - center)) * hann(k, taps)
        })
        .collect()
}

/// Straightforward full convolution.
pub fn convolve_full(input: &[f64], filter: &[f64]) -> Vec<f64> {
    if input.is_empty() || filter.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; input.len() + filter.len() - 1];
    for (i, &x) in input.iter().enumerate() {
        for (k, &h) in filter.iter().enumerate() {
            out[i + k] += x * h;
        }
    }
    out
}

/// Resampling done the slow way: expand, filter, then linearly interpolate the filtered
/// signal at every output position. Samples past either end of the filtered signal are zero.
pub fn reference_resample(
    input: &[f64],
    filter: &[f64],
    num_phases: usize,
    sample_rates: Rational,
    start_point: Rational,
    len: usize,
) -> Vec<f64> {
    let expanded = expand(input, num_phases).unwrap();
    let filtered = convolve_full(&expanded, filter);
    let at = |index: i64| -> f64 {
        usize::try_from(index)
            .ok()
            .and_then(|i| filtered.get(i))
            .copied()
            .unwrap_or(0.0)
    };

    (0..len)
        .map(|k| {
            let position = (start_point + k as i64) * sample_rates * num_phases as i64;
            let index = position.floor().to_integer();
            let t = position.fract();
            let t = *t.numer() as f64 / *t.denom() as f64;
            at(index) * (1.0 - t) + at(index + 1) * t
        })
        .collect()
}
