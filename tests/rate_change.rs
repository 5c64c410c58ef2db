use approx::assert_abs_diff_eq;
use rstest::rstest;

use rational_resample::{
    convolution_length, decimate, expand, interpolate, interpolate_into, kernels, ConvolutionMode,
    Polyphase, PolyphaseBank,
};

mod test_support;
use test_support::{convolve_full, interpolation_filter, sine};

#[rstest]
#[case(2, 9)]
#[case(3, 19)]
#[case(4, 24)]
#[case(5, 7)]
fn interpolation_equals_expansion_and_filtering(#[case] num_phases: usize, #[case] taps: usize) {
    let input = sine(33, 0.04);
    let filter = interpolation_filter(taps, num_phases, 1.0 / num_phases as f64);
    let bank = Polyphase::decompose(&filter, num_phases).unwrap();

    let expected = convolve_full(&expand(&input, num_phases).unwrap(), &filter);
    let len = convolution_length(input.len() * num_phases, taps, ConvolutionMode::Full);
    assert_eq!(len, expected.len());

    let output = interpolate(&input, &bank, 0, len).unwrap();
    for (o, e) in output.iter().zip(&expected) {
        assert_abs_diff_eq!(o, e, epsilon = 1e-12);
    }
}

#[test]
fn interpolate_then_decimate_restores_input() {
    // A windowed sinc at the input Nyquist frequency passes every P-th expanded sample
    // through untouched, so decimating after the group delay gives the input back.
    let num_phases = 3;
    let taps = 6 * num_phases + 1;
    let delay = (taps - 1) / 2;
    let input = sine(40, 0.02);
    let bank = Polyphase::decompose(
        &interpolation_filter(taps, num_phases, 1.0 / num_phases as f64),
        num_phases,
    )
    .unwrap();

    let interpolated = interpolate(&input, &bank, delay, input.len() * num_phases).unwrap();
    let restored = decimate(&interpolated, num_phases).unwrap();
    assert_eq!(restored.len(), input.len());
    for (r, i) in restored.iter().zip(&input) {
        assert_abs_diff_eq!(r, i, epsilon = 1e-12);
    }
}

#[test]
fn interpolation_into_pieces() {
    let input = sine(16, 0.1);
    let num_phases = 4;
    let taps = 11;
    let filter = interpolation_filter(taps, num_phases, 0.25);
    let bank = Polyphase::decompose(&filter, num_phases).unwrap();
    let len = convolution_length(input.len() * num_phases, taps, ConvolutionMode::Full);

    let whole = interpolate(&input, &bank.as_view(), 0, len).unwrap();
    let mut pieces = vec![0.0; len];
    let (head, tail) = pieces.split_at_mut(len / 3);
    interpolate_into(head, &input, &bank, 0).unwrap();
    interpolate_into(tail, &input, &bank, len / 3).unwrap();
    assert_eq!(pieces, whole);
    assert_eq!(bank.filter_count(), num_phases);
}

#[test]
fn scaling_commutes_with_interpolation() {
    let input = sine(20, 0.07);
    let filter = interpolation_filter(9, 2, 0.5);
    let bank = Polyphase::decompose(&filter, 2).unwrap();
    let len = convolution_length(40, 9, ConvolutionMode::Full);

    let mut scaled = vec![0.0; input.len()];
    kernels::multiply_scalar(&mut scaled, &input, 0.5).unwrap();
    let a = interpolate(&scaled, &bank, 0, len).unwrap();

    let b = interpolate(&input, &bank, 0, len).unwrap();
    let mut b_scaled = vec![0.0; len];
    kernels::multiply_scalar(&mut b_scaled, &b, 0.5).unwrap();

    let mut difference = vec![0.0; len];
    kernels::subtract(&mut difference, &a, &b_scaled).unwrap();
    for d in difference {
        assert_abs_diff_eq!(d, 0.0, epsilon = 1e-12);
    }
}
