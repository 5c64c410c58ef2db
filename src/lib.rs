//! Sample rate conversion by integer and rational factors.
//!
//! The building blocks are:
//!
//! - [`decimate`] and [`expand`], which drop samples or stuff zeros to change the rate by
//!   an integer factor without filtering.
//! - [`Polyphase`], a prototype low-pass FIR filter split into its polyphase components.
//! - [`interpolate`], which raises the rate by the number of phases of a bank.
//! - [`resample`], which converts by any rational ratio and can be resumed chunk by chunk.
//!
//! Every operation also has an `*_into` form writing into a caller-provided buffer.
//!
//! Sample positions and rate ratios are exact [`Rational`] numbers, so a long stream
//! resampled in many pieces gives the very same samples as one call over all of it.
//!
//! # Example
//!
//! Converting 2000 Hz to 3000 Hz with a bank of 3 phases:
//!
//! ```rust
//! use rational_resample::{
//!     rational, resample, resampling_filter_cutoff, resampling_length, ConvolutionMode,
//!     Polyphase,
//! };
//!
//! let input: Vec<f32> = (0..100).map(|i| (i as f32 * 0.05).sin()).collect();
//! let ratio = rational(2000, 3000);
//!
//! // Design the prototype for this cutoff with your filter design tool of choice.
//! let _cutoff = resampling_filter_cutoff(ratio, 3).unwrap();
//! let taps = [0.1f32, 0.3, 0.6, 1.0, 0.6, 0.3, 0.1];
//! let bank = Polyphase::decompose(&taps, 3).unwrap();
//!
//! let max = resampling_length(input.len(), taps.len(), 3, ratio, ConvolutionMode::Full).unwrap();
//! let output = resample(&input, &bank, ratio, rational(0, 1), max.floor().to_integer() as usize)
//!     .unwrap();
//! assert_eq!(output.len(), 153);
//! ```
//!
//! # Optional features
//!
//! - `tracing`: emits trace and debug events for resampling calls and rejected arguments.
//! - `64bit`: makes [`Float`] an `f64` instead of an `f32`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

mod common;
mod error;
mod polyphase;
mod sample;

pub mod conversions;
pub mod kernels;
pub mod math;

pub use crate::common::{convolution_length, rational, ConvolutionMode, Float, Rational};
pub use crate::conversions::resample::{
    change_sample_rate, continuation, dot_product_sample, input_index_to_sample,
    resampling_delay, resampling_filter_cutoff, resampling_filter_cutoff_exact,
    resampling_length, resampling_start_point, PhaseSample,
};
pub use crate::conversions::{
    decimate, decimate_into, expand, expand_into, interpolate, interpolate_into, resample,
    resample_into, ContinuationParams,
};
pub use crate::error::{Error, Result};
pub use crate::polyphase::{Polyphase, PolyphaseBank, PolyphaseView};
pub use crate::sample::Sample;
