/*!
This module contains the functions that change the sample rate of a signal.

This includes plain decimation and zero-stuffing expansion by an integer rate, polyphase
interpolation by an integer rate, and resampling by an arbitrary rational ratio.

Every operation comes in two forms: `*_into` writes into a caller-provided output slice of
exactly the required size, the other form allocates the output and returns it.
*/
pub use self::interpolate::{interpolate, interpolate_into};
pub use self::rate::{decimate, decimate_into, expand, expand_into};
pub use self::resample::{resample, resample_into, ContinuationParams};

mod interpolate;
mod rate;
pub mod resample;
