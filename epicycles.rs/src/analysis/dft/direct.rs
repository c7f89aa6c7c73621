#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

use std::f64::consts::TAU;

use rustfft::num_complex::Complex64;

use crate::{
	analysis::{dft::FourierTransform, Coefficient},
	InvalidInputError,
};

/// Discrete Fourier transform computed straight from its definition:
///
/// `c_k = 1/N · Σ samples[n] · e^(-2πi·k·n/N)`
///
/// The output is in natural bin order, `frequency` set to the bin index.
///
/// # Errors
/// [`InvalidInputError::EmptySignal`] if `samples` is empty.
pub fn dft(samples: &[Complex64]) -> Result<Vec<Coefficient>, InvalidInputError> {
	let n = samples.len();
	if n == 0 {
		return Err(InvalidInputError::EmptySignal);
	}

	// e^(-2πi·j/N) only depends on k·n mod N
	let twiddles: Vec<Complex64> = (0..n)
		.map(|j| Complex64::from_polar(1., -TAU * j as f64 / n as f64))
		.collect();
	let normalization_factor = 1. / n as f64;

	Ok((0..n)
		.map(|k| {
			let sum: Complex64 = samples
				.iter()
				.enumerate()
				.map(|(i, sample)| sample * twiddles[(k * i) % n])
				.sum();
			Coefficient::new(sum * normalization_factor, k as isize)
		})
		.collect())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDft;

impl FourierTransform for DirectDft {
	fn transform(&mut self, signal: &[Complex64]) -> Result<Vec<Coefficient>, InvalidInputError> {
		dft(signal)
	}
}
